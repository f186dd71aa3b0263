//! # Linear programs in standard form
//!
//! Maximize `<c, x>` subject to `Ax <= b` and `x >= 0`. This is the only form the simplex
//! algorithm accepts; the `general_form` module converts to it.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use relp_num::Signed;

use crate::data::number_types::traits::OrderedField;

/// A linear program in standard form.
///
/// The dimensions are checked once, at construction. The data can't be changed afterwards, the
/// tableau is derived from it and all mutation happens there.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LinearProgram<F> {
    /// Objective function coefficients, one for each variable.
    cost: Vec<F>,
    /// Dense constraint matrix, row major.
    ///
    /// Has `b.len()` rows, each of length `cost.len()`.
    constraints: Vec<Vec<F>>,
    /// Right-hand side, one value for each constraint.
    b: Vec<F>,
}

impl<F: OrderedField> LinearProgram<F> {
    /// Create a new linear program in standard form.
    ///
    /// The number of variables is read from the cost vector, the number of constraints from the
    /// right-hand side.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective function coefficients `c`, to be maximized.
    /// * `constraints`: Matrix `A`, a `Vec` of rows.
    /// * `b`: Right-hand side.
    ///
    /// # Errors
    ///
    /// A `ShapeError` if `A` doesn't have `b.len()` rows of `cost.len()` columns.
    pub fn new(cost: Vec<F>, constraints: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, ShapeError> {
        if constraints.len() != b.len() {
            return Err(ShapeError::NrRows {
                expected: b.len(),
                found: constraints.len(),
            });
        }

        if let Some((row, found)) = constraints.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != cost.len()) {
            return Err(ShapeError::NrColumns { row, expected: cost.len(), found });
        }

        Ok(Self { cost, constraints, b })
    }

    /// Objective function coefficients.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint matrix rows.
    pub fn constraints(&self) -> &[Vec<F>] {
        &self.constraints
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }

    /// Whether `x = 0` is a feasible solution.
    ///
    /// If it is, the slack variables form a basic feasible solution and the first phase of the
    /// two-phase method can be skipped.
    pub fn is_origin_feasible(&self) -> bool {
        !self.b.iter().any(|value| value.is_negative())
    }
}

impl<F: OrderedField> Display for LinearProgram<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "maximize")?;
        for (j, value) in self.cost.iter().enumerate() {
            write!(f, " {:>5} x{}", value.to_string(), j)?;
        }
        writeln!(f)?;

        for (row, value) in self.constraints.iter().zip(&self.b) {
            write!(f, "        ")?;
            for (j, coefficient) in row.iter().enumerate() {
                write!(f, " {:>5} x{}", coefficient.to_string(), j)?;
            }
            writeln!(f, " <= {}", value)?;
        }

        Ok(())
    }
}

/// The dimensions of a linear program's data disagree.
///
/// Not something the solver can work around: the caller, typically a parser, produced
/// inconsistent data.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ShapeError {
    /// The number of rows of `A` is not equal to the length of `b`.
    NrRows {
        /// Length of `b`.
        expected: usize,
        /// Number of rows of `A`.
        found: usize,
    },
    /// A row of `A` doesn't have as many entries as `c`.
    NrColumns {
        /// Index of the first offending row.
        row: usize,
        /// Length of `c`.
        expected: usize,
        /// Length of that row.
        found: usize,
    },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NrRows { expected, found } => write!(
                f, "ShapeError: the constraint matrix has {} rows, but there are {} right-hand side values",
                found, expected,
            ),
            ShapeError::NrColumns { row, expected, found } => write!(
                f, "ShapeError: constraint row {} has {} coefficients, but there are {} variables",
                row, found, expected,
            ),
        }
    }
}

impl Error for ShapeError {}
