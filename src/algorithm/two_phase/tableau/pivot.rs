//! # Pivoting
//!
//! Gauss-Jordan elimination on a single column: the entering variable becomes basic in the pivot
//! row. Nothing in here knows about relative costs or feasibility, the caller selects the pivot.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use num_traits::{One, Zero};

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

impl<F: OrderedField> Tableau<F> {
    /// Bring a column into the basis at a row.
    ///
    /// The pivot row is scaled such that the pivot element becomes one, and a multiple of it is
    /// subtracted from every other row, the objective row included, to make the rest of the column
    /// zero. The variable that was basic in the row leaves the basis.
    ///
    /// # Arguments
    ///
    /// * `row`: Constraint row index, in range `0` until `self.nr_rows()`.
    /// * `column`: Variable index, in range `0` until `self.nr_columns()`.
    ///
    /// # Errors
    ///
    /// `DegeneratePivot` if the element at `(row, column)` is zero. The tableau is unchanged in
    /// that case.
    pub fn pivot(&mut self, row: usize, column: usize) -> Result<(), DegeneratePivot> {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        let pivot_value = self[(row, column)].clone();
        if pivot_value.is_zero() {
            return Err(DegeneratePivot { row, column });
        }

        if !pivot_value.is_one() {
            for j in 0..=self.rhs_column() {
                if !self[(row, j)].is_zero() {
                    let scaled = self[(row, j)].clone() / &pivot_value;
                    self[(row, j)] = scaled;
                }
            }
        }

        for i in 0..=self.objective_row() {
            if i == row {
                continue;
            }

            let factor = self[(i, column)].clone();
            if !factor.is_zero() {
                self.subtract_multiple_of_row(i, row, &factor);
            }
        }

        self.basis[row] = column;

        Ok(())
    }
}

/// A pivot was attempted on a zero element.
///
/// The pivot selection never produces this for a valid tableau, so this indicates a bug in the
/// caller.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct DegeneratePivot {
    /// Row of the zero element.
    pub row: usize,
    /// Column of the zero element.
    pub column: usize,
}

impl Display for DegeneratePivot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DegeneratePivot: can't pivot on the zero element at row {}, column {}", self.row, self.column)
    }
}

impl Error for DegeneratePivot {}
