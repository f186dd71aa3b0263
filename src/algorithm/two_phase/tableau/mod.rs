//! # Data structures for Simplex
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
//!
//! The tableau is dense. All values, including the objective row and the right-hand side column,
//! live in a single buffer with a fixed row stride. Columns are ordered as
//!
//! ```text
//! | decision variables | slack variables | artificial variables | right-hand side |
//! ```
//!
//! and the objective row is stored after the constraint rows. Artificial variables only exist
//! during the first phase; they form an index range directly before the right-hand side, so they
//! can be dropped by compacting the buffer in place.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Index, IndexMut, Range};

use num_traits::{One, Zero};
use relp_num::Signed;

use crate::data::linear_program::standard_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

pub mod pivot;

/// The simplex tableau in slack form.
///
/// The objective row represents `z - <c, x> = 0`. Its entries are the negated relative costs, so
/// the current basis is optimal when none of them is negative, and its right-hand side holds the
/// objective function value of the current basic solution.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Tableau<F> {
    /// All values, row after row, objective row last.
    ///
    /// Has length `(nr_rows + 1) * stride`.
    data: Vec<F>,
    /// Number of values in each row: all variables and the right-hand side.
    stride: usize,

    /// Number of constraint rows (not counting the objective row).
    nr_rows: usize,
    nr_decision_variables: usize,
    nr_slack_variables: usize,
    nr_artificial_variables: usize,

    /// For each constraint row, the index of the variable that is basic in it.
    ///
    /// Always has length `nr_rows`.
    basis: Vec<usize>,
}

impl<F: OrderedField> Tableau<F> {
    /// Create the slack form of a linear program in standard form.
    ///
    /// Every constraint gets a slack variable, and the slack variables form the initial basis.
    /// This basis is feasible only if `b >= 0`; otherwise, artificial variables should be added
    /// before starting the simplex method.
    pub fn new(program: &LinearProgram<F>) -> Self {
        let nr_rows = program.nr_constraints();
        let nr_decision_variables = program.nr_variables();
        let stride = nr_decision_variables + nr_rows + 1;

        let mut data = Vec::with_capacity((nr_rows + 1) * stride);
        for (i, (row, value)) in program.constraints().iter().zip(program.b()).enumerate() {
            data.extend(row.iter().cloned());
            data.extend((0..nr_rows).map(|k| if k == i { F::one() } else { F::zero() }));
            data.push(value.clone());
        }
        data.extend((0..stride).map(|_| F::zero()));

        let mut tableau = Self {
            data,
            stride,
            nr_rows,
            nr_decision_variables,
            nr_slack_variables: nr_rows,
            nr_artificial_variables: 0,
            basis: (nr_decision_variables..(nr_decision_variables + nr_rows)).collect(),
        };
        tableau.set_objective(program.cost());

        tableau
    }

    /// Replace the objective row.
    ///
    /// The row is first set to `-c` and then expressed in terms of the current basis, such that
    /// all basic columns have a zero relative cost.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients of the decision variables. All other variables get cost
    /// zero.
    pub fn set_objective(&mut self, cost: &[F]) {
        debug_assert_eq!(cost.len(), self.nr_decision_variables);

        let objective_row = self.nr_rows;
        for j in 0..self.stride {
            self[(objective_row, j)] = match cost.get(j) {
                Some(value) => -value.clone(),
                None => F::zero(),
            };
        }

        for row in 0..self.nr_rows {
            let basic = self.basis[row];
            let factor = self[(objective_row, basic)].clone();
            if !factor.is_zero() {
                self.subtract_multiple_of_row(objective_row, row, &factor);
            }
        }
    }

    /// Introduce one artificial variable for each of the given rows.
    ///
    /// Each row is first negated, such that its right-hand side becomes positive. The artificial
    /// variable then becomes basic in that row. The objective row is replaced by the artificial
    /// objective: maximize minus the sum of all artificial variables.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated indices of constraint rows with a negative right-hand side.
    pub fn add_artificial_variables(&mut self, rows: &[usize]) {
        debug_assert_eq!(self.nr_artificial_variables, 0);
        debug_assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(rows.iter().all(|&row| self.rhs(row).is_negative()));

        let nr_new = rows.len();
        let first_artificial = self.nr_non_artificial_variables();
        let new_stride = self.stride + nr_new;

        let mut data = Vec::with_capacity((self.nr_rows + 1) * new_stride);
        for old_row in self.data.chunks(self.stride) {
            let (values, rhs) = old_row.split_at(self.stride - 1);
            data.extend(values.iter().cloned());
            data.extend((0..nr_new).map(|_| F::zero()));
            data.extend(rhs.iter().cloned());
        }
        self.data = data;
        self.stride = new_stride;
        self.nr_artificial_variables = nr_new;

        for (k, &row) in rows.iter().enumerate() {
            self.negate_row(row);
            self[(row, first_artificial + k)] = F::one();
            self.basis[row] = first_artificial + k;
        }

        // Artificial cost is -1 for each artificial variable, its negation is stored
        let objective_row = self.nr_rows;
        let artificial = self.artificial_range();
        for j in 0..self.stride {
            self[(objective_row, j)] = if artificial.contains(&j) {
                F::one()
            } else {
                F::zero()
            };
        }
        for &row in rows {
            self.subtract_multiple_of_row(objective_row, row, &F::one());
        }
    }

    /// Drop all artificial columns.
    ///
    /// The buffer is compacted in place. No artificial variable should be basic when this is
    /// called.
    pub fn remove_artificial_variables(&mut self) {
        debug_assert!(!self.has_artificial_in_basis());
        if self.nr_artificial_variables == 0 {
            return;
        }

        let old_stride = self.stride;
        let new_stride = old_stride - self.nr_artificial_variables;
        let kept = self.nr_non_artificial_variables();
        for row in 0..=self.nr_rows {
            for j in 0..kept {
                self.data.swap(row * new_stride + j, row * old_stride + j);
            }
            self.data.swap(row * new_stride + kept, row * old_stride + old_stride - 1);
        }
        self.data.truncate((self.nr_rows + 1) * new_stride);

        self.stride = new_stride;
        self.nr_artificial_variables = 0;
    }

    /// Multiply a constraint row by minus one.
    ///
    /// Only valid if the basic variable of the row is replaced afterwards.
    fn negate_row(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows);

        for value in self.row_mut(row) {
            *value = -value.clone();
        }
    }

    /// Subtract `factor` times row `source` from row `target`.
    pub(crate) fn subtract_multiple_of_row(&mut self, target: usize, source: usize, factor: &F) {
        debug_assert_ne!(target, source);

        for j in 0..self.stride {
            let difference = factor.clone() * &self[(source, j)];
            if !difference.is_zero() {
                self[(target, j)] -= difference;
            }
        }
    }

    /// Ratio test: the row to pivot on, given the entering column.
    ///
    /// Among the rows with a positive coefficient in the column, the one with the smallest ratio
    /// `rhs / coefficient` is chosen. Ties are broken in favor of the row whose basic variable has
    /// the lowest index.
    ///
    /// # Return value
    ///
    /// `None` if there are no positive coefficients in the column: the entering variable can be
    /// increased without limit.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut best: Option<(usize, F)> = None;
        for row in 0..self.nr_rows {
            let coefficient = &self[(row, column)];
            if !coefficient.is_positive() {
                continue;
            }

            let ratio = self.rhs(row).clone() / coefficient;
            let is_better = match &best {
                None => true,
                Some((best_row, best_ratio)) => {
                    ratio < *best_ratio
                        || (ratio == *best_ratio && self.basis[row] < self.basis[*best_row])
                },
            };
            if is_better {
                best = Some((row, ratio));
            }
        }

        best.map(|(row, _)| row)
    }

    /// The value in the objective row for a column.
    ///
    /// This is the negated relative cost of the variable; it is zero for basic variables.
    pub fn relative_cost(&self, column: usize) -> &F {
        debug_assert!(column < self.nr_columns());

        &self[(self.nr_rows, column)]
    }

    /// Right-hand side of a constraint row, the value of the row's basic variable.
    pub fn rhs(&self, row: usize) -> &F {
        debug_assert!(row < self.nr_rows);

        &self[(row, self.stride - 1)]
    }

    /// Get the cost of the current solution.
    ///
    /// Works for both the artificial and the actual objective.
    pub fn objective_function_value(&self) -> F {
        self[(self.nr_rows, self.stride - 1)].clone()
    }

    /// Values of the decision variables in the current basic solution.
    ///
    /// Basic variables take the value of the right-hand side of their row, all others are zero.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_decision_variables];
        for (row, &column) in self.basis.iter().enumerate() {
            if column < self.nr_decision_variables {
                values[column] = self.rhs(row).clone();
            }
        }

        values
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis.contains(&column)
    }

    /// Whether any artificial variable is still basic.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis.iter().any(|column| self.artificial_range().contains(column))
    }

    /// Rows in which an artificial variable is basic, in increasing order.
    pub fn rows_with_artificial_basis(&self) -> Vec<usize> {
        let artificial = self.artificial_range();
        (0..self.nr_rows)
            .filter(|&row| artificial.contains(&self.basis[row]))
            .collect()
    }

    /// Index of the variable that is basic in a row.
    pub fn basic_variable(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Basic variable of every row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Number of constraint rows, the objective row not included.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of variables, that is, all columns except the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.stride - 1
    }

    /// Index of the objective row, to be used with the `Index` implementation.
    pub fn objective_row(&self) -> usize {
        self.nr_rows
    }

    /// Index of the right-hand side column, to be used with the `Index` implementation.
    pub fn rhs_column(&self) -> usize {
        self.stride - 1
    }

    /// Number of columns of the linear program this tableau was built from.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Number of artificial columns still in the tableau, zero once phase one is done.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Number of decision and slack variables.
    pub fn nr_non_artificial_variables(&self) -> usize {
        self.nr_decision_variables + self.nr_slack_variables
    }

    /// Column indices of the artificial variables.
    pub fn artificial_range(&self) -> Range<usize> {
        let start = self.nr_non_artificial_variables();
        start..(start + self.nr_artificial_variables)
    }

    fn row_mut(&mut self, row: usize) -> &mut [F] {
        let start = row * self.stride;
        &mut self.data[start..(start + self.stride)]
    }
}

impl<F> Index<(usize, usize)> for Tableau<F> {
    type Output = F;

    /// Cell by `(row, column)`. Row `nr_rows()` is the objective row, column `nr_columns()` the
    /// right-hand side.
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row <= self.nr_rows);
        debug_assert!(column < self.stride);

        &self.data[row * self.stride + column]
    }
}

impl<F> IndexMut<(usize, usize)> for Tableau<F> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row <= self.nr_rows);
        debug_assert!(column < self.stride);

        &mut self.data[row * self.stride + column]
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: OrderedField>(tableau: &Tableau<F>) -> bool {
    is_in_basic_solution_state(tableau)
        && (0..tableau.nr_rows()).all(|row| !tableau.rhs(row).is_negative())
}

/// Check the basis invariant: every basic column is the unit vector of its row over the
/// constraint rows and has a zero relative cost.
pub fn is_in_basic_solution_state<F: OrderedField>(tableau: &Tableau<F>) -> bool {
    tableau.basis().len() == tableau.nr_rows()
        && tableau.basis().iter().enumerate().all(|(row, &column)| {
            (0..tableau.nr_rows()).all(|i| {
                let value = &tableau[(i, column)];
                if i == row { value.is_one() } else { value.is_zero() }
            }) && tableau.relative_cost(column).is_zero()
        })
}

impl<F: OrderedField> Tableau<F> {
    /// Name of a variable by column index, used when printing the tableau.
    pub fn variable_name(&self, column: usize) -> String {
        if column < self.nr_decision_variables {
            format!("x{}", column)
        } else if column < self.nr_non_artificial_variables() {
            format!("s{}", column - self.nr_decision_variables)
        } else {
            format!("a{}", column - self.nr_non_artificial_variables())
        }
    }
}

/// Prints the tableau as a slack form dictionary.
///
/// The first line expresses the objective in the non-basic variables, every following line a basic
/// variable.
impl<F: OrderedField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let non_basic = (0..self.nr_columns())
            .filter(|&j| !self.is_in_basis(j))
            .collect::<Vec<_>>();
        let width = 8;

        write!(f, "{:>4} = {:>width$}", "z", self.objective_function_value().to_string(), width = width)?;
        for &j in &non_basic {
            let value = -self.relative_cost(j).clone();
            write!(f, " + {:>width$} {:<4}", value.to_string(), self.variable_name(j), width = width)?;
        }
        writeln!(f)?;

        for row in 0..self.nr_rows {
            let name = self.variable_name(self.basis[row]);
            write!(f, "{:>4} = {:>width$}", name, self.rhs(row).to_string(), width = width)?;
            for &j in &non_basic {
                write!(f, " - {:>width$} {:<4}", self[(row, j)].to_string(), self.variable_name(j), width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
