//! # Algorithms
//!
//! The entry points of the solver: `solve` for the default configuration and `solve_with` to
//! choose the pivot rule or limit the number of iterations.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::algorithm::two_phase::{Statistics, TwoPhase};
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, LargestCoefficient, PivotRuleKind};
use crate::algorithm::two_phase::tableau::pivot::DegeneratePivot;
use crate::data::linear_program::standard_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. None of these is an error: they are all
/// answers about the problem that was given.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum OptimizationResult<F> {
    /// There is an optimal solution.
    FiniteOptimum {
        /// Value of `<c, x>` at the optimum.
        objective_value: F,
        /// Value of each decision variable, ordered as the columns of the problem.
        solution: Vec<F>,
    },
    /// No `x >= 0` satisfies the constraints.
    Infeasible,
    /// The objective function can be made arbitrarily large.
    Unbounded,
}

/// Configuration of the solver.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
pub struct Settings {
    /// Strategy to select the entering variable.
    pub pivot_rule: PivotRuleKind,
    /// Maximum number of pivots over both phases.
    ///
    /// Not needed for termination when using Bland's rule.
    pub iteration_limit: Option<usize>,
}

/// Solving stopped before an `OptimizationResult` was found.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum SolveError {
    /// A pivot was attempted on a zero element; a bug in the pivot selection.
    DegeneratePivot(DegeneratePivot),
    /// The configured number of iterations was reached.
    IterationLimit(usize),
}

impl From<DegeneratePivot> for SolveError {
    fn from(error: DegeneratePivot) -> Self {
        SolveError::DegeneratePivot(error)
    }
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::DegeneratePivot(error) => error.fmt(f),
            SolveError::IterationLimit(limit) => write!(f, "IterationLimit: no result after {} pivots", limit),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::DegeneratePivot(error) => Some(error),
            SolveError::IterationLimit(_) => None,
        }
    }
}

/// Solve a linear program in standard form with the two-phase simplex method and Bland's rule.
///
/// # Panics
///
/// When a pivot on a zero element is attempted. The pivot selection rules make that impossible,
/// so this would be a bug in this crate.
pub fn solve<F: OrderedField>(program: &LinearProgram<F>) -> OptimizationResult<F> {
    match solve_with(program, &Settings::default()) {
        Ok((result, _)) => result,
        Err(error) => panic!("Simplex method failed without iteration limit: {}", error),
    }
}

/// Solve a linear program in standard form with the two-phase simplex method.
///
/// # Return value
///
/// The result, together with the number of pivots that were needed.
///
/// # Errors
///
/// When the iteration limit is reached, or, only due to a bug, when a zero pivot is attempted.
pub fn solve_with<F: OrderedField>(
    program: &LinearProgram<F>,
    settings: &Settings,
) -> Result<(OptimizationResult<F>, Statistics), SolveError> {
    log::info!(
        "Solving a problem with {} variables and {} constraints using {}",
        program.nr_variables(), program.nr_constraints(), settings.pivot_rule,
    );

    match settings.pivot_rule {
        PivotRuleKind::Bland => {
            TwoPhase::<_, Bland>::new(program, settings.iteration_limit).solve()
        },
        PivotRuleKind::LargestCoefficient => {
            TwoPhase::<_, LargestCoefficient>::new(program, settings.iteration_limit).solve()
        },
    }
}
