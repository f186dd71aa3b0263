//! # The two-phase Simplex method
//!
//! When the origin is not feasible, the first phase searches a basic feasible solution by
//! minimizing the sum of a set of artificial variables. The second phase then optimizes the
//! actual objective function, starting from that solution.
//!
//! The controller is an explicit state machine, see `State`. Both phases share the same pivoting
//! loop, they only differ in the objective row that drives it.
use std::fmt;
use std::fmt::{Display, Formatter};

use enum_map::{Enum, EnumMap};
use log::{debug, info, trace};

use crate::algorithm::{OptimizationResult, SolveError};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::standard_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// The two phases of the method.
#[derive(Enum, Debug, Eq, PartialEq, Clone, Copy)]
pub enum Phase {
    /// Finding a basic feasible solution.
    One,
    /// Optimizing the objective function.
    Two,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::One => "phase one",
            Phase::Two => "phase two",
        })
    }
}

/// Where the controller is.
///
/// The transitions are
///
/// ```text
/// PhaseOne --feasible--> PhaseTwo --> Terminal(FiniteOptimum | Unbounded)
///     \--> Terminal(Infeasible | Unbounded)
/// ```
///
/// and the controller starts in `PhaseTwo` if the origin is feasible.
#[derive(Eq, PartialEq, Debug)]
pub enum State<F> {
    /// Artificial variables are in the problem.
    PhaseOne,
    /// The tableau is primal feasible.
    PhaseTwo,
    /// Done, the tableau won't change anymore.
    Terminal(OptimizationResult<F>),
}

/// Number of pivots performed in each phase.
#[derive(Eq, PartialEq, Clone, Debug, Default)]
pub struct Statistics {
    iterations: EnumMap<Phase, usize>,
}

impl Statistics {
    /// Pivots performed in one phase.
    pub fn iterations(&self, phase: Phase) -> usize {
        self.iterations[phase]
    }

    /// Pivots performed in both phases together.
    pub fn total_iterations(&self) -> usize {
        self.iterations.values().sum()
    }
}

/// Controller of the two-phase method.
///
/// Owns the tableau for the duration of the solve.
pub struct TwoPhase<'a, F, PR> {
    program: &'a LinearProgram<F>,
    tableau: Tableau<F>,
    rule: PR,
    state: State<F>,
    statistics: Statistics,
    iteration_limit: Option<usize>,
}

impl<'a, F, PR> TwoPhase<'a, F, PR>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    /// Create the slack form tableau and decide whether the first phase is needed.
    ///
    /// # Arguments
    ///
    /// * `program`: Problem to solve.
    /// * `iteration_limit`: Maximum number of pivots over both phases, if any.
    pub fn new(program: &'a LinearProgram<F>, iteration_limit: Option<usize>) -> Self {
        let state = if program.is_origin_feasible() {
            info!("Origin is feasible, skipping phase one");
            State::PhaseTwo
        } else {
            State::PhaseOne
        };

        Self {
            program,
            tableau: Tableau::new(program),
            rule: PR::new(),
            state,
            statistics: Statistics::default(),
            iteration_limit,
        }
    }

    /// Run a single phase and move to the next state.
    ///
    /// Does nothing in a terminal state.
    ///
    /// # Errors
    ///
    /// When the iteration limit is reached, or when a zero pivot is attempted.
    pub fn step(&mut self) -> Result<(), SolveError> {
        let next = match &self.state {
            State::PhaseOne => phase_one::primal(
                &mut self.tableau,
                self.program,
                &mut self.rule,
                &mut self.statistics,
                self.iteration_limit,
            )?,
            State::PhaseTwo => State::Terminal(phase_two::primal(
                &mut self.tableau,
                &mut self.rule,
                &mut self.statistics,
                self.iteration_limit,
            )?),
            State::Terminal(_) => return Ok(()),
        };

        self.state = next;
        Ok(())
    }

    /// Step until a terminal state is reached.
    pub fn solve(mut self) -> Result<(OptimizationResult<F>, Statistics), SolveError> {
        while !matches!(self.state, State::Terminal(_)) {
            self.step()?;
        }

        info!(
            "Done after {} pivots ({} in phase one)",
            self.statistics.total_iterations(), self.statistics.iterations(Phase::One),
        );
        match self.state {
            State::Terminal(result) => Ok((result, self.statistics)),
            State::PhaseOne | State::PhaseTwo => unreachable!("only a terminal state ends the loop"),
        }
    }

    /// Phase the algorithm is in, or the outcome once it is done.
    pub fn state(&self) -> &State<F> {
        &self.state
    }

    /// Current tableau, with the basis of the last pivot.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Pivots performed so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// How a run of the pivoting loop ended.
#[derive(Eq, PartialEq, Debug)]
pub(crate) enum PhaseResult {
    /// No column has a negative value in the objective row.
    Optimal,
    /// This column has a negative value in the objective row, but no positive coefficients.
    Unbounded {
        column: usize,
    },
}

/// Pivot until the objective row has no negative entries left.
///
/// While calling this method, the tableau should be in a basic feasible state. This is maintained
/// by every iteration.
///
/// # Return value
///
/// Whether the objective function, the artificial one in the first phase, is bounded.
///
/// # Errors
///
/// When the iteration limit is reached, or when a zero pivot is attempted.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    rule: &mut PR,
    phase: Phase,
    statistics: &mut Statistics,
    iteration_limit: Option<usize>,
) -> Result<PhaseResult, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    assert_eq!(tableau.basis().len(), tableau.nr_rows(), "every row needs exactly one basic variable");

    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        let column = match rule.select_primal_pivot_column(tableau) {
            Some(column) => column,
            None => break Ok(PhaseResult::Optimal),
        };
        let row = match tableau.select_primal_pivot_row(column) {
            Some(row) => row,
            None => break Ok(PhaseResult::Unbounded { column }),
        };

        if let Some(limit) = iteration_limit {
            if statistics.total_iterations() >= limit {
                break Err(SolveError::IterationLimit(limit));
            }
        }

        debug!(
            "{}: {} enters, {} leaves at row {}",
            phase, tableau.variable_name(column), tableau.variable_name(tableau.basic_variable(row)), row,
        );
        tableau.pivot(row, column)?;
        statistics.iterations[phase] += 1;
        debug!("{}: objective value {}", phase, tableau.objective_function_value());
        trace!("Tableau after pivot:\n{}", tableau);
    }
}
