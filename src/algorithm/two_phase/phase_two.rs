//! # Phase two: optimizing
//!
//! Starting from a basic feasible solution, pivot until no improving column is left or until a
//! column is found along which the objective grows without bound.
use log::info;

use crate::algorithm::{OptimizationResult, SolveError};
use crate::algorithm::two_phase::{Phase, PhaseResult, Statistics};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::number_types::traits::OrderedField;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    rule: &mut PR,
    statistics: &mut Statistics,
    iteration_limit: Option<usize>,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    debug_assert_eq!(tableau.nr_artificial_variables(), 0);
    debug_assert!(is_in_basic_feasible_solution_state(tableau));

    let result = match super::primal(tableau, rule, Phase::Two, statistics, iteration_limit)? {
        PhaseResult::Optimal => {
            let objective_value = tableau.objective_function_value();
            info!("Phase two: optimum {} found", objective_value);

            OptimizationResult::FiniteOptimum {
                objective_value,
                solution: tableau.current_bfs(),
            }
        },
        PhaseResult::Unbounded { column } => {
            info!("Phase two: objective unbounded along {}", tableau.variable_name(column));

            OptimizationResult::Unbounded
        },
    };

    Ok(result)
}
