//! # Phase one: finding a basic feasible solution
//!
//! Every row with a negative right-hand side is negated and receives an artificial variable, which
//! forms a feasible basis together with the slacks of the other rows. The sum of the artificial
//! variables is then minimized. If it reaches zero, the artificial variables can be removed and
//! the remaining basis is feasible for the original problem.
use log::{debug, error, info, trace};
use num_traits::Zero;
use relp_num::Signed;

use crate::algorithm::OptimizationResult;
use crate::algorithm::SolveError;
use crate::algorithm::two_phase::{Phase, PhaseResult, State, Statistics};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::pivot::DegeneratePivot;
use crate::data::linear_program::standard_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

/// Reduces the artificial cost of the basic solution to zero, if possible. In doing so, a basic
/// feasible solution to the original problem is found.
///
/// # Arguments
///
/// * `tableau`: Slack form tableau of `program`, without artificial variables.
/// * `program`: Problem being solved, its cost is restored in the tableau at the end.
///
/// # Return value
///
/// `State::PhaseTwo` if the tableau now holds a basic feasible solution of the original problem
/// with the original objective, a terminal state otherwise.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    program: &LinearProgram<F>,
    rule: &mut PR,
    statistics: &mut Statistics,
    iteration_limit: Option<usize>,
) -> Result<State<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let infeasible_rows = (0..tableau.nr_rows())
        .filter(|&row| tableau.rhs(row).is_negative())
        .collect::<Vec<_>>();
    info!("Phase one: adding {} artificial variables", infeasible_rows.len());
    tableau.add_artificial_variables(&infeasible_rows);
    trace!("Artificial tableau:\n{}", tableau);

    match super::primal(tableau, rule, Phase::One, statistics, iteration_limit)? {
        PhaseResult::Optimal => {},
        PhaseResult::Unbounded { column } => {
            // The artificial objective is bounded from above by zero
            error!(
                "Artificial objective unbounded along column {}, the tableau is inconsistent",
                tableau.variable_name(column),
            );
            return Ok(State::Terminal(OptimizationResult::Unbounded));
        },
    }

    let artificial_value = tableau.objective_function_value();
    if artificial_value.is_negative() {
        info!("Phase one: artificial variables sum to {} at the optimum, the problem is infeasible", -artificial_value);
        return Ok(State::Terminal(OptimizationResult::Infeasible));
    }

    remove_artificial_basis_variables(tableau)?;
    tableau.remove_artificial_variables();
    tableau.set_objective(program.cost());
    debug_assert!(is_in_basic_feasible_solution_state(tableau));

    info!("Phase one: feasible basis found, objective value {}", tableau.objective_function_value());
    trace!("Initial tableau for phase two:\n{}", tableau);

    Ok(State::PhaseTwo)
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of the current solution.
///
/// Every row still has its own slack column, so the rows of the non-artificial part of the
/// tableau are linearly independent. Each row with an artificial basic variable therefore has a
/// non-zero entry in a non-artificial column to pivot on.
fn remove_artificial_basis_variables<F: OrderedField>(
    tableau: &mut Tableau<F>,
) -> Result<(), DegeneratePivot> {
    for row in tableau.rows_with_artificial_basis() {
        debug_assert!(tableau.rhs(row).is_zero());

        let column = (0..tableau.nr_non_artificial_variables())
            .find(|&column| !tableau[(row, column)].is_zero());
        match column {
            Some(column) => {
                debug!(
                    "Phase one: {} replaces artificial {} at zero level",
                    tableau.variable_name(column), tableau.variable_name(tableau.basic_variable(row)),
                );
                tableau.pivot(row, column)?;
            },
            None => panic!("Row {} has no non-zero non-artificial entries, but it has a slack", row),
        }
    }

    Ok(())
}
