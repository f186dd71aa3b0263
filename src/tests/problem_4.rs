//! Small problems around the first phase: an infeasible one, and one with an equality constraint
//! that leaves an artificial variable in the basis at zero level.
use relp_num::{RationalBig, RB};

use crate::algorithm::{OptimizationResult, solve};
use crate::data::linear_program::elements::LinearProgramType;
use crate::data::linear_program::standard_form::LinearProgram;
use crate::io::lp::parse;

type T = RationalBig;

#[test]
fn conversion_pipeline_contradictory() {
    let general_form_computed = parse::<T>(CONTRADICTORY_LP_LITERAL_STRING).unwrap();
    let standard_form_computed = general_form_computed.derive_standard_form().unwrap();
    assert_eq!(standard_form_computed, contradictory_standard_form());

    let result = solve(&standard_form_computed);
    assert_eq!(result, OptimizationResult::Infeasible);
    assert_eq!(general_form_computed.compute_solution(result), LinearProgramType::Infeasible);
}

#[test]
fn conversion_pipeline_equality() {
    let general_form_computed = parse::<T>(EQUALITY_LP_LITERAL_STRING).unwrap();
    let standard_form_computed = general_form_computed.derive_standard_form().unwrap();
    assert_eq!(standard_form_computed, equality_standard_form());

    assert_eq!(solve(&standard_form_computed), OptimizationResult::FiniteOptimum {
        objective_value: RB!(4),
        solution: vec![RB!(0), RB!(2)],
    });
}

pub const CONTRADICTORY_LP_LITERAL_STRING: &str = "x >= 1
x <= 0
#maximize x
";

/// `x >= 1` and `x <= 0`.
pub fn contradictory_standard_form() -> LinearProgram<T> {
    LinearProgram::new(
        vec![RB!(1)],
        vec![vec![RB!(-1)], vec![RB!(1)]],
        vec![RB!(-1), RB!(0)],
    ).unwrap()
}

pub const EQUALITY_LP_LITERAL_STRING: &str = "x + y = 2
#maximize x + 2*y
";

/// The equality `x + y = 2` as two inequalities.
pub fn equality_standard_form() -> LinearProgram<T> {
    LinearProgram::new(
        vec![RB!(1), RB!(2)],
        vec![
            vec![RB!(1), RB!(1)],
            vec![RB!(-1), RB!(-1)],
        ],
        vec![RB!(2), RB!(-2)],
    ).unwrap()
}

/// Maximize `x0 + x1` subject to `x0 <= -1`.
pub fn negative_rhs_standard_form() -> LinearProgram<T> {
    LinearProgram::new(
        vec![RB!(1), RB!(1)],
        vec![vec![RB!(1), RB!(0)]],
        vec![RB!(-1)],
    ).unwrap()
}
