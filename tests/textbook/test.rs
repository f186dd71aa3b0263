use relp_num::RB;

use simplex::algorithm::{Settings, solve_with, SolveError};
use simplex::algorithm::two_phase::Phase;
use simplex::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
use simplex::data::linear_program::elements::LinearProgramType;
use simplex::data::linear_program::solution::Solution;
use simplex::data::number_types::Rational;
use simplex::io::import;

use super::{get_test_file_path, solve_file};

fn optimum(name: &str) -> Solution<Rational> {
    match solve_file(name, &Settings::default()).0 {
        LinearProgramType::FiniteOptimum(solution) => solution,
        other => panic!("expected an optimum for {}, got {}", name, other),
    }
}

#[test]
fn production() {
    let solution = optimum("production");
    assert_eq!(solution.objective_value(), &RB!(12));
    assert_eq!(solution.value("x"), Some(&RB!(4)));
    assert_eq!(solution.value("y"), Some(&RB!(0)));
}

#[test]
fn covering() {
    let solution = optimum("covering");
    assert_eq!(solution.objective_value(), &RB!(9));
    assert_eq!(solution.value("x"), Some(&RB!(3)));
    assert_eq!(solution.value("y"), Some(&RB!(1)));
}

#[test]
fn infeasible() {
    let (result, _) = solve_file("infeasible", &Settings::default());
    assert_eq!(result, LinearProgramType::Infeasible);
    assert_eq!(result.to_string(), "problem is infeasible");
}

#[test]
fn unbounded() {
    let (result, statistics) = solve_file("unbounded", &Settings::default());
    assert_eq!(result, LinearProgramType::Unbounded);
    assert_eq!(result.to_string(), "problem is unbounded");
    assert_eq!(statistics.iterations(Phase::One), 0);
}

#[test]
fn equality() {
    let solution = optimum("equality");
    assert_eq!(solution.objective_value(), &RB!(5));
    assert_eq!(solution.value("x"), Some(&RB!(0)));
    assert_eq!(solution.value("y"), Some(&RB!(2)));
}

#[test]
fn fractional() {
    let (result, statistics) = solve_file("fractional", &Settings::default());
    assert!(statistics.iterations(Phase::One) > 0);
    assert_eq!(result, LinearProgramType::FiniteOptimum(Solution::new(
        RB!(2),
        vec![("x1".to_string(), RB!(14, 9)), ("x2".to_string(), RB!(10, 9))],
    )));
}

#[test]
fn beale_with_blands_rule() {
    let solution = optimum("beale");
    assert_eq!(solution.objective_value(), &RB!(1));
    assert_eq!(solution.value("x1"), Some(&RB!(1)));
    assert_eq!(solution.value("x3"), Some(&RB!(1)));
}

#[test]
fn beale_with_largest_coefficient() {
    let general = import::<Rational>(&get_test_file_path("beale")).unwrap();
    let program = general.derive_standard_form().unwrap();
    let settings = Settings {
        pivot_rule: PivotRuleKind::LargestCoefficient,
        iteration_limit: Some(100),
    };

    assert_eq!(solve_with(&program, &settings), Err(SolveError::IterationLimit(100)));
}

#[test]
fn same_result_for_both_rules_without_cycling() {
    for name in ["production", "covering", "equality", "fractional"] {
        let bland = solve_file(name, &Settings::default()).0;
        let settings = Settings {
            pivot_rule: PivotRuleKind::LargestCoefficient,
            iteration_limit: Some(100),
        };
        let largest_coefficient = solve_file(name, &settings).0;

        match (bland, largest_coefficient) {
            (LinearProgramType::FiniteOptimum(left), LinearProgramType::FiniteOptimum(right)) => {
                assert_eq!(left.objective_value(), right.objective_value(), "{}", name);
            },
            (left, right) => panic!("{}: {} and {}", name, left, right),
        }
    }
}
