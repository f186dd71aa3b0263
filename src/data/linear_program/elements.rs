//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::data::linear_program::solution::Solution;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "#maximize",
            Objective::Minimize => "#minimize",
        })
    }
}

/// After the second phase, either an optimum is found or the problem is determined to be unbounded.
///
/// Unlike `OptimizationResult`, a finite optimum is expressed in terms of the problem as the user
/// wrote it: named variables, and the objective function value including its direction and
/// constant.
#[allow(missing_docs)]
#[derive(Debug, Eq, PartialEq)]
pub enum LinearProgramType<F> {
    FiniteOptimum(Solution<F>),
    Infeasible,
    Unbounded,
}

impl<F: Display> Display for LinearProgramType<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LinearProgramType::FiniteOptimum(solution) => solution.fmt(f),
            LinearProgramType::Infeasible => f.write_str("problem is infeasible"),
            LinearProgramType::Unbounded => f.write_str("problem is unbounded"),
        }
    }
}
