//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::fmt;
use std::fmt::{Display, Formatter};

use relp_num::Signed;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. That decision is made by the ratio
/// test of the tableau, independent of the strategy.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of a non-basic column with a negative value in the objective row, or `None` if
    /// there is no such column and the current basis is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize>;
}

/// Bland's rule: pivot on the column with the lowest index that has a negative relative cost.
///
/// Combined with the ratio test preferring the leaving variable with the lowest index, the simplex
/// method terminates on every problem.
pub struct Bland;
impl<F: OrderedField> PivotRule<F> for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column).is_negative())
    }
}

/// Dantzig's rule: pivot on the column with the most negative value in the objective row.
///
/// Ties are broken by the lowest index. Often needs fewer pivots than Bland's rule, but it can
/// cycle on degenerate problems.
pub struct LargestCoefficient;
impl<F: OrderedField> PivotRule<F> for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        let mut smallest: Option<(usize, &F)> = None;
        for column in (0..tableau.nr_columns()).filter(|&column| !tableau.is_in_basis(column)) {
            let cost = tableau.relative_cost(column);
            if !cost.is_negative() {
                continue;
            }

            match smallest {
                Some((_, existing)) if existing <= cost => {},
                _ => smallest = Some((column, cost)),
            }
        }

        smallest.map(|(column, _)| column)
    }
}

/// Names the available pivot rules, to select one at runtime.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
pub enum PivotRuleKind {
    /// See `Bland`.
    #[default]
    Bland,
    /// See `LargestCoefficient`.
    LargestCoefficient,
}

impl Display for PivotRuleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PivotRuleKind::Bland => "Bland's rule",
            PivotRuleKind::LargestCoefficient => "largest coefficient rule",
        })
    }
}
