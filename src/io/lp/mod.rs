//! # Importing LP files
//!
//! A small line-oriented text format. Usually each line holds one constraint, after which a line
//! starting with `#maximize` or `#minimize` holds the objective function:
//!
//! ```text
//! % comments start with a percent sign
//! x + y <= 4
//! x + 3*y <= 6
//! #maximize 3*x + 2*y
//! ```
//!
//! Newlines only separate, so constraints may also share a line.
//!
//! Both sides of a constraint may contain any linear expression, with products and divisions by
//! constants. All variables are nonnegative.
use std::collections::HashMap;

use crate::data::linear_program::general_form::{Constraint, GeneralForm};
use crate::data::number_types::traits::OrderedField;
use crate::io::error::Import;
use crate::io::lp::parse::Parser;

mod parse;
mod token;

/// Parse an LP program, in string form, to a `GeneralForm`.
///
/// Variables are numbered in order of first appearance, first in the constraints and then in the
/// objective function.
///
/// # Errors
///
/// A `ParseError` with the position of the first token that doesn't fit.
pub fn parse<F: OrderedField>(program: &str) -> Result<GeneralForm<F>, Import> {
    let parsed = Parser::new(program)?.program::<F>()?;

    let mut indices = HashMap::new();
    let mut variable_names = Vec::new();
    let names = parsed.constraints.iter()
        .flat_map(|constraint| constraint.terms.iter())
        .chain(parsed.cost.iter())
        .map(|&(name, _)| name);
    for name in names {
        indices.entry(name).or_insert_with(|| {
            variable_names.push(name.to_string());
            variable_names.len() - 1
        });
    }

    let by_index = |terms: Vec<(&str, F)>| {
        let mut terms = terms.into_iter()
            .map(|(name, value)| (indices[name], value))
            .collect::<Vec<_>>();
        terms.sort_unstable_by_key(|&(column, _)| column);
        terms
    };

    let constraints = parsed.constraints.into_iter()
        .map(|constraint| Constraint::new(by_index(constraint.terms), constraint.relation, constraint.rhs))
        .collect();
    let cost = by_index(parsed.cost);

    let program = GeneralForm::new(parsed.objective, cost, parsed.constant, constraints, variable_names)?;
    Ok(program)
}
