//! # An exact simplex solver for small linear programs
//!
//! Linear programs are solved with the two-phase simplex method on a dense tableau, using exact
//! rational arithmetic. Bland's rule is used by default, so the method always terminates.
//!
//! A typical use reads a problem in the LP text format, converts it to standard form, solves it
//! and expresses the result in terms of the named variables:
//!
//! ```
//! use simplex::algorithm::solve;
//! use simplex::data::number_types::Rational;
//! use simplex::io::lp::parse;
//!
//! let program = parse::<Rational>("x + y <= 4\nx + 3*y <= 6\n#maximize 3*x + 2*y").unwrap();
//! let result = solve(&program.derive_standard_form().unwrap());
//! println!("{}", program.compute_solution(result));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
