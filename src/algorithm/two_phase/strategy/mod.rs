//! # Strategies
//!
//! Decisions the simplex method makes that don't influence correctness, only the path taken and,
//! for some choices, termination.
pub mod pivot_rule;
