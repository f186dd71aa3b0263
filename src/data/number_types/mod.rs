//! # Number types
//!
//! The simplex method only needs the operations of an ordered field. Those are collected in the
//! `traits` module, the implementations come from the `relp_num` crate.
//!
//! All algorithms are written against the traits, but the solver is meant to be used with exact
//! arithmetic: there is no tolerance anywhere, a number is either zero, negative or positive. Using
//! a floating point type here would make ties in the ratio test, and with that Bland's rule,
//! depend on rounding.
pub mod traits;

/// The number type used by the command line application.
///
/// Arbitrary precision, so that no pivot sequence can overflow.
pub type Rational = relp_num::RationalBig;
