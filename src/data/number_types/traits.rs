//! # Traits
//!
//! The number hierarchy the algorithms are defined over. Only the operations that are actually
//! used are required, such that both the fixed size and the arbitrary precision rationals of
//! `relp_num` qualify.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::{One, Zero};
use relp_num::Signed;

/// The simplex method is defined over the ordered fields.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait OrderedField:
    Zero +
    One +
    Signed +
    Neg<Output=Self> +

    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    AddAssign +
    for<'r> AddAssign<&'r Self> +

    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    SubAssign +
    for<'r> SubAssign<&'r Self> +

    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +

    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +

    Eq +
    Ord +

    Clone +
    Debug +
    Display +
{
    /// Build a number from its decimal digits.
    ///
    /// Only uses field operations, so it works for every implementor.
    ///
    /// # Arguments
    ///
    /// * `integer`: Digits before the decimal point, may be empty.
    /// * `fraction`: Digits after the decimal point, may be empty.
    ///
    /// # Return value
    ///
    /// `None` if one of the characters is not an ASCII digit.
    fn from_decimal_digits(integer: &str, fraction: &str) -> Option<Self> {
        let ten = (0..10).fold(Self::zero(), |total, _| total + Self::one());
        let digit = |character: char| {
            character.to_digit(10)
                .map(|value| (0..value).fold(Self::zero(), |total, _| total + Self::one()))
        };

        let mut numerator = Self::zero();
        let mut denominator = Self::one();
        for character in integer.chars() {
            numerator = numerator * &ten + digit(character)?;
        }
        for character in fraction.chars() {
            numerator = numerator * &ten + digit(character)?;
            denominator = denominator * &ten;
        }

        Some(numerator / denominator)
    }
}

impl<T> OrderedField for T
where
    T: Zero + One + Signed + Neg<Output=Self> +
    Add<Self, Output=Self> + for<'r> Add<&'r Self, Output=Self> +
    AddAssign + for<'r> AddAssign<&'r Self> +
    Sub<Self, Output=Self> + for<'r> Sub<&'r Self, Output=Self> +
    SubAssign + for<'r> SubAssign<&'r Self> +
    Mul<Self, Output=Self> + for<'r> Mul<&'r Self, Output=Self> +
    Div<Self, Output=Self> + for<'r> Div<&'r Self, Output=Self> +
    Eq + Ord + Clone + Debug + Display,
{
}
