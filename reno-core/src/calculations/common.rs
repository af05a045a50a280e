//! Common arithmetic helpers for estimator calculations.
//!
//! This module provides rounding used at display time and checked operations
//! that turn overflow into [`ComputationError::Overflow`].

use rust_decimal::{Decimal, RoundingStrategy};

use super::ComputationError;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use reno_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1416.666)), dec!(1416.67));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole number using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use reno_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(23.29)), dec!(23));
/// assert_eq!(round_whole(dec!(23.5)), dec!(24));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplies two values, failing instead of overflowing.
pub fn mul(
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, ComputationError> {
    a.checked_mul(b).ok_or(ComputationError::Overflow)
}

/// Adds two values, failing instead of overflowing.
pub fn add(
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, ComputationError> {
    a.checked_add(b).ok_or(ComputationError::Overflow)
}

/// Divides `numerator` by `denominator`, failing instead of overflowing.
///
/// The denominator must be non-zero. Callers with a divisor that can reach
/// zero check it first and report a domain error of their own.
pub fn div(
    numerator: Decimal,
    denominator: Decimal,
) -> Result<Decimal, ComputationError> {
    debug_assert!(!denominator.is_zero(), "div called with a zero denominator");
    numerator
        .checked_div(denominator)
        .ok_or(ComputationError::Overflow)
}
