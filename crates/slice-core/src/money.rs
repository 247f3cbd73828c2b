//! # Money Module
//!
//! Provides the `Money` type for currency amounts exposed to callers, and
//! the half-up rounding rule they all share.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: base-10 Decimal everywhere                           │
//! │    0.1 + 0.2 = 0.30 exactly                                         │
//! │                                                                     │
//! │  Intermediate values (raw discounts like 3.125) keep their full     │
//! │  precision as plain Decimal; Money is minted only at the point a    │
//! │  value becomes a discrete monetary amount shown to a caller.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use slice_core::money::Money;
//!
//! let raw = Decimal::new(3125, 3); // 3.125, an unrounded discount
//! let display = Money::new(raw);   // rounds half-up at the boundary
//! assert_eq!(display.to_string(), "$3.13");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of fractional digits in an exposed currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a raw decimal amount to currency precision, half-up.
///
/// "Half-up" here means midpoints round away from zero: 0.125 becomes 0.13,
/// never 0.12. This is the single rounding rule of the whole crate; no other
/// code path may quantize an amount.
#[inline]
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Money Type
// =============================================================================

/// A display-ready monetary value: always exactly 2 fractional digits.
///
/// ## Design Decisions
/// - **Rounds on construction**: a `Money` can never hold an unrounded
///   amount, so "rounded for display" is enforced by the type system
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Raw math stays outside**: tax-base computations use plain `Decimal`
///   and wrap their result here only at exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a raw decimal amount, rounding half-up
    /// to 2 fractional digits.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use slice_core::money::Money;
    ///
    /// let m = Money::new(Decimal::new(125, 3)); // 0.125
    /// assert_eq!(m.amount(), Decimal::new(13, 2)); // 0.13, not 0.12
    /// ```
    #[inline]
    pub fn new(amount: Decimal) -> Self {
        Money(round_half_up(amount))
    }

    /// Zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the rounded amount as a Decimal.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Converts to a native float at the API boundary.
    ///
    /// Lossless in practice: the amount carries only 2 fractional digits,
    /// well inside f64's exact range for realistic order totals.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and receipts. Callers needing localization should
/// format `amount()` themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values. Both operands are already at currency
/// scale, so the sum needs no re-rounding.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_addition_is_exact() {
        // The motivating case: 0.1 + 0.2 must be exactly 0.30
        let sum = dec!(0.1) + dec!(0.2);
        assert_eq!(sum, dec!(0.30));
        assert_eq!(Money::new(sum).amount(), dec!(0.30));
    }

    #[test]
    fn test_round_half_up_at_midpoint() {
        // Exactly at the midpoint, round away from zero
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
        assert_eq!(round_half_up(dec!(3.125)), dec!(3.13));
        assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_round_half_up_below_and_above_midpoint() {
        assert_eq!(round_half_up(dec!(2.024)), dec!(2.02));
        assert_eq!(round_half_up(dec!(2.026)), dec!(2.03));
    }

    #[test]
    fn test_round_is_noop_at_currency_scale() {
        assert_eq!(round_half_up(dec!(13.50)), dec!(13.50));
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    #[test]
    fn test_money_rounds_on_construction() {
        let m = Money::new(dec!(18.225) * dec!(1.055));
        // 18.225 * 1.055 = 19.227375 → 19.23
        assert_eq!(m.amount(), dec!(19.23));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "$10.99");
        assert_eq!(format!("{}", Money::new(dec!(5))), "$5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.5))), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_to_f64_is_lossless_at_scale() {
        assert_eq!(Money::new(dec!(13.50)).to_f64(), 13.5);
        assert_eq!(Money::new(dec!(3.125)).to_f64(), 3.13);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(2.50));

        assert_eq!((a + b).amount(), dec!(12.50));
        assert_eq!((a - b).amount(), dec!(7.50));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.amount(), dec!(12.50));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::new(dec!(0.01));
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = Money::new(dec!(19.23));
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: Money = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
