//! # Money Module
//!
//! Provides the `Money` type for handling invoice amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:  (100.0 - 13.0) * 0.08 = 6.960000000000001               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                            │
//! │    8700 cents × 800 bps / 10000 = 696 cents                             │
//! │    Every rate application rounds exactly once, to the cent             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Money;
//! use invoice_core::types::Rate;
//!
//! let unit_price = Money::from_major_minor(50, 0);
//! let subtotal = unit_price.checked_multiply_quantity(2).unwrap(); // $100.00
//!
//! let gold = subtotal.apply_rate(Rate::from_bps(300));
//! assert_eq!(gold.cents(), 300); // $3.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: tax on an over-discounted invoice can be negative,
///   and the pre-floor total can dip below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare integer**: `{"unit_price": 5000}` is $50.00
///
/// ## Where Money Flows
/// ```text
/// LineItem.unit_price ──► line value ──► subtotal ──┬──► shipping rule
///                                                   ├──► discount + coupon
///                                                   └──► tax ──► total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative values to zero.
    ///
    /// Used once per invoice, on the final total. Intermediate amounts
    /// (notably tax) are never clamped.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-250).floor_at_zero(), Money::zero());
    /// assert_eq!(Money::from_cents(250).floor_at_zero().cents(), 250);
    /// ```
    #[inline]
    pub fn floor_at_zero(self) -> Self {
        self.max(Money::zero())
    }

    /// `self × qty`, or `None` if the result does not fit in i64 cents.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(299).checked_multiply_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `self + other`, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `self - other`, or `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `self × rate`, rounded half away from zero to the cent.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  amount × bps / 10000, rounded half AWAY FROM ZERO                  │
    /// │                                                                     │
    /// │     1000¢ × 825 bps =  82.5¢  →   83¢                               │
    /// │    -1000¢ × 825 bps = -82.5¢  →  -83¢   (symmetric)                 │
    /// │                                                                     │
    /// │  Plain `(x * bps + 5000) / 10000` would give -82¢ for the second    │
    /// │  case, since integer division truncates toward zero.                │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Used for membership discounts, coupon discounts and tax. Every rate
    /// in the pipeline is at most 100%, so the result never exceeds `self`
    /// in magnitude.
    pub fn apply_rate(&self, rate: Rate) -> Money {
        // i128 keeps huge invoices from overflowing mid-multiplication
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = if scaled < 0 { -5000 } else { 5000 };
        let cents = (scaled + half) / 10000;
        Money::from_cents(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable dollars, for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(10196)), "$101.96");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
    }

    #[test]
    fn test_checked_multiply_quantity() {
        let price = Money::from_cents(299);
        assert_eq!(price.checked_multiply_quantity(3), Some(Money::from_cents(897)));

        let half = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(half.checked_multiply_quantity(2), None);
        assert_eq!(
            Money::from_cents(i64::MAX / 2).checked_multiply_quantity(2),
            Some(Money::from_cents(i64::MAX - 1))
        );
    }

    #[test]
    fn test_checked_sub() {
        let a = Money::from_cents(i64::MIN + 10);
        assert_eq!(a.checked_sub(Money::from_cents(10)), Some(Money::from_cents(i64::MIN)));
        assert_eq!(a.checked_sub(Money::from_cents(11)), None);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(i64::MAX - 10);
        assert_eq!(a.checked_add(Money::from_cents(10)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(a.checked_add(Money::from_cents(11)), None);
    }

    #[test]
    fn test_apply_rate_exact() {
        // $87.00 at 8% = $6.96
        let taxable = Money::from_cents(8700);
        assert_eq!(taxable.apply_rate(Rate::from_bps(800)).cents(), 696);
    }

    #[test]
    fn test_apply_rate_rounds_half_away_from_zero() {
        let rate = Rate::from_bps(825);
        assert_eq!(Money::from_cents(1000).apply_rate(rate).cents(), 83);
        assert_eq!(Money::from_cents(-1000).apply_rate(rate).cents(), -83);

        // 0.3¢ rounds down, both directions
        let small = Rate::from_bps(300);
        assert_eq!(Money::from_cents(10).apply_rate(small).cents(), 0);
        assert_eq!(Money::from_cents(-10).apply_rate(small).cents(), 0);
    }

    #[test]
    fn test_apply_zero_rate() {
        assert_eq!(Money::from_cents(123_456).apply_rate(Rate::zero()), Money::zero());
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(Money::from_cents(-1).floor_at_zero(), Money::zero());
        assert_eq!(Money::zero().floor_at_zero(), Money::zero());
        assert_eq!(Money::from_cents(42).floor_at_zero().cents(), 42);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(!Money::zero().is_negative());
        assert!(!Money::from_cents(100).is_negative());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_serializes_as_bare_cents() {
        let json = serde_json::to_string(&Money::from_cents(5000)).unwrap();
        assert_eq!(json, "5000");

        let back: Money = serde_json::from_str("-42").unwrap();
        assert_eq!(back.cents(), -42);
    }
}
