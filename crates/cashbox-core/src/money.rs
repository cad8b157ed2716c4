//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Change for 1.35 with floats:                                           │
//! │    1.35 - 1.00 - 0.20 - 0.10 = 0.04999999999999993  ❌ never zero      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    135 - 100 - 20 - 10 = 5 → one 0.05 coin → 0                          │
//! │    No rounding step after every subtraction                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decimals only exist at the wire boundary: [`Money::from_major_f64`]
//! rounds a decimal to the nearest cent once, [`Money::to_major_f64`]
//! converts back for responses.
//!
//! ## Usage
//! ```rust
//! use cashbox_core::money::Money;
//!
//! let due = Money::from_cents(12300);           // $123.00
//! let given = Money::from_major_f64(200.0);
//! assert_eq!((given - due).cents(), 7700);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents.
///
/// Signed, since `given - due` is computed before the engine knows which is
/// larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use cashbox_core::money::Money;
    ///
    /// let coin = Money::from_cents(5); // $0.05
    /// assert_eq!(coin.cents(), 5);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounded to the nearest cent.
    ///
    /// Meant for wire values such as `"amountDue": 1.35`. Non-finite input
    /// maps to zero.
    ///
    /// ## Example
    /// ```rust
    /// use cashbox_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(1.35).cents(), 135);
    /// assert_eq!(Money::from_major_f64(0.1 + 0.2).cents(), 30);
    /// ```
    pub fn from_major_f64(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money((amount * 100.0).round() as i64)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The value as a decimal amount, for responses only.
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`. The register app formats with its configured
/// currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
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

/// Face value times a unit count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_f64_rounds_to_cents() {
        assert_eq!(Money::from_major_f64(123.0).cents(), 12300);
        assert_eq!(Money::from_major_f64(1.35).cents(), 135);
        assert_eq!(Money::from_major_f64(0.05).cents(), 5);
        assert_eq!(Money::from_major_f64(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_major_f64(2.004).cents(), 200);
        assert_eq!(Money::from_major_f64(-1.5).cents(), -150);
        assert_eq!(Money::from_major_f64(f64::NAN).cents(), 0);
    }

    #[test]
    fn test_to_major_f64() {
        assert_eq!(Money::from_cents(7700).to_major_f64(), 77.0);
        assert_eq!(Money::from_cents(135).to_major_f64(), 1.35);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let twenty = Money::from_cents(2000);
        let five = Money::from_cents(500);

        assert_eq!((twenty + five).cents(), 2500);
        assert_eq!((five - twenty).cents(), -1500);
        assert_eq!((twenty * 3u32).cents(), 6000);

        let total: Money = [twenty, five, five].into_iter().sum();
        assert_eq!(total.cents(), 3000);
    }

    #[test]
    fn test_zero_and_sign() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(5).is_positive());
        assert!(!Money::from_cents(-5).is_positive());
    }
}
