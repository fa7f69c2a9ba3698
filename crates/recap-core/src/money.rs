//! # Money Module
//!
//! Provides the `Money` type used by the sales exercise.
//!
//! Arithmetic saturates at the `i64` bounds instead of overflowing.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Money(i64) holds euro cents                                            │
//! │                                                                         │
//! │    Laptop    €1200.00 × 2  ──►  240000                                  │
//! │    Mouse       €25.00 × 5  ──►   12500                                  │
//! │    Keyboard    €75.00 × 3  ──►   22500                                  │
//! │                               ────────                                  │
//! │    total_revenue              275000  (exact, no float drift)           │
//! │    average_sale  2750.00 / 3 ─► 916.666… euros (f64, not rounded)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use recap_core::money::Money;
//!
//! let price = Money::from_major_minor(25, 0); // €25.00
//! let line_total = price.multiply_quantity(5);
//! assert_eq!(line_total.to_string(), "€125.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in euro cents.
///
/// Signed so that differences stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use recap_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // €10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole euros and cents.
    ///
    /// ## Example
    /// ```rust
    /// use recap_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major.saturating_mul(100).saturating_add(minor))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cent portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// The value in euros as a float, for ratios such as averages.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use recap_core::money::Money;
    ///
    /// let unit_price = Money::from_major_minor(1200, 0);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 240_000);
    /// assert_eq!(unit_price.multiply_quantity(i64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

/// Saturating addition.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(1200, 0).cents(), 120_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "€10.99");
        assert_eq!(Money::from_cents(240_000).to_string(), "€2400.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-€5.50");
        assert_eq!(Money::zero().to_string(), "€0.00");
    }

    #[test]
    fn test_sum_and_as_f64() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(550);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 2100);
        assert_eq!((a + b).as_f64(), 15.5);
    }

    #[test]
    fn test_large_values_saturate() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!((big + Money::from_cents(10)).cents(), i64::MAX);

        let total: Money = [big, big].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
