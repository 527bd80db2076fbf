//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Rupiah                                       │
//! │    Rupiah has no fractional unit in everyday retail, so the         │
//! │    smallest currency unit IS the whole rupiah. Every amount in      │
//! │    the system is an i64 count of rupiah.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! // Create from whole rupiah (the only way)
//! let price = Money::from_rupiah(25_000); // Rp 25.000
//!
//! // Arithmetic operations
//! let doubled = price * 2;                          // Rp 50.000
//! let total = price + Money::from_rupiah(5_000);    // Rp 30.000
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupiah (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and change math
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare number, which is
///   exactly how amounts appear in the persisted snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let price = Money::from_rupiah(25_000);
    /// assert_eq!(price.rupiah(), 25_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.rupiah(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(3_000); // Kerupuk Udang
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupiah(), 9_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Kerupuk Udang Rp 3.000
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: Rp 9.000
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns `self - other`, floored at zero.
    ///
    /// Used for change math: change due is `received - total`, never
    /// negative. A short payment yields zero change, not negative change.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let total = Money::from_rupiah(25_000);
    /// let received = Money::from_rupiah(30_000);
    /// assert_eq!(received.saturating_sub_floor_zero(total).rupiah(), 5_000);
    /// assert_eq!(total.saturating_sub_floor_zero(received).rupiah(), 0);
    /// ```
    #[inline]
    pub const fn saturating_sub_floor_zero(&self, other: Self) -> Self {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the id-ID retail format.
///
/// ## Note
/// This is for receipts, logs, and debugging. The frontend formats amounts
/// itself for full localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Groups digits with dots: 1250000 → "1.250.000".
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push(value % 1000);
        value /= 1000;
    }
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!(".{:03}", group));
        }
    }
    out
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
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

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Sum of an iterator of Money values.
impl std::iter::Sum for Money {
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
    fn test_from_rupiah() {
        let money = Money::from_rupiah(25_000);
        assert_eq!(money.rupiah(), 25_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupiah(25_000)), "Rp 25.000");
        assert_eq!(format!("{}", Money::from_rupiah(5_000)), "Rp 5.000");
        assert_eq!(format!("{}", Money::from_rupiah(1_250_000)), "Rp 1.250.000");
        assert_eq!(format!("{}", Money::from_rupiah(500)), "Rp 500");
        assert_eq!(format!("{}", Money::from_rupiah(0)), "Rp 0");
        assert_eq!(format!("{}", Money::from_rupiah(-5_000)), "-Rp 5.000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(10_000);
        let b = Money::from_rupiah(5_000);

        assert_eq!((a + b).rupiah(), 15_000);
        assert_eq!((a - b).rupiah(), 5_000);
        let result: Money = a * 3;
        assert_eq!(result.rupiah(), 30_000);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.rupiah(), 5_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupiah(3_000);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.rupiah(), 9_000);
    }

    #[test]
    fn test_saturating_sub_floor_zero() {
        let total = Money::from_rupiah(25_000);
        let received = Money::from_rupiah(30_000);

        assert_eq!(received.saturating_sub_floor_zero(total).rupiah(), 5_000);
        // Short payment floors at zero instead of going negative
        assert_eq!(total.saturating_sub_floor_zero(received).rupiah(), 0);
        assert_eq!(total.saturating_sub_floor_zero(total).rupiah(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_rupiah(100);
        assert!(positive.is_positive());

        let negative = Money::from_rupiah(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().rupiah(), 100);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_rupiah(25_000),
            Money::from_rupiah(5_000),
            Money::from_rupiah(18_000),
        ];
        let total: Money = amounts.iter().copied().sum();
        assert_eq!(total.rupiah(), 48_000);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let money = Money::from_rupiah(25_000);
        assert_eq!(serde_json::to_string(&money).unwrap(), "25000");

        let back: Money = serde_json::from_str("25000").unwrap();
        assert_eq!(back, money);
    }
}
