//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The storefront computed the promo discount as `subtotal * 0.1`:        │
//! │    4905 * 0.1 = 490.50000000000006  ❌ not a currency amount            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units + Floor Division                     │
//! │    4905 * 1000 / 10000 = 490 (floor)                                    │
//! │    Same answer on every platform, every time                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pharmacart_core::money::Money;
//!
//! // Create from minor units (kobo, cents, ...)
//! let price = Money::from_minor(2450);
//!
//! // Arithmetic operations
//! let doubled = price.multiply_quantity(2);
//! assert_eq!(doubled.minor(), 4900);
//! let with_fee = doubled + Money::from_minor(500);
//! assert_eq!(with_fee.minor(), 5400);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;
use crate::BPS_DENOMINATOR;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays well-defined; the ledger clamps
///   anything that must not go below zero
/// - **Saturating arithmetic**: totals can never panic on overflow
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.unit_price ──► LineItem.unit_price ──► LineItem.line_total     │
/// │                                                         │               │
/// │  FulfillmentOption.flat_fee ─────────┐                  ▼               │
/// │                                      ├──────────► CartTotals            │
/// │  DiscountRate × subtotal (floor) ────┘                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacart_core::money::Money;
    ///
    /// let price = Money::from_minor(850);
    /// assert_eq!(price.minor(), 850);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacart_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.minor(), 0);
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

    /// Returns the value, or zero if it is negative.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacart_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(-90).clamp_non_negative(), Money::zero());
    /// assert_eq!(Money::from_minor(90).clamp_non_negative().minor(), 90);
    /// ```
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacart_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(2450);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.minor(), 4900);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Computes the discount for `rate`, rounded DOWN to the minor unit.
    ///
    /// ## Implementation
    /// `floor(amount * bps / 10000)` in i128, so no intermediate overflow and
    /// no floating point. Negative amounts yield a zero discount.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacart_core::money::Money;
    /// use pharmacart_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_minor(4905);
    /// let discount = subtotal.discount_floor(DiscountRate::from_bps(1000)); // 10%
    /// assert_eq!(discount.minor(), 490); // 490.5 floors to 490
    /// ```
    pub fn discount_floor(&self, rate: DiscountRate) -> Money {
        if self.0 <= 0 {
            return Money::zero();
        }
        let discount = (self.0 as i128 * rate.bps() as i128) / BPS_DENOMINATOR as i128;
        // rate < 1, so the result always fits back into i64
        Money::from_minor(discount as i64)
    }

    /// Saturating addition.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    #[inline]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering as `major.minor` with two decimals.
///
/// ## Note
/// Currency symbols and decimal places belong to the presentation layer
/// (see `pharmacart_session::format::CurrencyFormat`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.saturating_sub(other);
    }
}

/// Summing an iterator of line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
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
    fn test_from_minor() {
        let money = Money::from_minor(2450);
        assert_eq!(money.minor(), 2450);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_minor(500)), "5.00");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_minor(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!(a.multiply_quantity(3).minor(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_minor(200);
        assert_eq!(c.minor(), 1300);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!((max + Money::from_minor(1)).minor(), i64::MAX);
        assert_eq!(max.multiply_quantity(u32::MAX).minor(), i64::MAX);
        assert_eq!((Money::from_minor(i64::MIN) - Money::from_minor(1)).minor(), i64::MIN);
    }

    #[test]
    fn test_discount_floor_basic() {
        // 4900 at 10% = 490 exactly
        let discount = Money::from_minor(4900).discount_floor(DiscountRate::from_bps(1000));
        assert_eq!(discount.minor(), 490);
    }

    #[test]
    fn test_discount_floor_rounds_down() {
        // 999 at 10% = 99.9 → 99
        let discount = Money::from_minor(999).discount_floor(DiscountRate::from_bps(1000));
        assert_eq!(discount.minor(), 99);

        // 1 at 99.99% = 0.9999 → 0
        let discount = Money::from_minor(1).discount_floor(DiscountRate::from_bps(9999));
        assert_eq!(discount.minor(), 0);
    }

    #[test]
    fn test_discount_floor_large_amount_does_not_overflow() {
        let discount = Money::from_minor(i64::MAX).discount_floor(DiscountRate::from_bps(9999));
        assert!(discount.minor() < i64::MAX);
        assert!(discount.is_positive());
    }

    #[test]
    fn test_discount_floor_non_positive_amount() {
        let rate = DiscountRate::from_bps(1000);
        assert!(Money::zero().discount_floor(rate).is_zero());
        assert!(Money::from_minor(-500).discount_floor(rate).is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.clamp_non_negative(), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_minor(4900), Money::from_minor(850), Money::from_minor(3200)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.minor(), 8950);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }
}
