//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point prices:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    $60.00 × 0.9 may print as 53.99999999999999                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    6000 cents, 10% off → 6000 - 600 = 5400 cents                        │
//! │    Every discount rounds to a whole cent, explicitly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Or parse user input
//! let parsed: Money = "10.99".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences such as "amount saved" stay representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──► Cart.subtotal ──► Calculator ──► total              │
/// │                                          │                              │
/// │                                          └──► discount (VIP variants)   │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the amount taken off by `rate`, rounded to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5), halves round up.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::calculator::VIP_DISCOUNT;
    ///
    /// let subtotal = Money::from_cents(6000); // $60.00
    /// let saved = subtotal.discount_amount(VIP_DISCOUNT); // 10% off
    /// assert_eq!(saved.cents(), 600); // $6.00
    /// ```
    ///
    /// A [`DiscountRate`] never exceeds 10000 bps, so the amount off is at
    /// most `self` and the discounted total of a non-negative amount stays
    /// non-negative.
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        // i128 so large carts can't overflow the intermediate product
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(amount as i64)
    }

    /// Applies a percentage discount and returns what is left to pay.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(6000); // $60.00
    /// let discounted = subtotal.apply_discount(DiscountRate::try_from_bps(2000).unwrap()); // 20% off
    /// assert_eq!(discounted.cents(), 4800); // $48.00
    /// ```
    #[inline]
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        *self - self.discount_amount(rate)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount such as `10`, `10.5`, `$10.99` or `-5.50`.
///
/// At most two fractional digits are accepted; anything finer than a cent
/// is rejected rather than silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

        let (major, fraction) = match unsigned.split_once('.') {
            Some((major, fraction)) => (major, Some(fraction)),
            None => (unsigned, None),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal amount like 10 or 10.99"));
        }
        let major: i64 = major.parse().map_err(|_| invalid("amount is too large"))?;

        let minor = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(invalid("expected one or two digits after the decimal point"));
            }
            // "5" in "10.5" means 50 cents
            Some(f) if f.len() == 1 => f.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            Some(f) => f.parse::<i64>().map_err(|_| invalid("bad cents"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
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

/// Summing an iterator of Money, starting from zero.
///
/// Saturates at `i64::MAX` instead of overflowing, so a sum of
/// non-negative amounts never wraps negative or panics.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(1000), Money::from_cents(2000), Money::from_cents(3000)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.cents(), 6000);
        assert_eq!(by_value, by_ref);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let near_max = Money::from_cents(i64::MAX - 1);
        let total: Money = [near_max, near_max, Money::from_cents(5)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert!(!total.is_negative());
    }

    #[test]
    fn test_discount() {
        let subtotal = Money::from_cents(6000);
        assert_eq!(subtotal.apply_discount(DiscountRate::from_bps(1000)).cents(), 5400);
        assert_eq!(subtotal.apply_discount(DiscountRate::from_bps(2000)).cents(), 4800);
        assert_eq!(subtotal.apply_discount(DiscountRate::from_bps(0)), subtotal);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 10% of 5 cents = 0.5 cent → 1 cent off
        let amount = Money::from_cents(5);
        assert_eq!(amount.discount_amount(DiscountRate::from_bps(1000)).cents(), 1);
        // 10% of 4 cents = 0.4 cent → nothing off
        let amount = Money::from_cents(4);
        assert_eq!(amount.discount_amount(DiscountRate::from_bps(1000)).cents(), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.99".parse::<Money>().unwrap().cents(), 1099);
        assert_eq!("$0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!(" 7 ".parse::<Money>().unwrap().cents(), 700);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
        assert_eq!("-$5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "10.", ".5", "10.999", "1,000", "1e3", "10.-5", "--1"] {
            let err = input.parse::<Money>().unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "amount"),
                "{input:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert!("99999999999999999999".parse::<Money>().is_err());
        assert!("92233720368547758.07".parse::<Money>().is_ok());
        assert!("92233720368547758.08".parse::<Money>().is_err());
    }

    #[test]
    fn test_serde_is_transparent_cents() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 1099);
    }
}
