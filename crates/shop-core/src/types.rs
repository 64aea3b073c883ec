//! # Domain Types
//!
//! Value types shared by the cart and the calculators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐              ┌─────────────────┐                  │
//! │  │    Product      │              │  DiscountRate   │                  │
//! │  │  ─────────────  │              │  ─────────────  │                  │
//! │  │  name           │              │  bps (u32)      │                  │
//! │  │  price (Money)  │              │  1000 = 10% off │                  │
//! │  └─────────────────┘              └─────────────────┘                  │
//! │     immutable once built             fixed per calculator              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_discount_rate_bps, validate_price, validate_product_name, ValidationResult,
};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% off = a factor of 0.9 on the total
///
/// ## Invariant
/// Never above 10000 bps (100% off). Outside this crate a rate can only be
/// built through [`DiscountRate::try_from_bps`] or deserialization, which
/// both check the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Unchecked constructor for the crate's own constants.
    #[inline]
    pub(crate) const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from untrusted input, rejecting more than 100% off.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::try_from_bps(1500).unwrap().bps(), 1500);
    /// assert!(DiscountRate::try_from_bps(20000).is_err());
    /// ```
    pub fn try_from_bps(bps: u32) -> ValidationResult<Self> {
        validate_discount_rate_bps(bps)?;
        Ok(DiscountRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        DiscountRate::try_from_bps(bps)
    }
}

impl From<DiscountRate> for u32 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A priced item that can be put in a [`Cart`](crate::Cart).
///
/// ## Invariants
/// - `price` is never negative
/// - `name` is non-blank and at most 200 characters
///
/// Fields are private so a `Product` can only come out of [`Product::new`]
/// (or deserialization, which goes through the same checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "ProductRecord")]
#[ts(export)]
pub struct Product {
    /// Display name.
    name: String,

    /// Unit price.
    price: Money,
}

impl Product {
    /// Creates a product, validating its name and price.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Money, Product};
    ///
    /// let coffee = Product::new("Coffee", Money::from_cents(350)).unwrap();
    /// assert_eq!(coffee.name(), "Coffee");
    /// assert_eq!(coffee.price().cents(), 350);
    ///
    /// assert!(Product::new("Refund", Money::from_cents(-100)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product { name, price })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

/// Unchecked wire shape of a [`Product`].
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    price: Money,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.name, record.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
