//! # Cart Calculators
//!
//! Turns a [`Cart`] into a price. Two small capabilities, three variants.
//!
//! ## Capabilities and Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   trait TotalCalculator          trait DiscountCalculator               │
//! │   compute_total(cart)            compute_discounted_total(cart)         │
//! │          ▲   ▲   ▲                        ▲        ▲                    │
//! │          │   │   └──────────────┐         │        │                    │
//! │          │   └──────────┐       │         │        │                    │
//! │  ┌───────┴────────┐ ┌───┴───────┴───┐ ┌───┴────────┴──────────┐         │
//! │  │ CartCalculator │ │VipCartCalc.   │ │AnotherVipCartCalc.    │         │
//! │  │ sum of prices  │ │ 10% off (0.9) │ │ 20% off (0.8)         │         │
//! │  └────────────────┘ └───────────────┘ └───────────────────────┘         │
//! │                                                                         │
//! │  Discount variants implement BOTH traits; their compute_total           │
//! │  returns the discounted figure.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that only need a total depend on [`TotalCalculator`] and never
//! see discount methods. [`CalculatorKind`] names the closed set of
//! variants for configuration and dispatch.
//!
//! ## Example
//! ```rust
//! use shop_core::calculator::{
//!     AnotherVipCartCalculator, CartCalculator, DiscountCalculator, TotalCalculator,
//!     VipCartCalculator,
//! };
//! use shop_core::{Cart, Money, Product};
//!
//! let cart: Cart = [1000, 2000, 3000]
//!     .into_iter()
//!     .map(|cents| Product::new("item", Money::from_cents(cents)).unwrap())
//!     .collect();
//!
//! assert_eq!(CartCalculator.compute_total(&cart).cents(), 6000);
//! assert_eq!(VipCartCalculator.compute_discounted_total(&cart).cents(), 5400);
//! assert_eq!(AnotherVipCartCalculator.compute_total(&cart).cents(), 4800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::DiscountRate;

/// Discount given by [`VipCartCalculator`]: 10% off.
pub const VIP_DISCOUNT: DiscountRate = DiscountRate::from_bps(1000);

/// Discount given by [`AnotherVipCartCalculator`]: 20% off.
pub const ANOTHER_VIP_DISCOUNT: DiscountRate = DiscountRate::from_bps(2000);

// =============================================================================
// Capabilities
// =============================================================================

/// Prices a whole cart.
pub trait TotalCalculator {
    /// Returns the amount due for `cart`. Zero for an empty cart.
    fn compute_total(&self, cart: &Cart) -> Money;
}

/// Prices a cart with a flat percentage off.
pub trait DiscountCalculator {
    /// The fixed discount this calculator applies.
    fn discount_rate(&self) -> DiscountRate;

    /// Returns the undiscounted sum with [`discount_rate`](Self::discount_rate)
    /// taken off, rounded to the nearest cent.
    fn compute_discounted_total(&self, cart: &Cart) -> Money {
        let rate = self.discount_rate();
        let subtotal = CartCalculator.compute_total(cart);
        let total = subtotal.apply_discount(rate);

        debug!(
            item_count = cart.len(),
            subtotal_cents = subtotal.cents(),
            discount_bps = rate.bps(),
            total_cents = total.cents(),
            "computed discounted total"
        );
        total
    }
}

// =============================================================================
// Variants
// =============================================================================

/// Sums item prices with no discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartCalculator;

impl TotalCalculator for CartCalculator {
    fn compute_total(&self, cart: &Cart) -> Money {
        let total = cart.subtotal();
        debug!(
            item_count = cart.len(),
            total_cents = total.cents(),
            "computed cart total"
        );
        total
    }
}

/// Takes [`VIP_DISCOUNT`] (10%) off the cart total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VipCartCalculator;

impl DiscountCalculator for VipCartCalculator {
    fn discount_rate(&self) -> DiscountRate {
        VIP_DISCOUNT
    }
}

impl TotalCalculator for VipCartCalculator {
    fn compute_total(&self, cart: &Cart) -> Money {
        self.compute_discounted_total(cart)
    }
}

/// Takes [`ANOTHER_VIP_DISCOUNT`] (20%) off the cart total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnotherVipCartCalculator;

impl DiscountCalculator for AnotherVipCartCalculator {
    fn discount_rate(&self) -> DiscountRate {
        ANOTHER_VIP_DISCOUNT
    }
}

impl TotalCalculator for AnotherVipCartCalculator {
    fn compute_total(&self, cart: &Cart) -> Money {
        self.compute_discounted_total(cart)
    }
}

// =============================================================================
// Calculator Kind
// =============================================================================

/// The closed set of calculator variants.
///
/// ## String Forms
/// | Variant      | Canonical       | Also accepted                  |
/// |--------------|-----------------|--------------------------------|
/// | `Base`       | `base`          | `standard`                     |
/// | `Vip`        | `vip`           |                                |
/// | `AnotherVip` | `another-vip`   | `another_vip`, `anothervip`    |
///
/// Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CalculatorKind {
    /// [`CartCalculator`]
    #[default]
    Base,
    /// [`VipCartCalculator`]
    Vip,
    /// [`AnotherVipCartCalculator`]
    AnotherVip,
}

impl CalculatorKind {
    /// Every variant, in declaration order.
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::Base,
        CalculatorKind::Vip,
        CalculatorKind::AnotherVip,
    ];

    /// Canonical name, as accepted by `FromStr` and produced by serde.
    pub const fn name(self) -> &'static str {
        match self {
            CalculatorKind::Base => "base",
            CalculatorKind::Vip => "vip",
            CalculatorKind::AnotherVip => "another-vip",
        }
    }

    pub fn as_total_calculator(self) -> &'static dyn TotalCalculator {
        match self {
            CalculatorKind::Base => &CartCalculator,
            CalculatorKind::Vip => &VipCartCalculator,
            CalculatorKind::AnotherVip => &AnotherVipCartCalculator,
        }
    }

    /// `None` for [`CalculatorKind::Base`], which has no discount capability.
    pub fn as_discount_calculator(self) -> Option<&'static dyn DiscountCalculator> {
        match self {
            CalculatorKind::Base => None,
            CalculatorKind::Vip => Some(&VipCartCalculator),
            CalculatorKind::AnotherVip => Some(&AnotherVipCartCalculator),
        }
    }

    pub fn discount_rate(self) -> Option<DiscountRate> {
        self.as_discount_calculator().map(|c| c.discount_rate())
    }

    pub fn compute_total(self, cart: &Cart) -> Money {
        self.as_total_calculator().compute_total(cart)
    }

    pub fn compute_discounted_total(self, cart: &Cart) -> Option<Money> {
        self.as_discount_calculator()
            .map(|c| c.compute_discounted_total(cart))
    }

    /// Prices `cart` and reports every figure in one place.
    pub fn summarize(self, cart: &Cart) -> CartSummary {
        let subtotal = cart.subtotal();
        let total = self.compute_total(cart);

        CartSummary {
            calculator: self,
            item_count: cart.len(),
            subtotal,
            discount_rate: self.discount_rate(),
            discount: subtotal - total,
            total,
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculatorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" | "standard" => Ok(CalculatorKind::Base),
            "vip" => Ok(CalculatorKind::Vip),
            "another-vip" | "another_vip" | "anothervip" => Ok(CalculatorKind::AnotherVip),
            _ => Err(ValidationError::NotAllowed {
                field: "calculator".to_string(),
                allowed: CalculatorKind::ALL
                    .iter()
                    .map(|k| k.name().to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// All the figures for one cart under one calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub calculator: CalculatorKind,
    pub item_count: usize,
    /// Sum of item prices before any discount.
    pub subtotal: Money,
    pub discount_rate: Option<DiscountRate>,
    /// Amount taken off the subtotal (zero for the base calculator).
    pub discount: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use crate::validation::MAX_PRICE_CENTS;

    fn cart_of(prices: &[i64]) -> Cart {
        prices
            .iter()
            .enumerate()
            .map(|(i, &cents)| {
                Product::new(format!("Product {}", i + 1), Money::from_cents(cents)).unwrap()
            })
            .collect()
    }

    /// Prices 10, 20 and 30 dollars.
    fn sample_cart() -> Cart {
        cart_of(&[1000, 2000, 3000])
    }

    #[test]
    fn test_cart_calculator_total_price() {
        assert_eq!(CartCalculator.compute_total(&sample_cart()).cents(), 6000);
    }

    #[test]
    fn test_vip_cart_calculator_total_price() {
        assert_eq!(VipCartCalculator.compute_total(&sample_cart()).cents(), 5400);
    }

    #[test]
    fn test_another_vip_cart_calculator_total_price() {
        assert_eq!(
            AnotherVipCartCalculator.compute_total(&sample_cart()).cents(),
            4800
        );
    }

    #[test]
    fn test_vip_cart_calculator_discount() {
        assert_eq!(
            VipCartCalculator.compute_discounted_total(&sample_cart()).cents(),
            5400
        );
    }

    #[test]
    fn test_another_vip_cart_calculator_discount() {
        assert_eq!(
            AnotherVipCartCalculator
                .compute_discounted_total(&sample_cart())
                .cents(),
            4800
        );
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        for kind in CalculatorKind::ALL {
            assert_eq!(kind.compute_total(&cart), Money::zero(), "{kind}");
        }
    }

    #[test]
    fn test_total_is_idempotent() {
        let cart = sample_cart();
        for kind in CalculatorKind::ALL {
            assert_eq!(kind.compute_total(&cart), kind.compute_total(&cart));
        }
    }

    #[test]
    fn test_total_tracks_cart_changes() {
        let mut cart = sample_cart();
        cart.add_product(Product::new("Product 4", Money::from_cents(4000)).unwrap());
        assert_eq!(CartCalculator.compute_total(&cart).cents(), 10000);
        assert_eq!(VipCartCalculator.compute_total(&cart).cents(), 9000);
    }

    #[test]
    fn test_trait_objects() {
        let calculators: [&dyn TotalCalculator; 3] =
            [&CartCalculator, &VipCartCalculator, &AnotherVipCartCalculator];
        let totals: Vec<i64> = calculators
            .iter()
            .map(|c| c.compute_total(&sample_cart()).cents())
            .collect();
        assert_eq!(totals, [6000, 5400, 4800]);
    }

    #[test]
    fn test_kind_dispatch() {
        let cart = sample_cart();
        assert_eq!(CalculatorKind::Base.discount_rate(), None);
        assert_eq!(CalculatorKind::Base.compute_discounted_total(&cart), None);
        assert_eq!(CalculatorKind::Vip.discount_rate(), Some(VIP_DISCOUNT));
        assert_eq!(
            CalculatorKind::AnotherVip.compute_discounted_total(&cart),
            Some(Money::from_cents(4800))
        );
    }

    #[test]
    fn test_kind_parse_and_display() {
        for kind in CalculatorKind::ALL {
            assert_eq!(kind.to_string().parse::<CalculatorKind>().unwrap(), kind);
        }
        assert_eq!("Standard".parse::<CalculatorKind>().unwrap(), CalculatorKind::Base);
        assert_eq!(" VIP ".parse::<CalculatorKind>().unwrap(), CalculatorKind::Vip);
        assert_eq!(
            "another_vip".parse::<CalculatorKind>().unwrap(),
            CalculatorKind::AnotherVip
        );

        let err = "gold".parse::<CalculatorKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"calculator must be one of: ["base", "vip", "another-vip"]"#
        );
    }

    #[test]
    fn test_kind_serde_matches_name() {
        for kind in CalculatorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_summarize() {
        let summary = CalculatorKind::AnotherVip.summarize(&sample_cart());
        assert_eq!(
            summary,
            CartSummary {
                calculator: CalculatorKind::AnotherVip,
                item_count: 3,
                subtotal: Money::from_cents(6000),
                discount_rate: Some(ANOTHER_VIP_DISCOUNT),
                discount: Money::from_cents(1200),
                total: Money::from_cents(4800),
            }
        );

        let base = CalculatorKind::Base.summarize(&sample_cart());
        assert!(base.discount.is_zero());
        assert_eq!(base.total, base.subtotal);
    }

    #[test]
    fn test_max_price_items_do_not_overflow() {
        let big = Product::new("Big", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
        let cart = Cart::from_products(vec![big.clone(), big]);

        let base = CartCalculator.compute_total(&cart).cents();
        assert_eq!(base, 2 * MAX_PRICE_CENTS);
        assert_eq!(VipCartCalculator.compute_total(&cart).cents(), base / 10 * 9);
        assert_eq!(AnotherVipCartCalculator.compute_total(&cart).cents(), base / 10 * 8);
        for kind in CalculatorKind::ALL {
            assert!(!kind.compute_total(&cart).is_negative(), "{kind}");
        }
    }

    struct FreeCalculator;

    impl DiscountCalculator for FreeCalculator {
        fn discount_rate(&self) -> DiscountRate {
            DiscountRate::try_from_bps(10000).unwrap()
        }
    }

    #[test]
    fn test_full_discount_totals_zero() {
        assert_eq!(FreeCalculator.compute_discounted_total(&sample_cart()), Money::zero());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn prices() -> impl Strategy<Value = Vec<i64>> {
            prop::collection::vec(0i64..=MAX_PRICE_CENTS, 0..40)
        }

        proptest! {
            /// Property: base total is the plain sum of prices.
            #[test]
            fn base_total_is_sum(prices in prices()) {
                let cart = cart_of(&prices);
                let expected: i64 = prices.iter().sum();
                prop_assert_eq!(CartCalculator.compute_total(&cart).cents(), expected);
            }

            /// Property: VIP total is within half a cent of total × 0.9,
            /// and exact whenever total × 0.9 is a whole number of cents.
            #[test]
            fn vip_is_ninety_percent(prices in prices()) {
                let cart = cart_of(&prices);
                let base = CartCalculator.compute_total(&cart).cents() as i128;
                let vip = VipCartCalculator.compute_discounted_total(&cart).cents() as i128;

                prop_assert!((vip * 10 - base * 9).abs() * 1000 <= 5000);
                if base % 10 == 0 {
                    prop_assert_eq!(vip, base * 9 / 10);
                }
            }

            /// Property: the second VIP variant uses a factor of 0.8.
            #[test]
            fn another_vip_is_eighty_percent(prices in prices()) {
                let cart = cart_of(&prices);
                let base = CartCalculator.compute_total(&cart).cents() as i128;
                let vip = AnotherVipCartCalculator.compute_discounted_total(&cart).cents() as i128;

                prop_assert!((vip * 10 - base * 8).abs() * 1000 <= 5000);
                if base % 5 == 0 {
                    prop_assert_eq!(vip, base * 4 / 5);
                }
            }

            /// Property: for discount variants both entry points agree.
            #[test]
            fn discount_variants_total_equals_discounted(prices in prices()) {
                let cart = cart_of(&prices);
                prop_assert_eq!(
                    VipCartCalculator.compute_total(&cart),
                    VipCartCalculator.compute_discounted_total(&cart)
                );
                prop_assert_eq!(
                    AnotherVipCartCalculator.compute_total(&cart),
                    AnotherVipCartCalculator.compute_discounted_total(&cart)
                );
            }

            /// Property: discounts never raise the price or go below zero.
            #[test]
            fn discounts_are_bounded(prices in prices()) {
                let cart = cart_of(&prices);
                let base = CartCalculator.compute_total(&cart);
                let vip = VipCartCalculator.compute_total(&cart);
                let another = AnotherVipCartCalculator.compute_total(&cart);

                prop_assert!(another <= vip);
                prop_assert!(vip <= base);
                prop_assert!(!another.is_negative());
            }
        }
    }
}
