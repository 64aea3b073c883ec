//! # shop-core: Pure Business Logic for Shopping Carts
//!
//! Products, carts, and the calculators that price them, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/shop-cli                                │   │
//! │  │    args + env ──► Cart ──► CalculatorKind ──► text / JSON      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ calculator │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Base/VIP  │  │   │
//! │  │   │ Discount  │  │  parsing  │  │           │  │  variants  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ENVIRONMENT • NO SUBSCRIBER • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DiscountRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The append-only shopping cart
//! - [`calculator`] - Total and discount calculators
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and `NAME=PRICE` parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculator is deterministic - same cart = same total
//! 2. **No I/O**: Files, network and environment access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::calculator::{DiscountCalculator, TotalCalculator, VipCartCalculator};
//! use shop_core::{Cart, Money, Product};
//!
//! let mut cart = Cart::new();
//! cart.add_product(Product::new("Product 1", Money::from_cents(1000)).unwrap());
//! cart.add_product(Product::new("Product 2", Money::from_cents(2000)).unwrap());
//! cart.add_product(Product::new("Product 3", Money::from_cents(3000)).unwrap());
//!
//! // 10% off $60.00
//! assert_eq!(VipCartCalculator.compute_total(&cart).cents(), 5400);
//! assert_eq!(VipCartCalculator.compute_discounted_total(&cart).cents(), 5400);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shop_core::Money` instead of
// `use shop_core::money::Money`

pub use calculator::{
    AnotherVipCartCalculator, CalculatorKind, CartCalculator, CartSummary, DiscountCalculator,
    TotalCalculator, VipCartCalculator,
};
pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
