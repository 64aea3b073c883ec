//! # Validation Module
//!
//! Input validation utilities for shop-core.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CLI argument "Coffee=3.50"                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  parse_product_spec ──► Money::from_str ──► InvalidFormat?             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Product::new ──► validate_product_name ──► Required / TooLong?        │
//! │               └─► validate_price ─────────► OutOfRange?                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Cart::add_product (cannot fail) ──► calculators (cannot fail)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//! use shop_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Coffee").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest accepted product price: $1,000,000,000.00.
///
/// A cart would need over 92 million items at this price before its
/// subtotal reached `i64::MAX` cents.
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Coca-Cola 330ml").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use shop_core::money::Money;
/// use shop_core::validation::{validate_price, MAX_PRICE_CENTS};
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());  // $10.99
/// assert!(validate_price(Money::zero()).is_ok());            // Free item
/// assert!(validate_price(Money::from_cents(-100)).is_err()); // Invalid
/// assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100% off)
pub fn validate_discount_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Product Specs
// =============================================================================

/// Parses a `NAME=PRICE` product spec into a validated [`Product`].
///
/// The split happens on the LAST `=`, so names may contain `=` themselves.
///
/// ## Example
/// ```rust
/// use shop_core::validation::parse_product_spec;
///
/// let product = parse_product_spec("Coffee=3.50").unwrap();
/// assert_eq!(product.name(), "Coffee");
/// assert_eq!(product.price().cents(), 350);
///
/// assert!(parse_product_spec("Coffee").is_err());
/// assert!(parse_product_spec("Coffee=-1").is_err());
/// ```
pub fn parse_product_spec(spec: &str) -> CoreResult<Product> {
    let (name, price) = spec
        .rsplit_once('=')
        .ok_or_else(|| CoreError::InvalidProductSpec {
            spec: spec.to_string(),
            reason: "expected NAME=PRICE".to_string(),
        })?;

    if price.trim().is_empty() {
        return Err(CoreError::InvalidProductSpec {
            spec: spec.to_string(),
            reason: "missing price after '='".to_string(),
        });
    }

    let price: Money = price.parse()?;
    Ok(Product::new(name.trim(), price)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
