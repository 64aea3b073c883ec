//! # Cart
//!
//! An ordered, append-only collection of [`Product`]s.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                   Cart method             State change          │
//! │  ──────                   ───────────             ────────────          │
//! │                                                                         │
//! │  Add one product ────────► add_product() ───────► items.push(product)  │
//! │                                                                         │
//! │  Add many ───────────────► extend() ────────────► items.extend(..)     │
//! │                                                                         │
//! │  Price the cart ─────────► subtotal() ──────────► (read only)          │
//! │                            calculators                                  │
//! │                                                                         │
//! │  NOTE: There is no remove or update. Items only ever get appended,     │
//! │        and each one keeps its position.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order
/// - The same product may appear more than once (each entry is priced)
/// - The cart owns its items; callers only get shared borrows back
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in the order they were added.
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart already holding `products`, in order.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Cart, Money, Product};
    ///
    /// let cart = Cart::from_products(vec![
    ///     Product::new("Product 1", Money::from_cents(1000)).unwrap(),
    ///     Product::new("Product 2", Money::from_cents(2000)).unwrap(),
    /// ]);
    /// assert_eq!(cart.len(), 2);
    /// assert_eq!(cart.subtotal().cents(), 3000);
    /// ```
    pub fn from_products(products: Vec<Product>) -> Self {
        Cart { items: products }
    }

    /// Appends a product to the end of the cart.
    pub fn add_product(&mut self, product: Product) {
        trace!(
            name = %product.name(),
            price_cents = product.price().cents(),
            position = self.items.len(),
            "product added to cart"
        );
        self.items.push(product);
    }

    /// Items in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Returns the number of items in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's price. Zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }
}

impl FromIterator<Product> for Cart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Cart::from_products(iter.into_iter().collect())
    }
}

impl Extend<Product> for Cart {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.add_product(product);
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_PRICE_CENTS;

    fn test_product(name: &str, price_cents: i64) -> Product {
        Product::new(name, Money::from_cents(price_cents)).unwrap()
    }

    #[test]
    fn test_cart_add_product() {
        let mut cart = Cart::new();
        let product = test_product("Test Product", 5000);

        cart.add_product(product.clone());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.products()[0], product);
    }

    #[test]
    fn test_cart_keeps_insertion_order_and_duplicates() {
        let mut cart = Cart::new();
        cart.add_product(test_product("B", 200));
        cart.add_product(test_product("A", 100));
        cart.add_product(test_product("B", 200));

        let names: Vec<&str> = cart.products().iter().map(Product::name).collect();
        assert_eq!(names, ["B", "A", "B"]);
        assert_eq!(cart.subtotal().cents(), 500);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_subtotal_of_max_price_items_is_exact() {
        let big = Product::new("Big", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
        let cart = Cart::from_products(vec![big.clone(), big]);
        assert_eq!(cart.subtotal().cents(), 2 * MAX_PRICE_CENTS);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut cart: Cart = vec![test_product("Product 1", 1000), test_product("Product 2", 2000)]
            .into_iter()
            .collect();
        cart.extend([test_product("Product 3", 3000)]);

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.subtotal().cents(), 6000);
        assert_eq!((&cart).into_iter().count(), 3);
    }

    #[test]
    fn test_cart_json_shape() {
        let cart = Cart::from_products(vec![test_product("Tea", 250)]);
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(json, serde_json::json!({ "items": [{ "name": "Tea", "price": 250 }] }));

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_cart_json_rejects_negative_price() {
        let json = serde_json::json!({
            "items": [{ "name": "Tea", "price": -1 }],
        });
        assert!(serde_json::from_value::<Cart>(json).is_err());
    }
}
