//! # Cart Module
//!
//! The operator's in-progress selection of products and quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Frontend Action        Cart Operation        State Change          │
//! │  ───────────────        ──────────────        ────────────          │
//! │                                                                     │
//! │  Tap Product ─────────► add_item() ─────────► merge or push line    │
//! │                                                                     │
//! │  Change Quantity ─────► set_quantity() ─────► line.quantity = n     │
//! │                                               (n <= 0 removes)      │
//! │                                                                     │
//! │  Tap Remove ──────────► remove_item() ──────► line dropped          │
//! │                                                                     │
//! │  Checkout / Cancel ───► clear() ────────────► all lines dropped     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id (adding the same product merges
//!   quantities additively, never replace-in-place)
//! - Quantity is always >= 1 while a line exists; zero-quantity lines are
//!   removed, not retained
//! - Adds beyond the product's available stock are rejected, counting any
//!   quantity already in the cart
//! - Lines hold frozen copies of product data, never references; the
//!   catalog's stock is never touched from here

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart: a frozen product snapshot plus a quantity.
///
/// ## Design Notes
/// - `product_id` references the catalog entry (for stock decrement at
///   completion)
/// - Name, price, category and image are frozen at add time, so the cart
///   and any transaction built from it display consistent data even if
///   the catalog is edited afterwards
/// - Stock is deliberately NOT part of the snapshot; the catalog is the
///   single source of truth for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog product id this line refers to.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Image reference at time of adding (frozen).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Freezes a product into a new cart line.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart, merging additively if a line for that
    /// product already exists.
    ///
    /// ## Errors
    /// - `ValidationError` if `quantity` is not in 1..=999
    /// - `InsufficientStock` if the quantity already carted plus `quantity`
    ///   exceeds the product's current stock (out-of-stock products are
    ///   therefore always rejected)
    /// - `QuantityTooLarge` / `CartTooLarge` on the cart size limits
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let already_carted = self
            .line(&product.id)
            .map(|line| line.quantity)
            .unwrap_or(0);

        if already_carted + quantity > product.stock {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: (product.stock - already_carted).max(0),
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Sets the absolute quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed (removal of an absent line
    ///   is a no-op)
    /// - otherwise: the line's quantity is replaced
    ///
    /// ## Errors
    /// - `LineNotFound` if `quantity > 0` and no line exists for the id
    /// - `ValidationError` if `quantity` exceeds the per-line maximum
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_item(product_id);
            return Ok(());
        }

        validate_quantity(quantity)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;

        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line unconditionally. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart. Used after a successful checkout or an explicit
    /// cancel.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Σ(price × quantity) over all lines. Pure, no side effects.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines (the cart badge number).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_rupiah(price),
            category: "Makanan".to_string(),
            stock,
            image: None,
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 50);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_rupiah(50_000));
    }

    #[test]
    fn test_add_same_product_merges_additively() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 50);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        // Still one line; quantities sum, never replace
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 5);
    }

    #[test]
    fn test_add_rejects_out_of_stock() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 0);

        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 0,
                requested: 1,
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_oversell_counting_carted_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 2);

        cart.add_item(&product, 2).unwrap();

        // Stock is 2 and both are already in the cart
        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 0,
                requested: 1,
                ..
            }
        ));
        assert_eq!(cart.line("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_rejects_invalid_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 50);

        assert!(cart.add_item(&product, 0).is_err());
        assert!(cart.add_item(&product, -1).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 50);

        cart.add_item(&product, 2).unwrap();
        cart.set_quantity("1", 7).unwrap();

        assert_eq!(cart.line("1").unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 50);

        cart.add_item(&product, 2).unwrap();
        cart.set_quantity("1", 0).unwrap();
        assert!(cart.line("1").is_none());

        // Negative behaves like zero
        cart.add_item(&product, 2).unwrap();
        cart.set_quantity("1", -3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_line() {
        let mut cart = Cart::new();

        let err = cart.set_quantity("ghost", 2).unwrap_err();
        assert!(matches!(err, CoreError::LineNotFound(_)));

        // Removal path stays a no-op for absent lines
        assert!(cart.set_quantity("ghost", 0).is_ok());
    }

    #[test]
    fn test_remove_item_is_unconditional() {
        let mut cart = Cart::new();
        let product = test_product("1", 25_000, 50);

        cart.add_item(&product, 2).unwrap();
        cart.remove_item("1");
        assert!(cart.is_empty());

        // No-op if absent
        cart.remove_item("1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_over_multiple_lines() {
        let mut cart = Cart::new();

        cart.add_item(&test_product("1", 25_000, 50), 2).unwrap();
        cart.add_item(&test_product("2", 5_000, 100), 3).unwrap();

        assert_eq!(cart.subtotal(), Money::from_rupiah(65_000));
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 25_000, 50), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_line_snapshot_freezes_price() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 25_000, 50);

        cart.add_item(&product, 1).unwrap();
        product.price = Money::from_rupiah(99_000);

        // The carted line keeps the price it was added at
        assert_eq!(cart.line("1").unwrap().price, Money::from_rupiah(25_000));
    }
}
