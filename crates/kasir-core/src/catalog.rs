//! # Catalog Module
//!
//! The authoritative set of sellable products and their stock levels.
//!
//! ## Ownership Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stock Ownership                                │
//! │                                                                     │
//! │  Catalog ── owns ──► price, stock (authoritative)                   │
//! │     │                                                               │
//! │     ├── Cart copies name/price at add time (frozen snapshot)        │
//! │     │   and NEVER mutates stock                                     │
//! │     │                                                               │
//! │     └── Checkout is the ONLY caller of decrement_stock              │
//! │         (besides explicit catalog edits by the operator)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Stock Clamp Invariant
//! `decrement_stock` floors at zero. Stock can never go negative, no matter
//! what quantity a completed sale carries. Oversell is prevented earlier at
//! cart-add time; the clamp holds even if the operator edits stock between
//! carting and completion.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductPatch, ProductSpec};
use crate::validation::{validate_price, validate_product_name, validate_stock};

// =============================================================================
// Catalog
// =============================================================================

/// The product catalog.
///
/// Products keep their insertion order, which is also the order the catalog
/// snapshot is persisted and displayed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Restores a catalog from a persisted snapshot.
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Creates a new product with a freshly generated unique id.
    ///
    /// ## Errors
    /// `ValidationError` if the name is empty or price/stock are negative.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::{Catalog, ProductSpec};
    ///
    /// let mut catalog = Catalog::new();
    /// let product = catalog
    ///     .add_product(ProductSpec::new("Es Teh Manis", 5_000, "Minuman", 100))
    ///     .unwrap();
    /// assert_eq!(product.stock, 100);
    /// ```
    pub fn add_product(&mut self, spec: ProductSpec) -> CoreResult<Product> {
        validate_product_name(&spec.name)?;
        validate_price(spec.price)?;
        validate_stock(spec.stock)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: spec.name.trim().to_string(),
            price: Money::from_rupiah(spec.price),
            category: spec.category,
            stock: spec.stock,
            image: spec.image,
        };

        self.products.push(product.clone());
        Ok(product)
    }

    /// Merges patch fields into an existing product.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is absent
    /// - `ValidationError` if a patched field fails validation
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> CoreResult<Product> {
        if let Some(name) = &patch.name {
            validate_product_name(name)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }
        if let Some(stock) = patch.stock {
            validate_stock(stock)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            product.name = name.trim().to_string();
        }
        if let Some(price) = patch.price {
            product.price = Money::from_rupiah(price);
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(image) = patch.image {
            product.image = Some(image);
        }

        Ok(product.clone())
    }

    /// Deletes a product from the catalog.
    ///
    /// Historical transactions are unaffected; they hold frozen snapshots
    /// of their line items, not references into the catalog.
    ///
    /// ## Errors
    /// `ProductNotFound` if the id is absent.
    pub fn remove_product(&mut self, id: &str) -> CoreResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        if self.products.len() == before {
            return Err(CoreError::ProductNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Reduces stock by `qty`, floored at zero.
    ///
    /// The clamp is a hard invariant: stock never goes negative. Returns
    /// the new stock level.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is absent
    /// - `ValidationError` if `qty` is negative
    pub fn decrement_stock(&mut self, id: &str, qty: i64) -> CoreResult<i64> {
        if qty < 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        product.stock = (product.stock - qty).max(0);
        Ok(product.stock)
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive name search. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Products in an exact category.
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// Products with stock strictly below `threshold`, for the restock view.
    pub fn low_stock(&self, threshold: i64) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock < threshold)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
