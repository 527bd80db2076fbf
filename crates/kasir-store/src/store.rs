//! # The POS Store
//!
//! `PosStore` owns the whole running state (catalog, cart, checkout,
//! ledger) and the persistence port. There are no ambient globals: the
//! UI collaborator holds one `PosStore` and calls the operations below.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      PosStore Operations                            │
//! │                                                                     │
//! │  UI intent            Store operation          Persisted record     │
//! │  ─────────            ───────────────          ────────────────     │
//! │  New product ───────► add_product() ─────────► sk_products          │
//! │  Edit product ──────► update_product() ──────► sk_products          │
//! │  Tap product ───────► add_to_cart() ─────────► (cart is ephemeral)  │
//! │  Confirm payment ───► complete_checkout() ───► sk_products +        │
//! │                                                sk_transactions      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Contract
//! Every mutating operation runs synchronously to completion on the
//! in-memory state, then fires a save as a side effect. A failed save is
//! logged with `warn!` and otherwise ignored: in-memory state stays
//! authoritative for the session, it just may not survive a restart.
//! Derived values (totals) are never persisted; they are recomputed from
//! the line items every time.

use serde::Serialize;
use tracing::{debug, info, warn};

use kasir_core::{
    Cart, Catalog, Checkout, CheckoutState, CoreError, Ledger, Money, PaymentMethod, Product,
    ProductPatch, ProductSpec, Transaction,
};

use crate::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};
use crate::{PRODUCTS_KEY, TRANSACTIONS_KEY};

// =============================================================================
// PosStore
// =============================================================================

/// The owned store object: domain state plus an injected persistence port.
#[derive(Debug)]
pub struct PosStore<B: StorageBackend> {
    catalog: Catalog,
    cart: Cart,
    checkout: Checkout,
    ledger: Ledger,
    backend: B,
}

impl<B: StorageBackend> PosStore<B> {
    /// Opens a store over the given backend, loading both snapshot
    /// records. A missing record starts empty; a corrupt one is an error
    /// (better to stop than to silently trade away the ledger).
    pub fn open(backend: B) -> StoreResult<Self> {
        let catalog = match backend.load(PRODUCTS_KEY)? {
            Some(payload) => {
                let products: Vec<Product> = serde_json::from_str(&payload).map_err(|source| {
                    StoreError::CorruptSnapshot {
                        key: PRODUCTS_KEY.to_string(),
                        source,
                    }
                })?;
                Catalog::from_products(products)
            }
            None => Catalog::new(),
        };

        let ledger = match backend.load(TRANSACTIONS_KEY)? {
            Some(payload) => {
                let transactions: Vec<Transaction> =
                    serde_json::from_str(&payload).map_err(|source| StoreError::CorruptSnapshot {
                        key: TRANSACTIONS_KEY.to_string(),
                        source,
                    })?;
                Ledger::from_transactions(transactions)
            }
            None => Ledger::new(),
        };

        info!(
            products = catalog.len(),
            transactions = ledger.count(),
            "store opened"
        );

        Ok(PosStore {
            catalog,
            cart: Cart::new(),
            checkout: Checkout::new(),
            ledger,
            backend,
        })
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Creates a product and persists the catalog.
    pub fn add_product(&mut self, spec: ProductSpec) -> StoreResult<Product> {
        let product = self.catalog.add_product(spec)?;
        info!(id = %product.id, name = %product.name, "product added");
        self.persist_catalog();
        Ok(product)
    }

    /// Merges a patch into a product and persists the catalog.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        let product = self.catalog.update_product(id, patch)?;
        info!(id = %product.id, "product updated");
        self.persist_catalog();
        Ok(product)
    }

    /// Removes a product and persists the catalog.
    ///
    /// Recorded transactions keep their frozen line snapshots.
    pub fn remove_product(&mut self, id: &str) -> StoreResult<()> {
        self.catalog.remove_product(id)?;
        info!(id = %id, "product removed");
        self.persist_catalog();
        Ok(())
    }

    // =========================================================================
    // Cart Operations (ephemeral, never persisted)
    // =========================================================================

    /// Adds a product to the cart, merging quantities additively.
    pub fn add_to_cart(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart");

        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?
            .clone();

        self.cart.add_item(&product, quantity)?;
        Ok(())
    }

    /// Sets the absolute quantity of a cart line; `quantity <= 0` removes
    /// the line. Oversell stays rejected here too, against the catalog's
    /// current stock.
    pub fn set_cart_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "set_cart_quantity");

        if quantity > 0 {
            let product = self
                .catalog
                .get(product_id)
                .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

            if quantity > product.stock {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested: quantity,
                }
                .into());
            }
        }

        self.cart.set_quantity(product_id, quantity)?;
        Ok(())
    }

    /// Removes a cart line unconditionally. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        debug!(product_id = %product_id, "remove_from_cart");
        self.cart.remove_item(product_id);
    }

    /// Empties the cart without touching the checkout state.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.clear();
    }

    // =========================================================================
    // Checkout Operations
    // =========================================================================

    /// Starts reviewing the cart.
    pub fn begin_checkout(&mut self) -> StoreResult<()> {
        debug!(lines = self.cart.line_count(), "begin_checkout");
        self.checkout.begin(&self.cart)?;
        Ok(())
    }

    /// Selects or switches the payment method.
    pub fn select_payment_method(&mut self, method: PaymentMethod) -> StoreResult<()> {
        debug!(method = ?method, "select_payment_method");
        self.checkout.select_payment_method(method)?;
        Ok(())
    }

    /// Records the cash amount tendered.
    pub fn set_received_amount(&mut self, amount: Money) -> StoreResult<()> {
        debug!(amount = %amount, "set_received_amount");
        self.checkout.set_received_amount(amount)?;
        Ok(())
    }

    /// Change due against the current cart subtotal.
    pub fn change_due(&self) -> Money {
        self.checkout.change_due(self.cart.subtotal())
    }

    /// Commits the sale: records the transaction, decrements stock,
    /// clears the cart, then persists both snapshot records.
    pub fn complete_checkout(&mut self) -> StoreResult<Transaction> {
        let transaction =
            self.checkout
                .complete(&mut self.cart, &mut self.catalog, &mut self.ledger)?;

        info!(
            id = %transaction.id,
            total = %transaction.total,
            method = ?transaction.payment_method,
            items = transaction.items.len(),
            "sale completed"
        );

        self.persist_catalog();
        self.persist_ledger();
        Ok(transaction)
    }

    /// Discards the payment entry and returns to review; cart untouched.
    pub fn abort_checkout(&mut self) -> StoreResult<()> {
        debug!("abort_checkout");
        self.checkout.abort()?;
        Ok(())
    }

    /// Abandons the checkout entirely and empties the cart.
    pub fn cancel_checkout(&mut self) -> StoreResult<()> {
        debug!("cancel_checkout");
        self.checkout.cancel()?;
        self.cart.clear();
        Ok(())
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The sales history.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Current checkout state.
    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    /// Selected payment method, if any.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.checkout.payment_method()
    }

    /// Entered received amount, if any.
    pub fn received_amount(&self) -> Option<Money> {
        self.checkout.received_amount()
    }

    // =========================================================================
    // Persistence (fire-and-forget)
    // =========================================================================

    fn persist_catalog(&self) {
        if let Err(e) = self.try_persist(PRODUCTS_KEY, &self.catalog.products()) {
            warn!(key = PRODUCTS_KEY, error = %e, "snapshot save failed; in-memory state stays authoritative");
        }
    }

    fn persist_ledger(&self) {
        if let Err(e) = self.try_persist(TRANSACTIONS_KEY, &self.ledger.transactions()) {
            warn!(key = TRANSACTIONS_KEY, error = %e, "snapshot save failed; in-memory state stays authoritative");
        }
    }

    fn try_persist<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value).map_err(|source| StoreError::EncodeFailed {
            key: key.to_string(),
            source,
        })?;
        self.backend.save(key, &payload)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
