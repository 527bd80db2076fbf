//! # Domain Types
//!
//! Core domain types used throughout SmartKasir.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │  Transaction   │   │ PaymentMethod  │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  id (TRX-…)    │   │  Cash          │      │
//! │  │  name          │   │  items (frozen)│   │  Qris          │      │
//! │  │  price (Money) │   │  total         │   │  Debit         │      │
//! │  │  category      │   │  received      │   └────────────────┘      │
//! │  │  stock         │   │  change        │                           │
//! │  └────────────────┘   └────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Transaction` freezes its cart lines at completion time. Later catalog
//! edits (price change, product removal) never alter recorded history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// The catalog is the single source of truth for `price` and `stock`;
/// everything else holds frozen copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4), stable for the product's lifetime.
    pub id: String,

    /// Display name shown to the operator and on receipts.
    pub name: String,

    /// Price in whole rupiah.
    pub price: Money,

    /// Free-text category tag used for browsing ("Makanan", "Minuman", …).
    pub category: String,

    /// Current stock level, never negative.
    pub stock: i64,

    /// Optional image reference for the catalog grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Checks whether any stock remains.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Product Input Types
// =============================================================================

/// Input for creating a new product. The catalog assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpec {
    pub name: String,
    /// Price in whole rupiah, validated non-negative.
    pub price: i64,
    pub category: String,
    /// Initial stock, validated non-negative.
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductSpec {
    /// Creates a spec with no image.
    pub fn new(
        name: impl Into<String>,
        price: i64,
        category: impl Into<String>,
        stock: i64,
    ) -> Self {
        ProductSpec {
            name: name.into(),
            price,
            category: category.into(),
            stock,
            image: None,
        }
    }

    /// Attaches an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Partial update for an existing product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub image: Option<String>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer paid.
///
/// Serialized as `"CASH" | "QRIS" | "DEBIT"`, the representation the ledger
/// snapshots have always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Physical cash; the only method with a tendered amount and change.
    Cash,
    /// QRIS code scan (bank/e-wallet transfer).
    Qris,
    /// Debit card on an external terminal.
    Debit,
}

impl PaymentMethod {
    /// Whether this method involves tendered cash and change.
    #[inline]
    pub const fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// An immutable record of one completed sale.
///
/// ## Invariants
/// - `items` is a snapshot frozen at completion time
/// - `total` equals Σ(price × quantity) over `items` at completion
/// - For non-cash methods `received == total` and `change` is zero
/// - Never updated or deleted once recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Time-derived identifier (`TRX-<epoch-millis>`), monotonic for a
    /// single operator.
    pub id: String,

    /// Cart lines frozen at completion time.
    pub items: Vec<CartLine>,

    /// Grand total, recomputed from `items` at completion.
    pub total: Money,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Completion time. Serialized as epoch milliseconds, the format the
    /// ledger snapshots have always used.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[ts(type = "number")]
    pub timestamp: DateTime<Utc>,

    /// Amount tendered. Equals `total` for non-cash methods.
    pub received_amount: Money,

    /// Change returned to the customer. Zero for non-cash methods.
    pub change_amount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"CASH\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Qris).unwrap(),
            "\"QRIS\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Debit).unwrap(),
            "\"DEBIT\""
        );

        let method: PaymentMethod = serde_json::from_str("\"QRIS\"").unwrap();
        assert_eq!(method, PaymentMethod::Qris);
    }

    #[test]
    fn test_payment_method_is_cash() {
        assert!(PaymentMethod::Cash.is_cash());
        assert!(!PaymentMethod::Qris.is_cash());
        assert!(!PaymentMethod::Debit.is_cash());
    }

    #[test]
    fn test_product_in_stock() {
        let mut product = Product {
            id: "p1".to_string(),
            name: "Es Teh Manis".to_string(),
            price: Money::from_rupiah(5_000),
            category: "Minuman".to_string(),
            stock: 1,
            image: None,
        };
        assert!(product.in_stock());

        product.stock = 0;
        assert!(!product.in_stock());
    }

    #[test]
    fn test_transaction_timestamp_serializes_as_epoch_millis() {
        use chrono::TimeZone;

        let tx = Transaction {
            id: "TRX-1700000000000".to_string(),
            items: Vec::new(),
            total: Money::from_rupiah(25_000),
            payment_method: PaymentMethod::Cash,
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            received_amount: Money::from_rupiah(25_000),
            change_amount: Money::zero(),
        };

        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"timestamp\":1700000000000"));
        assert!(json.contains("\"paymentMethod\":\"CASH\""));
        assert!(json.contains("\"receivedAmount\":25000"));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
