//! # Ledger Module
//!
//! Append-only record of completed transactions.
//!
//! ## Ordering
//! Transactions are kept most-recent-first, which is both the display
//! order and the order the ledger snapshot is persisted in. Records are
//! never updated or deleted.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Transaction;

// =============================================================================
// Ledger
// =============================================================================

/// The sales history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Restores a ledger from a persisted snapshot (most recent first).
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    /// Appends a completed transaction at the front (most recent first).
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// All transactions, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions.
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    /// Checks if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Σ(total) over all transactions.
    pub fn total_sales(&self) -> Money {
        self.transactions.iter().map(|t| t.total).sum()
    }

    /// Average transaction total.
    ///
    /// The zero-count case is guarded explicitly and returns zero; it is
    /// never left to division to decide. Whole-rupiah integer division
    /// otherwise.
    pub fn average_sale(&self) -> Money {
        if self.transactions.is_empty() {
            return Money::zero();
        }
        Money::from_rupiah(self.total_sales().rupiah() / self.transactions.len() as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
