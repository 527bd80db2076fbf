//! # Checkout Module
//!
//! The payment state machine. Turns a reviewed cart into a recorded
//! transaction, decrementing stock atomically with the record.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Lifecycle                             │
//! │                                                                     │
//! │              begin()            select_payment_method()             │
//! │   ┌──────┐  cart non-empty  ┌────────┐                ┌─────────┐  │
//! │   │ Idle │ ───────────────► │ Review │ ─────────────► │Awaiting │  │
//! │   └──────┘                  └────────┘                │ Payment │  │
//! │       ▲                          ▲                    └────┬────┘  │
//! │       │                          │  abort()                │       │
//! │       │                          └────────────────────┐    │       │
//! │       │                                               │    │       │
//! │   (new checkout                ┌───────────┐          │    │       │
//! │    via begin)  ◄────────────── │ Completed │ ◄────────┼────┤       │
//! │                                └───────────┘ complete()    │       │
//! │                                ┌───────────┐               │       │
//! │                ◄────────────── │  Aborted  │ ◄─────────────┘       │
//! │                                └───────────┘  cancel()             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomic Completion
//! `complete()` validates first, then performs all effects together:
//! build the transaction, decrement stock per line (clamped at zero),
//! append to the ledger, clear the cart. A failed precondition (short
//! cash) leaves every collaborator untouched and the state in
//! `AwaitingPayment` so the operator can correct the input.
//!
//! ## Total Recomputation
//! The total is always recomputed from the current cart lines at
//! completion time, never cached from an earlier subtotal call. Quantity
//! edits between review and payment can therefore never cause drift.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{PaymentMethod, Transaction};
use crate::validation::validate_received_amount;

// =============================================================================
// Checkout State
// =============================================================================

/// Where the checkout currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    /// No checkout in progress.
    Idle,
    /// Cart is under review; no payment method chosen yet.
    Review,
    /// Payment method chosen; waiting for confirmation (and, for cash,
    /// the tendered amount).
    AwaitingPayment,
    /// Sale recorded; terminal until the next `begin`.
    Completed,
    /// Checkout abandoned; terminal until the next `begin`.
    Aborted,
}

// =============================================================================
// Checkout
// =============================================================================

/// The checkout state machine.
///
/// Holds only payment-entry state. The cart, catalog and ledger are passed
/// in by the owning store at completion time, keeping this type free of
/// aliased references.
#[derive(Debug, Clone)]
pub struct Checkout {
    state: CheckoutState,
    method: Option<PaymentMethod>,
    received: Option<Money>,
}

impl Checkout {
    /// Creates a checkout in the `Idle` state.
    pub fn new() -> Self {
        Checkout {
            state: CheckoutState::Idle,
            method: None,
            received: None,
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Current state.
    #[inline]
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Selected payment method, if any.
    #[inline]
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.method
    }

    /// Entered received amount, if any.
    #[inline]
    pub fn received_amount(&self) -> Option<Money> {
        self.received
    }

    /// Change due against the given total: `max(0, received - total)`.
    ///
    /// Non-cash methods never produce change; the received amount is
    /// implicitly the total.
    pub fn change_due(&self, total: Money) -> Money {
        match self.method {
            Some(PaymentMethod::Cash) => self
                .received
                .unwrap_or_else(Money::zero)
                .saturating_sub_floor_zero(total),
            _ => Money::zero(),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Starts reviewing the cart: `Idle | Completed | Aborted → Review`.
    ///
    /// Any payment entry from a previous checkout is discarded.
    ///
    /// ## Errors
    /// - `EmptyCart` if the cart has no lines
    /// - `InvalidCheckoutState` if a checkout is already in progress
    pub fn begin(&mut self, cart: &Cart) -> CoreResult<()> {
        match self.state {
            CheckoutState::Idle | CheckoutState::Completed | CheckoutState::Aborted => {}
            state => {
                return Err(CoreError::InvalidCheckoutState {
                    operation: "begin review",
                    state,
                })
            }
        }

        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        self.method = None;
        self.received = None;
        self.state = CheckoutState::Review;
        Ok(())
    }

    /// Selects (or switches) the payment method:
    /// `Review | AwaitingPayment → AwaitingPayment`.
    ///
    /// Switching away from cash resets any previously entered received
    /// amount.
    pub fn select_payment_method(&mut self, method: PaymentMethod) -> CoreResult<()> {
        match self.state {
            CheckoutState::Review | CheckoutState::AwaitingPayment => {}
            state => {
                return Err(CoreError::InvalidCheckoutState {
                    operation: "select a payment method",
                    state,
                })
            }
        }

        if !method.is_cash() {
            self.received = None;
        }
        self.method = Some(method);
        self.state = CheckoutState::AwaitingPayment;
        Ok(())
    }

    /// Records the cash amount tendered by the customer.
    ///
    /// ## Errors
    /// - `InvalidCheckoutState` outside `AwaitingPayment`
    /// - `InvalidPaymentAmount` if the selected method is not cash
    /// - `ValidationError` if the amount is negative
    pub fn set_received_amount(&mut self, amount: Money) -> CoreResult<()> {
        if self.state != CheckoutState::AwaitingPayment {
            return Err(CoreError::InvalidCheckoutState {
                operation: "enter a received amount",
                state: self.state,
            });
        }

        match self.method {
            Some(PaymentMethod::Cash) => {}
            _ => {
                return Err(CoreError::InvalidPaymentAmount {
                    reason: "received amount only applies to cash payments".to_string(),
                })
            }
        }

        validate_received_amount(amount.rupiah())?;
        self.received = Some(amount);
        Ok(())
    }

    /// Commits the sale: `AwaitingPayment → Completed`.
    ///
    /// On success, in one synchronous step: builds the transaction from a
    /// frozen snapshot of the cart, decrements catalog stock per line
    /// (clamped at zero), appends the transaction to the ledger, clears
    /// the cart, and returns the transaction.
    ///
    /// ## Errors
    /// - `InvalidCheckoutState` outside `AwaitingPayment`
    /// - `EmptyCart` if the cart emptied since review
    /// - `InsufficientPayment` for cash with `received < total`; the state
    ///   stays `AwaitingPayment` and cart/catalog are untouched
    pub fn complete(
        &mut self,
        cart: &mut Cart,
        catalog: &mut Catalog,
        ledger: &mut Ledger,
    ) -> CoreResult<Transaction> {
        let method = match (self.state, self.method) {
            (CheckoutState::AwaitingPayment, Some(method)) => method,
            (state, _) => {
                return Err(CoreError::InvalidCheckoutState {
                    operation: "complete checkout",
                    state,
                })
            }
        };

        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        // Always recomputed from the live lines, never cached from review.
        let total = cart.subtotal();

        let (received, change) = if method.is_cash() {
            let received = self.received.unwrap_or_else(Money::zero);
            if received < total {
                return Err(CoreError::InsufficientPayment { total, received });
            }
            (received, received.saturating_sub_floor_zero(total))
        } else {
            (total, Money::zero())
        };

        let now = Utc::now();
        let transaction = Transaction {
            id: format!("TRX-{}", now.timestamp_millis()),
            items: cart.lines().to_vec(),
            total,
            payment_method: method,
            timestamp: now,
            received_amount: received,
            change_amount: change,
        };

        // Removed products simply have no stock left to decrement; the
        // transaction still records the frozen line.
        for line in &transaction.items {
            if catalog.get(&line.product_id).is_some() {
                catalog.decrement_stock(&line.product_id, line.quantity)?;
            }
        }

        ledger.record(transaction.clone());
        cart.clear();
        self.method = None;
        self.received = None;
        self.state = CheckoutState::Completed;

        Ok(transaction)
    }

    /// Discards the in-progress payment entry: `AwaitingPayment → Review`.
    ///
    /// The cart is untouched; the operator is back at review.
    pub fn abort(&mut self) -> CoreResult<()> {
        if self.state != CheckoutState::AwaitingPayment {
            return Err(CoreError::InvalidCheckoutState {
                operation: "abort payment",
                state: self.state,
            });
        }

        self.method = None;
        self.received = None;
        self.state = CheckoutState::Review;
        Ok(())
    }

    /// Abandons the checkout entirely: `Review | AwaitingPayment → Aborted`.
    ///
    /// Clearing the cart is the owning store's job; this machine only
    /// tracks payment-entry state.
    pub fn cancel(&mut self) -> CoreResult<()> {
        match self.state {
            CheckoutState::Review | CheckoutState::AwaitingPayment => {}
            state => {
                return Err(CoreError::InvalidCheckoutState {
                    operation: "cancel checkout",
                    state,
                })
            }
        }

        self.method = None;
        self.received = None;
        self.state = CheckoutState::Aborted;
        Ok(())
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
