//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  kasir-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  kasir-store errors (separate crate)                                │
//! │  └── StoreError       - Snapshot load/save failures                 │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → Frontend          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, amounts, stock levels)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable at the user intent that caused it

use thiserror::Error;

use crate::checkout::CheckoutState;
use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They block the state
/// transition that triggered them and are surfaced for operator correction;
/// none are fatal to the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist
    /// - Product was removed after the UI last refreshed
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart has no line for the given product id.
    #[error("Product not in cart: {0}")]
    LineNotFound(String),

    /// Not enough stock to cover the requested quantity.
    ///
    /// ## When This Occurs
    /// - Adding to cart more than the catalog has available
    /// - Quantity already in the cart plus the new quantity exceeds stock
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 3)
    ///      │
    ///      ▼
    /// Check stock: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Ayam Bakar Madu", available: 2, requested: 3 }
    ///      │
    ///      ▼
    /// UI shows: "Only 2 Ayam Bakar Madu in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Cash received is less than the transaction total.
    ///
    /// The checkout stays in `AwaitingPayment` so the operator can correct
    /// the entered amount; cart and catalog are untouched.
    #[error("Insufficient payment: total {total}, received {received}")]
    InsufficientPayment { total: Money, received: Money },

    /// Checkout is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Selecting a payment method before review started
    /// - Completing a checkout twice
    /// - Entering a received amount for a non-cash method
    #[error("Cannot {operation} while checkout is {state:?}")]
    InvalidCheckoutState {
        operation: &'static str,
        state: CheckoutState,
    },

    /// Payment amount is invalid for the selected method.
    #[error("Invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Ayam Bakar Madu".to_string(),
            available: 2,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Ayam Bakar Madu: available 2, requested 3"
        );

        let err = CoreError::InsufficientPayment {
            total: Money::from_rupiah(25_000),
            received: Money::from_rupiah(20_000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: total Rp 25.000, received Rp 20.000"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().starts_with("price must be between 0"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
