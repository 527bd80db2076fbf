//! # Validation Module
//!
//! Input validation utilities for SmartKasir.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Frontend                                                  │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Business rule validation on every core operation               │
//! │  └── The frontend is advisory; this layer is authoritative          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Nasi Goreng Special").unwrap();
//! validate_quantity(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

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
/// use kasir_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Kopi Susu Gula Aren").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in whole rupiah.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use kasir_core::validation::validate_price;
///
/// assert!(validate_price(25_000).is_ok());
/// assert!(validate_price(0).is_ok());
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(rupiah: i64) -> ValidationResult<()> {
    if rupiah < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0); zero-quantity lines are removed, not stored
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a tendered cash amount.
///
/// ## Rules
/// - Must be non-negative (>= 0); the amount may still be short of the
///   total, which is rejected at completion rather than at entry
pub fn validate_received_amount(rupiah: i64) -> ValidationResult<()> {
    if rupiah < 0 {
        return Err(ValidationError::OutOfRange {
            field: "received amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Nasi Goreng Special").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(25_000).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(200).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_received_amount() {
        assert!(validate_received_amount(0).is_ok());
        assert!(validate_received_amount(50_000).is_ok());
        assert!(validate_received_amount(-1).is_err());
    }
}
