//! # kasir-core: Pure Business Logic for SmartKasir
//!
//! This crate is the **heart** of SmartKasir. It contains the whole
//! checkout domain as pure functions and owned state, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     SmartKasir Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      Frontend (UI shell)                      │  │
//! │  │   Catalog UI ──► Cart UI ──► Payment UI ──► History UI        │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │ user intents                     │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │                 kasir-store (PosStore + snapshots)            │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │                ★ kasir-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────┐ ┌──────────┐ ┌────────┐    │  │
//! │  │  │ catalog │ │  money  │ │ cart │ │ checkout │ │ ledger │    │  │
//! │  │  │ Product │ │  Money  │ │ Cart │ │ Checkout │ │ Ledger │    │  │
//! │  │  │  stock  │ │ rupiah  │ │ Line │ │  states  │ │ totals │    │  │
//! │  │  └─────────┘ └─────────┘ └──────┘ └──────────┘ └────────┘    │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Authoritative product set and stock levels
//! - [`cart`] - In-progress selection with additive quantity merge
//! - [`checkout`] - Payment state machine; commits a sale atomically
//! - [`ledger`] - Append-only sale history with aggregate totals
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and synchronous
//! 2. **No I/O**: Persistence lives in kasir-store, never here
//! 3. **Integer Money**: All monetary values are whole rupiah (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{Cart, Catalog, Money, ProductSpec};
//!
//! let mut catalog = Catalog::new();
//! let product = catalog
//!     .add_product(ProductSpec::new("Es Teh Manis", 5000, "Minuman", 100))
//!     .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 2).unwrap();
//!
//! assert_eq!(cart.subtotal(), Money::from_rupiah(10_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kasir_core::Money` instead of
// `use kasir_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use checkout::{Checkout, CheckoutState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use types::{PaymentMethod, Product, ProductPatch, ProductSpec, Transaction};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
/// Can be made configurable per-store in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Stock level below which a product counts as "running low"
///
/// Used by the catalog's low-stock view so the operator can restock
/// before a product sells out.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
