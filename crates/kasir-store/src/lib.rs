//! # kasir-store: Store Object and Snapshot Persistence for SmartKasir
//!
//! This crate wires the pure domain from `kasir-core` to a persistence
//! port and exposes the operation surface the UI collaborator calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     SmartKasir Data Flow                            │
//! │                                                                     │
//! │  UI intent (add-to-cart, confirm-checkout, catalog CRUD)            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   kasir-store (THIS CRATE)                    │  │
//! │  │                                                               │  │
//! │  │   ┌────────────┐   ┌────────────────┐   ┌─────────────────┐  │  │
//! │  │   │  PosStore  │   │ StorageBackend │   │  JsonFileBackend│  │  │
//! │  │   │ (store.rs) │   │  (backend.rs)  │   │ (json_file.rs)  │  │  │
//! │  │   │            │──►│ load/save port │◄──│  MemoryBackend  │  │  │
//! │  │   └────────────┘   └────────────────┘   └─────────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Keyed JSON records: sk_products, sk_transactions                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `PosStore`, the owned store object
//! - [`backend`] - The storage port trait and the in-memory backend
//! - [`json_file`] - File-backed implementation of the port
//! - [`seed`] - Starter catalog for first launch
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use kasir_store::{MemoryBackend, PosStore, seed};
//!
//! let mut store = PosStore::open(MemoryBackend::new()).unwrap();
//! for spec in seed::starter_products() {
//!     store.add_product(spec).unwrap();
//! }
//!
//! let id = store.catalog().products()[0].id.clone();
//! store.add_to_cart(&id, 1).unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod json_file;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{MemoryBackend, StorageBackend};
pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileBackend;
pub use store::PosStore;

/// Storage key for the catalog snapshot.
pub const PRODUCTS_KEY: &str = "sk_products";

/// Storage key for the ledger snapshot.
pub const TRANSACTIONS_KEY: &str = "sk_transactions";
