//! # Storage Backend Port
//!
//! The persistence capability the store is handed at construction.
//!
//! ## The Port Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Persistence Port                               │
//! │                                                                     │
//! │  PosStore ──── save(key, payload) ────► StorageBackend (trait)      │
//! │           ◄─── load(key) ───────────── │                            │
//! │                                        ├── MemoryBackend (tests,    │
//! │                                        │   ephemeral sessions)      │
//! │                                        └── JsonFileBackend (one     │
//! │                                            <key>.json per record)   │
//! │                                                                     │
//! │  The store never knows which backend it was given. Tests inject     │
//! │  MemoryBackend; a real deployment injects JsonFileBackend.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The interface is a keyed string-blob get/set, the shape the snapshot
//! records have always been stored in.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreResult;

// =============================================================================
// Port Trait
// =============================================================================

/// Capability interface for loading and saving snapshot records.
pub trait StorageBackend {
    /// Loads the record stored under `key`. `None` if nothing was ever
    /// saved there.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Saves `payload` under `key`, replacing any previous record.
    fn save(&self, key: &str, payload: &str) -> StoreResult<()>;
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Backend that keeps records in memory.
///
/// Handles are cheap clones sharing the same underlying map, so a test
/// can keep a handle, drop a store, and reopen a new store over the same
/// records.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        MemoryBackend {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let records = self.records.lock().expect("storage mutex poisoned");
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> StoreResult<()> {
        let mut records = self.records.lock().expect("storage mutex poisoned");
        records.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.load("sk_products").unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let backend = MemoryBackend::new();

        backend.save("sk_products", "[]").unwrap();
        assert_eq!(backend.load("sk_products").unwrap().as_deref(), Some("[]"));

        backend.save("sk_products", "[{}]").unwrap();
        assert_eq!(backend.load("sk_products").unwrap().as_deref(), Some("[{}]"));
    }

    #[test]
    fn test_clones_share_records() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();

        backend.save("sk_transactions", "[]").unwrap();
        assert_eq!(handle.load("sk_transactions").unwrap().as_deref(), Some("[]"));
    }
}
