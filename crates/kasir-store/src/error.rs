//! # Store Error Types
//!
//! Error types for snapshot persistence and store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds the storage key as context         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Frontend displays a user-friendly message                          │
//! │                                                                     │
//! │  Note: save failures during normal operation never reach the        │
//! │  frontend at all; they are logged and in-memory state stays         │
//! │  authoritative for the session.                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use kasir_core::CoreError;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a record from the backend failed.
    #[error("Failed to load '{key}': {message}")]
    LoadFailed { key: String, message: String },

    /// Writing a record to the backend failed.
    #[error("Failed to save '{key}': {message}")]
    SaveFailed { key: String, message: String },

    /// A persisted record could not be decoded.
    ///
    /// ## When This Occurs
    /// - Snapshot was hand-edited or truncated
    /// - Snapshot written by an incompatible version
    #[error("Corrupt snapshot '{key}': {source}")]
    CorruptSnapshot {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A snapshot could not be encoded for saving.
    #[error("Failed to encode snapshot '{key}': {source}")]
    EncodeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Domain error (wraps CoreError).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a LoadFailed error for a given key.
    pub fn load_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::LoadFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a SaveFailed error for a given key.
    pub fn save_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::SaveFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::save_failed("sk_products", "disk full");
        assert_eq!(err.to_string(), "Failed to save 'sk_products': disk full");
    }

    #[test]
    fn test_core_error_passes_through() {
        let core = CoreError::ProductNotFound("p1".to_string());
        let err: StoreError = core.into();
        // Transparent wrapping keeps the domain message intact
        assert_eq!(err.to_string(), "Product not found: p1");
    }
}
