//! # JSON File Backend
//!
//! File-backed implementation of the storage port: one `<key>.json` file
//! per record inside a data directory.
//!
//! ## Write Discipline
//! Saves go through a temporary file followed by a rename, so a crash
//! mid-write leaves the previous snapshot intact rather than a truncated
//! one. That is the whole durability story: there is no journal and no
//! transaction spanning the two records, matching the fire-and-forget
//! persistence contract of the store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// JSON File Backend
// =============================================================================

/// Backend that stores each record as `<data_dir>/<key>.json`.
///
/// ## Example
/// ```rust,ignore
/// let backend = JsonFileBackend::new("./data");
/// let store = PosStore::open(backend)?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    /// Directory holding the snapshot files. Created on first save.
    data_dir: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend rooted at the given directory.
    ///
    /// The directory itself is created lazily on the first save, so
    /// constructing a backend never touches the file system.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileBackend {
            data_dir: data_dir.into(),
        }
    }

    /// The directory the snapshot files live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.record_path(key);
        if !path.exists() {
            debug!(key = %key, "no snapshot file, starting empty");
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::load_failed(key, e.to_string()))
    }

    fn save(&self, key: &str, payload: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StoreError::save_failed(key, e.to_string()))?;

        // Write-then-rename keeps the previous snapshot readable if this
        // write dies halfway.
        let path = self.record_path(key);
        let tmp = self.data_dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp, payload).map_err(|e| StoreError::save_failed(key, e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::save_failed(key, e.to_string()))?;

        debug!(key = %key, bytes = payload.len(), "snapshot saved");
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
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        assert_eq!(backend.load("sk_products").unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        backend.save("sk_products", "[1,2,3]").unwrap();
        assert_eq!(
            backend.load("sk_products").unwrap().as_deref(),
            Some("[1,2,3]")
        );

        // Overwrite replaces the record
        backend.save("sk_products", "[]").unwrap();
        assert_eq!(backend.load("sk_products").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        backend.save("sk_products", "[]").unwrap();
        backend.save("sk_transactions", "[]").unwrap();

        assert!(dir.path().join("sk_products.json").exists());
        assert!(dir.path().join("sk_transactions.json").exists());
        // No stray temp files left behind
        assert!(!dir.path().join("sk_products.json.tmp").exists());
    }

    #[test]
    fn test_creates_data_dir_on_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pos").join("data");
        let backend = JsonFileBackend::new(&nested);

        assert!(!nested.exists());
        backend.save("sk_products", "[]").unwrap();
        assert!(nested.join("sk_products.json").exists());
    }
}
