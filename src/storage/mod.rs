//! Local key-value persistence
//!
//! The catalog is persisted as a single string value under a single key.
//! `KvStore` is the seam between the catalog and wherever those bytes live.

use crate::config::StorageConfig;
use crate::errors::{ReelmarkError, Result};

pub mod backends;

pub use backends::{FileKvStore, MemoryKvStore};

/// A string-keyed, string-valued persistent store.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// Names accepted by [`StorageFactory::create`].
pub const BACKEND_NAMES: &[&str] = &["file", "memory"];

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StorageConfig) -> Result<Box<dyn KvStore>> {
        let backend: Box<dyn KvStore> = match config.backend.to_lowercase().as_str() {
            "file" => Box::new(FileKvStore::new(&config.data_dir)?),
            "memory" => Box::new(MemoryKvStore::new()),
            other => {
                return Err(ReelmarkError::config(format!(
                    "Unknown storage backend '{}'. Valid: {}",
                    other,
                    BACKEND_NAMES.join(", ")
                )));
            }
        };

        Ok(backend)
    }
}
