//! Startup helpers shared by every mode

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::config::{StaticConfig, get_config, init_config, update_config};
use crate::storage::StorageFactory;

/// Load configuration and apply command-line overrides on top of it.
pub fn prepare_config(config_path: Option<&str>, data_dir: Option<String>) -> Arc<StaticConfig> {
    init_config(config_path);

    if let Some(data_dir) = data_dir {
        let mut config = (*get_config()).clone();
        config.storage.data_dir = data_dir;
        update_config(config);
    }

    get_config()
}

/// Open the configured backend and load the catalog from it.
///
/// This is the one place a `CatalogStore` is constructed; callers pass it
/// on by reference.
pub fn open_catalog(config: &StaticConfig) -> Result<CatalogStore> {
    let storage = StorageFactory::create(&config.storage).with_context(|| {
        format!(
            "Failed to open '{}' storage at '{}'",
            config.storage.backend, config.storage.data_dir
        )
    })?;

    debug!(
        "Opening catalog '{}' on {} backend",
        config.storage.key,
        storage.backend_name()
    );

    Ok(CatalogStore::load(storage, config.storage.key.clone()))
}
