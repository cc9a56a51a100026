//! Storage backend setup

use anyhow::Result;
use movielog_core::{Config, StorageBackend};
use movielog_storage::{create_storage, Storage};
use std::sync::Arc;

/// Create the configured storage backend
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let backend = config.storage_backend.unwrap_or(StorageBackend::S3);
    tracing::info!(backend = %backend, "Initializing storage backend");

    let storage = create_storage(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage backend: {}", e))?;

    Ok(storage)
}
