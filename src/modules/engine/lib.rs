//! Database engine adapter for the OrbitDB HTTP server
//!
//! This crate provides the capability interface the HTTP layer uses to reach
//! the distributed database ([`Engine`]), the two-step bring-up
//! ([`start`]), and the in-process engine implementation.

pub mod memory;
pub mod traits;

pub use memory::{MemoryEngine, MemoryStore};
pub use traits::{Engine, ResultSet};

use orbit_http_core::{EngineOptions, OrbitHttpError};
use std::sync::Arc;

/// Handle to the running engine process
///
/// Held by the server lifecycle manager; stopping it halts the engine after
/// the adapter has disconnected.
pub struct EngineHandle {
    store: Arc<MemoryStore>,
}

impl EngineHandle {
    /// Halt the engine process
    pub async fn stop(&self) -> Result<(), OrbitHttpError> {
        self.store.stop().await
    }
}

/// Start the engine and construct an adapter connected to it
///
/// Step one starts the engine process (creating its data directory when
/// configured), step two constructs the adapter. Callers own the rollback of
/// anything they acquired before calling this.
pub async fn start(
    options: &EngineOptions,
) -> Result<(Arc<dyn Engine>, EngineHandle), OrbitHttpError> {
    let store = MemoryStore::start(options).await?;
    let adapter: Arc<dyn Engine> = Arc::new(MemoryEngine::new(store.clone()));
    Ok((adapter, EngineHandle { store }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_http_core::{AccessOptions, DatabaseType, QueryParams};

    #[tokio::test]
    async fn test_start_returns_connected_adapter() {
        let (adapter, handle) = start(&EngineOptions::default()).await.unwrap();

        let db = adapter
            .open_or_create(DatabaseType::Eventlog, "smoke", &AccessOptions::default())
            .await
            .unwrap();
        let results = adapter.query(&db.address, &QueryParams::default()).await.unwrap();
        assert!(results.is_empty());

        adapter.disconnect().await.unwrap();
        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_start_creates_data_directory() {
        let dir = std::env::temp_dir().join(format!("orbit-http-{}", uuid::Uuid::new_v4()));
        let options = EngineOptions {
            directory: Some(dir.clone()),
        };

        let (_adapter, handle) = start(&options).await.unwrap();
        assert!(dir.is_dir());

        handle.stop().await.unwrap();
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_start_fails_on_impossible_directory() {
        let file = std::env::temp_dir().join(format!("orbit-http-{}", uuid::Uuid::new_v4()));
        std::fs::write(&file, b"not a directory").unwrap();
        let options = EngineOptions {
            // A path whose parent is a regular file cannot be created.
            directory: Some(file.join("data")),
        };

        let result = start(&options).await;
        assert!(matches!(result, Err(OrbitHttpError::Io(_))));
        let _ = std::fs::remove_file(&file);
    }
}
