//! In-memory engine implementation
//!
//! Models the five store types behind the [`Engine`] trait so the server can
//! run without an external daemon. The split between [`MemoryStore`] (the
//! engine process) and [`MemoryEngine`] (the adapter connected to it) mirrors
//! the two-step bring-up of the real engine.

use async_trait::async_trait;
use orbit_http_core::{
    AccessOptions, DatabaseAddress, DatabaseHandle, DatabaseType, EngineOptions, OrbitHttpError,
    QueryParams,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::traits::{Engine, ResultSet};

/// Contents of one database, by store type
#[derive(Debug, Clone)]
enum StoreData {
    /// eventlog, feed
    Log(Vec<Value>),
    /// keyvalue, docstore
    Keyed(BTreeMap<String, Value>),
    /// counter
    Counter(i64),
}

impl StoreData {
    fn new(db_type: DatabaseType) -> Self {
        match db_type {
            DatabaseType::Eventlog | DatabaseType::Feed => StoreData::Log(Vec::new()),
            DatabaseType::Keyvalue | DatabaseType::Docstore => StoreData::Keyed(BTreeMap::new()),
            DatabaseType::Counter => StoreData::Counter(0),
        }
    }
}

#[derive(Debug, Clone)]
struct Database {
    db_type: DatabaseType,
    name: String,
    data: StoreData,
}

impl Database {
    fn handle(&self, address: DatabaseAddress) -> DatabaseHandle {
        DatabaseHandle {
            address,
            db_type: self.db_type,
            name: self.name.clone(),
        }
    }
}

/// The engine process: owns all database state
///
/// Started before any adapter is constructed and stopped after the last
/// adapter has disconnected.
pub struct MemoryStore {
    databases: RwLock<HashMap<DatabaseAddress, Database>>,
    running: AtomicBool,
}

impl MemoryStore {
    /// Start the engine process
    ///
    /// Creates the configured data directory; failure here fails the whole
    /// startup, which is the canonical partial-startup path the server must
    /// roll back from.
    pub async fn start(options: &EngineOptions) -> Result<Arc<Self>, OrbitHttpError> {
        if let Some(dir) = &options.directory {
            tokio::fs::create_dir_all(dir).await?;
        }

        Ok(Arc::new(Self {
            databases: RwLock::new(HashMap::new()),
            running: AtomicBool::new(true),
        }))
    }

    /// Halt the engine process and drop all database state
    pub async fn stop(&self) -> Result<(), OrbitHttpError> {
        self.running.store(false, Ordering::SeqCst);
        self.databases.write().await.clear();
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), OrbitHttpError> {
        if self.running.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(OrbitHttpError::Engine("engine is stopped".to_string()))
        }
    }
}

/// Adapter connected to a running [`MemoryStore`]
pub struct MemoryEngine {
    store: Arc<MemoryStore>,
    connected: AtomicBool,
}

impl MemoryEngine {
    /// Connect an adapter to a started store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            connected: AtomicBool::new(true),
        }
    }

    /// Deterministic manifest root for a `(db_type, name)` pair
    fn address_for(db_type: DatabaseType, name: &str) -> DatabaseAddress {
        let root = Uuid::new_v5(
            &Uuid::NAMESPACE_OID,
            format!("{}/{}", db_type, name).as_bytes(),
        );
        DatabaseAddress::new(root.simple().to_string(), name)
    }

    fn ensure_connected(&self) -> Result<(), OrbitHttpError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(OrbitHttpError::Engine("adapter is disconnected".to_string()));
        }
        self.store.ensure_running()
    }

    /// Append an entry to a log database (eventlog, feed)
    ///
    /// Write operations are not part of the HTTP surface; they exist for
    /// embedders and tests.
    pub async fn append(
        &self,
        address: &DatabaseAddress,
        entry: Value,
    ) -> Result<(), OrbitHttpError> {
        self.ensure_connected()?;
        let mut databases = self.store.databases.write().await;
        let db = databases
            .get_mut(address)
            .ok_or_else(|| OrbitHttpError::DatabaseNotFound(address.to_string()))?;
        match &mut db.data {
            StoreData::Log(entries) => {
                entries.push(entry);
                Ok(())
            }
            _ => Err(OrbitHttpError::Engine(format!(
                "append is not supported on a {} database",
                db.db_type
            ))),
        }
    }

    /// Set a key in a keyed database (keyvalue, docstore)
    pub async fn put(
        &self,
        address: &DatabaseAddress,
        key: impl Into<String>,
        value: Value,
    ) -> Result<(), OrbitHttpError> {
        self.ensure_connected()?;
        let mut databases = self.store.databases.write().await;
        let db = databases
            .get_mut(address)
            .ok_or_else(|| OrbitHttpError::DatabaseNotFound(address.to_string()))?;
        match &mut db.data {
            StoreData::Keyed(map) => {
                map.insert(key.into(), value);
                Ok(())
            }
            _ => Err(OrbitHttpError::Engine(format!(
                "put is not supported on a {} database",
                db.db_type
            ))),
        }
    }

    /// Increment a counter database
    pub async fn increment(
        &self,
        address: &DatabaseAddress,
        amount: i64,
    ) -> Result<i64, OrbitHttpError> {
        self.ensure_connected()?;
        let mut databases = self.store.databases.write().await;
        let db = databases
            .get_mut(address)
            .ok_or_else(|| OrbitHttpError::DatabaseNotFound(address.to_string()))?;
        match &mut db.data {
            StoreData::Counter(value) => {
                *value += amount;
                Ok(*value)
            }
            _ => Err(OrbitHttpError::Engine(format!(
                "increment is not supported on a {} database",
                db.db_type
            ))),
        }
    }
}

#[async_trait]
impl Engine for MemoryEngine {
    async fn open_or_create(
        &self,
        db_type: DatabaseType,
        name: &str,
        access: &AccessOptions,
    ) -> Result<DatabaseHandle, OrbitHttpError> {
        self.ensure_connected()?;
        let address = Self::address_for(db_type, name);

        let mut databases = self.store.databases.write().await;
        if let Some(db) = databases.get(&address) {
            return Ok(db.handle(address));
        }

        if !access.create {
            return Err(OrbitHttpError::DatabaseNotFound(address.to_string()));
        }

        let db = Database {
            db_type,
            name: name.to_string(),
            data: StoreData::new(db_type),
        };
        let handle = db.handle(address.clone());
        databases.insert(address, db);
        Ok(handle)
    }

    async fn query(
        &self,
        address: &DatabaseAddress,
        params: &QueryParams,
    ) -> Result<ResultSet, OrbitHttpError> {
        self.ensure_connected()?;
        let databases = self.store.databases.read().await;
        let db = databases
            .get(address)
            .ok_or_else(|| OrbitHttpError::DatabaseNotFound(address.to_string()))?;

        let results = match &db.data {
            StoreData::Log(entries) => {
                let mut entries = entries.clone();
                if params.reverse {
                    entries.reverse();
                }
                // Negative limit means unbounded, like the engine's iterator.
                if let Some(limit) = params.limit {
                    if limit >= 0 {
                        entries.truncate(limit as usize);
                    }
                }
                entries
            }
            StoreData::Keyed(map) => match &params.key {
                Some(key) => map
                    .get(key)
                    .map(|value| vec![serde_json::json!({ "key": key, "value": value })])
                    .unwrap_or_default(),
                None => map
                    .iter()
                    .map(|(key, value)| serde_json::json!({ "key": key, "value": value }))
                    .collect(),
            },
            StoreData::Counter(value) => vec![serde_json::json!({ "value": value })],
        };

        Ok(results)
    }

    async fn disconnect(&self) -> Result<(), OrbitHttpError> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }
}
