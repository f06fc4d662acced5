//! Engine adapter trait definition

use async_trait::async_trait;
use orbit_http_core::{
    AccessOptions, DatabaseAddress, DatabaseHandle, DatabaseType, OrbitHttpError, QueryParams,
};

/// Result type for query operations
pub type ResultSet = Vec<serde_json::Value>;

/// Capability interface of the database engine
///
/// The HTTP layer reaches the distributed database only through this trait:
/// open-or-create a database, run a read query, disconnect. The engine's own
/// concurrency discipline makes concurrent calls safe; callers add no
/// locking.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Open a database, creating it when allowed by `access`
    ///
    /// Opening the same `(db_type, name)` pair twice returns a handle to the
    /// same address.
    async fn open_or_create(
        &self,
        db_type: DatabaseType,
        name: &str,
        access: &AccessOptions,
    ) -> Result<DatabaseHandle, OrbitHttpError>;

    /// Run a read query against the database at `address`
    async fn query(
        &self,
        address: &DatabaseAddress,
        params: &QueryParams,
    ) -> Result<ResultSet, OrbitHttpError>;

    /// Release the adapter's connection to the engine
    async fn disconnect(&self) -> Result<(), OrbitHttpError>;
}
