//! Domain models for the OrbitDB HTTP server

mod address;
mod database;

pub use address::DatabaseAddress;
pub use database::{AccessOptions, DatabaseHandle, DatabaseType, QueryParams};
