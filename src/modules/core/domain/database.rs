//! Database types, handles, and query parameters

use crate::domain::DatabaseAddress;
use crate::error::OrbitHttpError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Store types the engine recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// Append-only immutable log
    Eventlog,
    /// Append-only log with entry deletion
    Feed,
    /// Document store keyed by id
    Docstore,
    /// Key-value store
    Keyvalue,
    /// Increment-only counter
    Counter,
}

impl DatabaseType {
    /// The lowercase identifier used in URLs and serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Eventlog => "eventlog",
            DatabaseType::Feed => "feed",
            DatabaseType::Docstore => "docstore",
            DatabaseType::Keyvalue => "keyvalue",
            DatabaseType::Counter => "counter",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = OrbitHttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eventlog" => Ok(DatabaseType::Eventlog),
            "feed" => Ok(DatabaseType::Feed),
            "docstore" => Ok(DatabaseType::Docstore),
            "keyvalue" => Ok(DatabaseType::Keyvalue),
            "counter" => Ok(DatabaseType::Counter),
            other => Err(OrbitHttpError::InvalidDatabaseType(other.to_string())),
        }
    }
}

/// Opaque reference to an open database instance
///
/// Handed out by the engine adapter; route handlers hold it only for the
/// duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHandle {
    /// Full address of the database
    pub address: DatabaseAddress,
    /// Store type of the database
    pub db_type: DatabaseType,
    /// Database name
    pub name: String,
}

/// Access options for opening or creating a database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessOptions {
    /// Create the database if it does not exist
    pub create: bool,
    /// Grant write access to anyone
    pub public: bool,
}

impl Default for AccessOptions {
    /// Create if missing, writable by anyone
    fn default() -> Self {
        Self {
            create: true,
            public: true,
        }
    }
}

/// Parameters of a read query, parsed from the request query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Maximum number of entries to return. Negative means unbounded,
    /// matching the engine's iterator convention. `None` means unbounded.
    pub limit: Option<i64>,
    /// Return entries newest-first
    pub reverse: bool,
    /// Restrict a keyed store to one key
    pub key: Option<String>,
}

impl QueryParams {
    /// Parse query parameters from decoded query-string pairs
    ///
    /// Unknown parameters are ignored so that engine-defined extensions can
    /// pass through; known parameters with unparseable values are rejected.
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Result<Self, OrbitHttpError> {
        let limit = match pairs.get("limit") {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                OrbitHttpError::Validation(format!("invalid limit: {}", raw))
            })?),
            None => None,
        };

        let reverse = match pairs.get("reverse").map(String::as_str) {
            None => false,
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(raw) => {
                return Err(OrbitHttpError::Validation(format!(
                    "invalid reverse flag: {}",
                    raw
                )))
            }
        };

        Ok(Self {
            limit,
            reverse,
            key: pairs.get("key").cloned(),
        })
    }
}
