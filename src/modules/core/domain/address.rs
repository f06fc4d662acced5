//! Database address parsing

use crate::error::OrbitHttpError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix every database address starts with
pub const ADDRESS_PREFIX: &str = "/orbitdb/";

/// Address of one logical database: `/orbitdb/<root>/<name>`
///
/// The root identifies the database manifest within the engine; the name is
/// the human-readable database name. Both segments must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabaseAddress {
    root: String,
    name: String,
}

impl DatabaseAddress {
    /// Build an address from its two segments
    pub fn new(root: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    /// The manifest root segment
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The database name segment
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DatabaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", ADDRESS_PREFIX, self.root, self.name)
    }
}

impl FromStr for DatabaseAddress {
    type Err = OrbitHttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or_else(|| OrbitHttpError::MalformedAddress(s.to_string()))?;

        // Name may itself contain slashes; only the first segment is the root.
        match rest.split_once('/') {
            Some((root, name)) if !root.is_empty() && !name.is_empty() => {
                Ok(Self::new(root, name))
            }
            _ => Err(OrbitHttpError::MalformedAddress(s.to_string())),
        }
    }
}

impl TryFrom<String> for DatabaseAddress {
    type Error = OrbitHttpError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DatabaseAddress> for String {
    fn from(addr: DatabaseAddress) -> String {
        addr.to_string()
    }
}
