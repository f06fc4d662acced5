//! Wire-format types for HTTP responses

use crate::domain::{DatabaseAddress, DatabaseHandle, DatabaseType};
use serde::{Deserialize, Serialize};

/// Response body for a create request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    /// Whether the database was opened or created
    pub success: bool,
    /// Error message if the request failed
    #[serde(default)]
    pub error: String,
    /// Address of the opened database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<DatabaseAddress>,
    /// Store type of the opened database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_type: Option<DatabaseType>,
    /// Database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateResponse {
    /// Create a successful response from an open database handle
    pub fn success(handle: DatabaseHandle) -> Self {
        Self {
            success: true,
            error: String::new(),
            address: Some(handle.address),
            db_type: Some(handle.db_type),
            name: Some(handle.name),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            address: None,
            db_type: None,
            name: None,
        }
    }
}

/// Response body for a query request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Whether the query succeeded
    pub success: bool,
    /// Error message if the query failed
    #[serde(default)]
    pub error: String,
    /// Query results
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

impl QueryResponse {
    /// Create a successful response with results
    pub fn success(results: Vec<serde_json::Value>) -> Self {
        Self {
            success: true,
            error: String::new(),
            results,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_success() {
        let handle = DatabaseHandle {
            address: DatabaseAddress::new("zdpuAxyz", "test"),
            db_type: DatabaseType::Eventlog,
            name: "test".to_string(),
        };
        let response = CreateResponse::success(handle);
        assert!(response.success);
        assert!(response.error.is_empty());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"address\":\"/orbitdb/zdpuAxyz/test\""));
        assert!(json.contains("\"db_type\":\"eventlog\""));
    }

    #[test]
    fn test_create_response_error_omits_handle_fields() {
        let response = CreateResponse::error("Invalid database type: graph");
        assert!(!response.success);

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("address"));
    }

    #[test]
    fn test_query_response_success() {
        let response = QueryResponse::success(vec![serde_json::json!({"value": 1})]);
        assert!(response.success);
        assert!(response.error.is_empty());
        assert_eq!(response.results.len(), 1);
    }

    #[test]
    fn test_query_response_error() {
        let response = QueryResponse::error("Database not found: /orbitdb/x/y");
        assert!(!response.success);
        assert!(response.results.is_empty());
    }
}
