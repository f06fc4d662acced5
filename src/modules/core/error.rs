//! Error types for the OrbitDB HTTP server

use thiserror::Error;

/// Main error type for server operations
#[derive(Error, Debug)]
pub enum OrbitHttpError {
    /// Request parameter validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown database type in a create request
    #[error("Invalid database type: {0}")]
    InvalidDatabaseType(String),

    /// Database address that does not follow `/orbitdb/<root>/<name>`
    #[error("Malformed database address: {0}")]
    MalformedAddress(String),

    /// Query against an address the engine does not know
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    /// Database engine failure (open, query, disconnect)
    #[error("Engine error: {0}")]
    Engine(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrbitHttpError {
    /// Returns true if this error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            OrbitHttpError::Validation(_)
                | OrbitHttpError::InvalidDatabaseType(_)
                | OrbitHttpError::MalformedAddress(_)
                | OrbitHttpError::DatabaseNotFound(_)
        )
    }

    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            OrbitHttpError::DatabaseNotFound(_) => 404,
            OrbitHttpError::Validation(_)
            | OrbitHttpError::InvalidDatabaseType(_)
            | OrbitHttpError::MalformedAddress(_) => 400,
            _ => 500,
        }
    }

    /// Sanitize the error message to avoid leaking engine internals
    pub fn sanitized_message(&self) -> String {
        match self {
            // Don't expose engine or filesystem details
            OrbitHttpError::Engine(_) => "Database engine error".to_string(),
            OrbitHttpError::Io(_) => "IO error".to_string(),
            OrbitHttpError::Server(_) => "Internal server error".to_string(),

            // Safe to expose
            OrbitHttpError::DatabaseNotFound(addr) => format!("Database not found: {}", addr),
            OrbitHttpError::InvalidDatabaseType(ty) => format!("Invalid database type: {}", ty),
            OrbitHttpError::MalformedAddress(addr) => {
                format!("Malformed database address: {}", addr)
            }
            OrbitHttpError::Validation(msg) => format!("Validation error: {}", msg),

            // Default: use the error message
            _ => self.to_string(),
        }
    }
}

/// Result type alias using OrbitHttpError
pub type Result<T> = std::result::Result<T, OrbitHttpError>;
