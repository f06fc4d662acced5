//! Server and engine configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port the HTTP server listens on when none is configured
pub const DEFAULT_PORT: u16 = 3000;

/// Options forwarded to the database engine at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Data directory for persistent engine state. When set, the engine
    /// creates it on startup; startup fails if it cannot.
    pub directory: Option<PathBuf>,
}

/// Configuration for starting the HTTP server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Port to listen on. `None` falls back to [`DEFAULT_PORT`]; `0` asks
    /// the OS for an ephemeral port.
    pub port: Option<u16>,

    /// Engine-specific options
    #[serde(default)]
    pub engine: EngineOptions,
}

impl HttpServerConfig {
    /// The port this configuration resolves to
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}
