//! Core domain logic for the OrbitDB HTTP server
//!
//! This crate contains the domain types, configuration, error taxonomy, and
//! wire-format types shared by the engine adapter and the HTTP runtime.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;

pub use api::{CreateResponse, QueryResponse};
pub use config::{EngineOptions, HttpServerConfig, DEFAULT_PORT};
pub use domain::*;
pub use error::OrbitHttpError;
