//! HTTP server runtime for the OrbitDB HTTP server
//!
//! This crate provides the request handlers, middleware, shared handler
//! state, and the server lifecycle manager.

pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;

pub use handlers::{CreateHandler, GetHandler};
pub use server::{build_router, start, ServerHandle, ServerState};
pub use state::AppState;
