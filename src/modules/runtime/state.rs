//! Shared application state (HTTP handlers)

use orbit_http_engine::Engine;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Carries the engine adapter into every request; the adapter outlives all
/// requests, the state is just a shared reference to it.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn Engine>,
}

impl AppState {
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }
}
