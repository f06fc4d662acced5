//! Server lifecycle manager
//!
//! Owns the Stopped -> Starting -> Running -> Stopping -> Stopped state
//! machine: [`start`] binds the listener and brings up the engine atomically,
//! [`ServerHandle::stop`] closes the socket and tears the engine down in
//! order.

use axum::{middleware, routing::get, Router};
use orbit_http_core::{HttpServerConfig, OrbitHttpError};
use orbit_http_engine::{Engine, EngineHandle};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::handlers::{CreateHandler, GetHandler};
use crate::middleware::log_request;
use crate::state::AppState;

/// Lifecycle record of a running server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerState {
    /// Port the listener is bound to
    pub port: u16,
    /// True once both the listener and the engine are live
    pub started: bool,
}

/// Everything that exists only while the server is running
struct Running {
    state: ServerState,
    shutdown_tx: oneshot::Sender<()>,
    serve_task: JoinHandle<std::io::Result<()>>,
    engine: Arc<dyn Engine>,
    engine_handle: EngineHandle,
}

/// Handle to a started server
pub struct ServerHandle {
    running: Mutex<Option<Running>>,
}

impl ServerHandle {
    /// Snapshot of the lifecycle record; `None` once stopped
    pub async fn state(&self) -> Option<ServerState> {
        self.running.lock().await.as_ref().map(|r| r.state.clone())
    }

    /// Stop the server
    ///
    /// Initiates the listener shutdown first, then awaits the serve task,
    /// disconnects the engine adapter, and halts the engine process. Resolves
    /// only after both the socket and the engine are released. Calling it
    /// again (or concurrently) is a no-op.
    pub async fn stop(&self) -> Result<(), OrbitHttpError> {
        let Some(running) = self.running.lock().await.take() else {
            return Ok(());
        };
        debug!("Stopping server on port {}", running.state.port);

        let _ = running.shutdown_tx.send(());
        let serve_result = match running.serve_task.await {
            Ok(result) => {
                result.map_err(|e| OrbitHttpError::Server(format!("Server error: {}", e)))
            }
            Err(e) => Err(OrbitHttpError::Server(format!("Serve task panicked: {}", e))),
        };

        // The engine is released even when the serve task failed; errors are
        // propagated only after teardown is complete.
        let disconnect_result = running.engine.disconnect().await;
        let engine_result = running.engine_handle.stop().await;

        serve_result?;
        disconnect_result?;
        engine_result?;

        info!("Server stopped");
        Ok(())
    }
}

/// Build the Axum router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Default index page
        .route("/", get(index))
        // Create a new database
        .route("/create/:type/:name", get(CreateHandler::handle))
        // Query a database
        .route("/orbitdb/*address", get(GetHandler::handle))
        .with_state(state)
        .layer(middleware::from_fn(log_request))
}

async fn index() -> &'static str {
    "OrbitDB"
}

/// Start the HTTP server
///
/// Binds the listener, then performs the two-step engine initialization.
/// Startup is atomic: if the engine fails to come up, the listener is
/// released on the error path and the port is immediately re-bindable.
pub async fn start(config: HttpServerConfig) -> Result<ServerHandle, OrbitHttpError> {
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port())
        .parse()
        .map_err(|e| OrbitHttpError::Server(format!("Invalid address: {}", e)))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| OrbitHttpError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    let port = listener
        .local_addr()
        .map_err(|e| OrbitHttpError::Server(format!("Listener has no address: {}", e)))?
        .port();

    // The listener is scoped to this function until the serve task takes it:
    // an engine failure here drops it and frees the port.
    let (engine, engine_handle) = orbit_http_engine::start(&config.engine).await?;

    let app = build_router(AppState::new(engine.clone()));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let serve_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    info!("OrbitDB server started at http://localhost:{}/", port);

    Ok(ServerHandle {
        running: Mutex::new(Some(Running {
            state: ServerState {
                port,
                started: true,
            },
            shutdown_tx,
            serve_task,
            engine,
            engine_handle,
        })),
    })
}
