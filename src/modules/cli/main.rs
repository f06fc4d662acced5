//! OrbitDB HTTP server CLI
//!
//! Starts the HTTP server, waits for a shutdown signal, and stops it.

use clap::Parser;
use orbit_http_core::{EngineOptions, HttpServerConfig, OrbitHttpError, DEFAULT_PORT};
use std::path::PathBuf;
use tokio::signal;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// HTTP API server for OrbitDB databases
#[derive(Parser, Debug)]
#[command(name = "orbit-http-server", version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Data directory for the database engine
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), OrbitHttpError> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = HttpServerConfig {
        port: Some(cli.port),
        engine: EngineOptions {
            directory: cli.directory,
        },
    };

    let server = orbit_http_runtime::start(config).await?;
    shutdown_signal().await;
    server.stop().await?;

    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            debug!("Received CTRL+C, shutting down...");
        }
        _ = terminate => {
            debug!("Received SIGTERM, shutting down...");
        }
    }
}
