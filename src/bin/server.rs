//! Policy Cost Engine - API server binary.
//!
//! Starts the HTTP server exposing `GET /policy`.
//!
//! # Environment Variables
//!
//! * `ENGINE_CONFIG` - Path to a YAML configuration file (optional; defaults apply)
//! * `ENGINE_HOST` - Server host (default: 0.0.0.0)
//! * `ENGINE_PORT` - Server port (default: 8080)
//! * `RUST_LOG` - Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use policy_engine::api::{AppState, create_router};
use policy_engine::config::EngineConfig;
use policy_engine::source::HttpPolicySource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = load_config()?;

    tracing::info!(policy_url = %config.policy_url, "Starting policy cost engine");

    let source = Arc::new(HttpPolicySource::new(config.policy_url.clone()));
    let app = create_router(AppState::new(source, config));

    let host = std::env::var("ENGINE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("ENGINE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads engine configuration from `ENGINE_CONFIG` if set, defaults otherwise.
fn load_config() -> Result<EngineConfig, Box<dyn std::error::Error>> {
    match std::env::var("ENGINE_CONFIG") {
        Ok(path) => Ok(EngineConfig::load(path)?),
        Err(_) => Ok(EngineConfig::default()),
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
