//! HTTP server initialization and runtime setup.
//!
//! Handles registry loading, Axum server lifecycle, and the final flush of
//! request counters on shutdown.

use crate::config::Config;
use crate::domain::registry::RedirectRegistry;
use crate::infrastructure::persistence::JsonFileStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - JSON file store and the redirect registry
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// After the server stops, request counters changed since the last save are
/// flushed to disk.
///
/// # Errors
///
/// Returns an error if:
/// - The redirects file cannot be read (or is corrupt under the `fail` policy)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(&config.redirects_file));
    let registry = Arc::new(
        RedirectRegistry::open(store, config.corrupt_file_policy)
            .await
            .context("Failed to load redirects")?,
    );

    let state = AppState::new(registry.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, flushing redirects");
    if let Err(e) = registry.flush().await {
        tracing::error!("Final flush failed: {}", e);
    }

    Ok(())
}

/// Resolves when the process receives Ctrl+C or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
