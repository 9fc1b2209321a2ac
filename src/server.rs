//! HTTP server initialization and runtime setup.
//!
//! Builds the application state, binds the listener, and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::{MappingService, UrlValidator};
use crate::config::Config;
use crate::infrastructure::dns::SystemHostResolver;
use crate::infrastructure::persistence::InMemoryMappingRepository;
use crate::routes::{app_router, cors_layer};
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory mapping store
/// - URL validator backed by the system resolver
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The CORS origin is invalid
/// - The bind address is invalid or the listener cannot bind
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let mapping_service = Arc::new(MappingService::new(repository));
    let url_validator = Arc::new(UrlValidator::new(Arc::new(SystemHostResolver)));

    let state = AppState::new(url_validator, mapping_service);

    let cors = cors_layer(config.cors_allow_origin.as_deref())?;
    let app = app_router(state, cors);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
