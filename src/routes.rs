//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page (public)
//! - `GET  /health`                  - Health check (public)
//! - `POST /api/shorturl`            - Shorten a URL (public)
//! - `GET  /api/shorturl/{short_id}` - Short URL redirect (public)
//! - `/public/*`                     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin by default, restrictable to a single one

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - CORS policy built by [`cors_layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route_service("/", ServeFile::new("views/index.html"))
        .route("/health", get(health_handler))
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_id}", get(redirect_handler))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(cors)
        .layer(trace_layer())
}

/// Builds the CORS layer.
///
/// With no configured origin every origin is allowed; with one, only that
/// origin is.
///
/// # Errors
///
/// Returns an error if `allow_origin` is not a valid header value.
pub fn cors_layer(allow_origin: Option<&str>) -> Result<CorsLayer> {
    let layer = match allow_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{}'", origin))?;

            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };

    Ok(layer)
}

/// Request/response tracing at INFO with millisecond latencies.
fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
