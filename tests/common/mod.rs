#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use shorturl::api::handlers::{health_handler, redirect_handler, shorten_handler};
use shorturl::application::services::{MappingService, UrlValidator};
use shorturl::infrastructure::dns::{HostResolver, ResolveError};
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::state::AppState;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;

/// Resolver answering from a fixed host table, so suites never touch the
/// network.
pub struct StaticHostResolver {
    known_hosts: HashSet<String>,
}

impl StaticHostResolver {
    pub fn new(known_hosts: &[&str]) -> Self {
        Self {
            known_hosts: known_hosts.iter().map(|host| host.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if self.known_hosts.contains(host) {
            Ok(())
        } else {
            Err(ResolveError::Lookup {
                host: host.to_owned(),
                source: io::Error::new(io::ErrorKind::NotFound, "name not known"),
            })
        }
    }
}

/// Builds application state with an empty store and the given host table.
pub fn create_test_state(known_hosts: &[&str]) -> AppState {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let mapping_service = Arc::new(MappingService::new(repository));
    let url_validator = Arc::new(UrlValidator::new(Arc::new(StaticHostResolver::new(
        known_hosts,
    ))));

    AppState::new(url_validator, mapping_service)
}

/// Builds a router with the API routes under their production paths.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_id}", get(redirect_handler))
        .with_state(state)
}
