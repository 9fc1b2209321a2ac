//! # shorturl
//!
//! A fast and lightweight URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Storage and name resolution
//! - **API Layer** ([`api`]) - REST API handlers and DTOs
//!
//! ## Features
//!
//! - Random 1-4 digit short identifiers with collision retry
//! - URL validation with a live DNS reachability check
//! - Concurrent in-memory mapping store, no external dependencies
//! - Structured logging and CORS out of the box
//!
//! ## Quick Start
//!
//! ```bash
//! # Optionally pick a port (default: 3000)
//! export PORT=3000
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MappingService, UrlValidator};
    pub use crate::domain::entities::Mapping;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
