//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Mapping creation and resolution
//! - [`services::url_validator::UrlValidator`] - Submitted URL validation

pub mod services;
