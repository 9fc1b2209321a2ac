//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Request body extraction
//! - [`handlers`] - HTTP request handlers

pub mod dto;
pub mod extract;
pub mod handlers;
