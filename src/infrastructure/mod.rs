//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data storage and name resolution.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution (system resolver and test seam)
//! - [`persistence`] - In-memory repository implementations

pub mod dns;
pub mod persistence;
