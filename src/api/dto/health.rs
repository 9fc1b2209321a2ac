//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// The service has no external dependencies to probe, so health reports
/// liveness plus the size of the in-memory store.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub mappings: u64,
}
