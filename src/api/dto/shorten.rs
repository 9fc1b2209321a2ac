//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Accepted as JSON or as an urlencoded form body (the landing page form
/// posts the latter).
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,
}

/// Successful shorten result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The URL exactly as it was submitted.
    pub original_url: String,

    /// The allocated short identifier, a bare 1-4 digit string.
    pub short_url: String,
}
