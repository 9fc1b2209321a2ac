use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error shared across layers.
///
/// Display strings double as the wire payload, so they are part of the
/// public contract and must not change casually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Candidate URL failed validation (unparseable or unresolvable host).
    #[error("invalid url")]
    InvalidUrl,

    /// No mapping exists under the requested short identifier.
    #[error("Short URL not found")]
    NotFound,

    /// An insert raced with an existing mapping under the same identifier.
    /// Consumed by the create retry loop and never reaches a client.
    #[error("short identifier '{0}' is already taken")]
    ShortIdTaken(String),

    /// The identifier space is too full to allocate within the retry budget.
    #[error("no free short identifier available")]
    CapacityExhausted,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            // Rejected URLs are reported in the payload, not the status line.
            AppError::InvalidUrl => StatusCode::OK,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ShortIdTaken(_) => StatusCode::CONFLICT,
            AppError::CapacityExhausted => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
