//! Handler for the shorten endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON or urlencoded form with a single field:
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": "823" }
/// ```
///
/// # Errors
///
/// A URL that fails validation (unparseable, or its host does not resolve)
/// produces `{"error": "invalid url"}` under the same 200 status as a
/// success; by contract that failure is payload-level, not an HTTP error.
/// An exhausted identifier space produces 503.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    if !state.url_validator.validate(&payload.url).await {
        return Err(AppError::InvalidUrl);
    }

    let mapping = state.mapping_service.create(payload.url).await?;

    Ok(Json(ShortenResponse {
        original_url: mapping.original_url,
        short_url: mapping.short_id,
    }))
}
