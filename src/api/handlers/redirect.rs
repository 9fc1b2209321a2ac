//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_id}`
///
/// The path parameter is an arbitrary string; only allocated identifiers
/// resolve. Mappings never expire, so a hit always redirects with
/// 307 Temporary Redirect.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Short URL not found"}` when the
/// identifier was never allocated.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.mapping_service.resolve(&short_id).await?;

    Ok(Redirect::temporary(&mapping.original_url))
}
