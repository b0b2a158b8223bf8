//! Handler for deleting a mapping.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for a short code.
///
/// # Endpoint
///
/// `DELETE /api/url/{shortUrl}`
///
/// Idempotent: unknown codes also answer 204 No Content.
pub async fn delete_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.mapping_service.delete(&short_url).await?;

    Ok(StatusCode::NO_CONTENT)
}
