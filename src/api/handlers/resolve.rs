//! Handler for short code resolution.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::mapping::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short code.
///
/// # Endpoint
///
/// `GET /api/url/{shortUrl}`
///
/// # Errors
///
/// Returns 400 Bad Request with `"code": "not_found"` if the code is unknown
/// or has expired.
pub async fn resolve_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let url = state.mapping_service.resolve(&short_url).await?;

    Ok(Json(UrlResponse { url }))
}
