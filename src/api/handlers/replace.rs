//! Handler for rebinding a mapping to a new short code.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::mapping::{MappingResponse, ReplaceRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Moves the URL behind `oldShortUrl` to `newShortUrl`.
///
/// # Endpoint
///
/// `PUT /api/url/replace`
///
/// # Request Body
///
/// ```json
/// { "oldShortUrl": "old1", "newShortUrl": "new1" }
/// ```
///
/// After success the old code no longer resolves.
///
/// # Errors
///
/// Returns 400 Bad Request if the old code is unknown (`not_found`) or the new
/// code is taken (`conflict`).
pub async fn replace_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReplaceRequest>, JsonRejection>,
) -> Result<Json<MappingResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state
        .mapping_service
        .replace(&payload.old_short_url, payload.new_short_url)
        .await?;

    Ok(Json(mapping.into()))
}
