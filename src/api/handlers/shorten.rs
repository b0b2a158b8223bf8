//! Handlers for the shortening endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::mapping::{MappingResponse, ShortenRandomRequest, ShortenSpecificRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL with a generated 8-character code.
///
/// # Endpoint
///
/// `POST /api/url/shorten/random`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/path",
///   "shortUrl": "Xk3_a9Qz",
///   "createdAt": "2024-01-15T10:30:00Z",
///   "updatedAt": "2024-01-15T10:30:00Z"
/// }
/// ```
///
/// Repeated calls for the same URL return the same code unless the service
/// runs with the `replace` create policy.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or `url` is empty.
pub async fn shorten_random_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRandomRequest>, JsonRejection>,
) -> Result<Json<MappingResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.mapping_service.create_random(payload.url).await?;

    Ok(Json(mapping.into()))
}

/// Shortens a URL with a caller-chosen code.
///
/// # Endpoint
///
/// `POST /api/url/shorten/specific`
///
/// # Request Body
///
/// ```json
/// { "url": "https://a.example/x", "shortUrl": "abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, a field is empty, or the
/// code is already in use (`"code": "conflict"`).
pub async fn shorten_specific_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenSpecificRequest>, JsonRejection>,
) -> Result<Json<MappingResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state
        .mapping_service
        .create_specific(payload.url, payload.short_url)
        .await?;

    Ok(Json(mapping.into()))
}
