//! API route configuration.

use crate::api::handlers::{
    delete_handler, replace_handler, resolve_handler, shorten_random_handler,
    shorten_specific_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Mapping routes, nested under `/api/url` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST   /shorten/random`    - Shorten with a generated code
/// - `POST   /shorten/specific`  - Shorten with a caller-chosen code
/// - `PUT    /replace`           - Move a mapping to a new code
/// - `GET    /{shortUrl}`        - Resolve a code to its URL
/// - `DELETE /{shortUrl}`        - Delete a mapping
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten/random", post(shorten_random_handler))
        .route("/shorten/specific", post(shorten_specific_handler))
        .route("/replace", put(replace_handler))
        .route("/{short_url}", get(resolve_handler).delete(delete_handler))
}
