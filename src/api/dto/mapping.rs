//! DTOs for the mapping endpoints.
//!
//! Field names are camelCase on the wire (`shortUrl`, `oldShortUrl`, ...).
//! Validation only checks that fields are present and non-empty; URLs and
//! caller-supplied codes are otherwise accepted verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL with a generated code.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRandomRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Request to shorten a URL with a caller-chosen code.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenSpecificRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[validate(length(min = 1, message = "shortUrl must not be empty"))]
    pub short_url: String,
}

/// Request to move a mapping from one short code to another.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequest {
    #[validate(length(min = 1, message = "oldShortUrl must not be empty"))]
    pub old_short_url: String,

    #[validate(length(min = 1, message = "newShortUrl must not be empty"))]
    pub new_short_url: String,
}

/// A mapping as returned by the create and replace endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_url,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
        }
    }
}

/// Resolved original URL.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub url: String,
}
