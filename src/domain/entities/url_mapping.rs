//! Url mapping entity binding a short code to its original URL.

use chrono::{DateTime, Utc};

/// A short code bound to the URL it redirects to.
///
/// The original URL is treated as an opaque identifier and is never normalized.
/// Both timestamps are fixed at construction: a replace produces a brand-new
/// mapping rather than mutating this one, so `updated_at` carries no
/// modification history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a mapping stamped with the current time.
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = UrlMapping::new("https://example.com", "abc123");

        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.short_url, "abc123");
        assert_eq!(mapping.created_at, mapping.updated_at);
    }

    #[test]
    fn test_mapping_keeps_url_verbatim() {
        let mapping = UrlMapping::new("HTTPS://Example.COM:443/Path#frag", "x");
        assert_eq!(mapping.original_url, "HTTPS://Example.COM:443/Path#frag");
    }
}
