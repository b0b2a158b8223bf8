//! Store trait for the forward and reverse mapping indices.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a mapping store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    ConnectionError(String),

    #[error("Store operation error: {0}")]
    OperationError(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value storage for short code mappings.
///
/// Every mapping lives in two independent namespaces:
///
/// - **forward**: short code → original URL
/// - **reverse**: original URL → short code
///
/// Each write stamps both entries with a fresh expiration of the full retention
/// window. An entry that has expired is indistinguishable from one that never
/// existed.
///
/// Only single-key operations are atomic. [`MappingStore::put`] and
/// [`MappingStore::delete`] touch two keys in sequence, so a failure between
/// the steps leaves the indices disagreeing until the next create for that URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisMappingStore`] - Redis with `SET EX`
/// - [`crate::infrastructure::store::InMemoryMappingStore`] - expiring in-process maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Looks up the original URL for a short code.
    async fn get_forward(&self, short_code: &str) -> StoreResult<Option<String>>;

    /// Looks up the short code last written for an original URL.
    async fn get_reverse(&self, original_url: &str) -> StoreResult<Option<String>>;

    /// Returns `true` if a live forward entry exists for the short code.
    async fn exists(&self, short_code: &str) -> StoreResult<bool>;

    /// Writes the forward entry, then the reverse entry.
    ///
    /// Existing entries under either key are overwritten.
    async fn put(&self, mapping: &UrlMapping) -> StoreResult<()>;

    /// Removes the forward entry and the reverse entry it points to.
    ///
    /// The forward entry is read first to discover the original URL. When it
    /// is already absent this is a no-op, not an error.
    async fn delete(&self, short_code: &str) -> StoreResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
