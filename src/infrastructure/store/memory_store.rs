//! In-process mapping store with per-entry expiration.

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingStore, StoreResult};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Mapping store keeping both indices in sharded `DashMap`s.
///
/// Mirrors the Redis semantics: each write sets a fresh expiry, expired entries
/// read as absent (and are dropped lazily), and `put`/`delete` touch the two
/// maps in sequence without a common lock.
///
/// Used when no Redis URL is configured, and in tests.
#[derive(Debug)]
pub struct InMemoryMappingStore {
    forward: DashMap<String, Entry>,
    reverse: DashMap<String, Entry>,
    ttl: TimeDelta,
}

impl InMemoryMappingStore {
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            forward: DashMap::new(),
            reverse: DashMap::new(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    fn expiry(&self) -> DateTime<Utc> {
        Utc::now()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn live(map: &DashMap<String, Entry>, key: &str) -> Option<String> {
        let entry = map.get(key)?;

        if entry.is_expired() {
            drop(entry);
            map.remove_if(key, |_, e| e.is_expired());
            return None;
        }

        Some(entry.value.clone())
    }
}

#[async_trait]
impl MappingStore for InMemoryMappingStore {
    async fn get_forward(&self, short_code: &str) -> StoreResult<Option<String>> {
        Ok(Self::live(&self.forward, short_code))
    }

    async fn get_reverse(&self, original_url: &str) -> StoreResult<Option<String>> {
        Ok(Self::live(&self.reverse, original_url))
    }

    async fn exists(&self, short_code: &str) -> StoreResult<bool> {
        Ok(Self::live(&self.forward, short_code).is_some())
    }

    async fn put(&self, mapping: &UrlMapping) -> StoreResult<()> {
        let expires_at = self.expiry();

        self.forward.insert(
            mapping.short_url.clone(),
            Entry {
                value: mapping.original_url.clone(),
                expires_at,
            },
        );
        self.reverse.insert(
            mapping.original_url.clone(),
            Entry {
                value: mapping.short_url.clone(),
                expires_at,
            },
        );

        debug!("Store SET: {} <-> {}", mapping.short_url, mapping.original_url);
        Ok(())
    }

    async fn delete(&self, short_code: &str) -> StoreResult<()> {
        let Some(original_url) = Self::live(&self.forward, short_code) else {
            return Ok(());
        };

        self.forward.remove(short_code);
        self.reverse.remove(&original_url);

        debug!("Store DEL: {} <-> {}", short_code, original_url);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const DAY: Duration = Duration::from_secs(86_400);

    #[tokio::test]
    async fn put_writes_both_indices() {
        let store = InMemoryMappingStore::new(DAY);

        store
            .put(&UrlMapping::new("https://example.com", "abc123"))
            .await
            .unwrap();

        assert_eq!(
            store.get_forward("abc123").await.unwrap().as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            store.get_reverse("https://example.com").await.unwrap().as_deref(),
            Some("abc123")
        );
        assert!(store.exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn missing_entries_are_absent() {
        let store = InMemoryMappingStore::new(DAY);

        assert!(store.get_forward("nope").await.unwrap().is_none());
        assert!(store.get_reverse("https://nope").await.unwrap().is_none());
        assert!(!store.exists("nope").await.unwrap());
    }

    #[tokio::test]
    async fn expired_entries_read_as_absent() {
        let store = InMemoryMappingStore::new(Duration::ZERO);

        store
            .put(&UrlMapping::new("https://example.com", "abc123"))
            .await
            .unwrap();

        assert!(store.get_forward("abc123").await.unwrap().is_none());
        assert!(store.get_reverse("https://example.com").await.unwrap().is_none());
        assert!(!store.exists("abc123").await.unwrap());
        assert!(store.forward.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_both_indices() {
        let store = InMemoryMappingStore::new(DAY);

        store
            .put(&UrlMapping::new("https://example.com", "abc123"))
            .await
            .unwrap();
        store.delete("abc123").await.unwrap();

        assert!(!store.exists("abc123").await.unwrap());
        assert!(store.get_reverse("https://example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_nonexistent_is_noop() {
        let store = InMemoryMappingStore::new(DAY);

        store
            .put(&UrlMapping::new("https://example.com", "abc123"))
            .await
            .unwrap();
        store.delete("other").await.unwrap();

        assert!(store.exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn reverse_entry_follows_last_write() {
        let store = InMemoryMappingStore::new(DAY);

        store
            .put(&UrlMapping::new("https://example.com", "first"))
            .await
            .unwrap();
        store
            .put(&UrlMapping::new("https://example.com", "second"))
            .await
            .unwrap();

        assert_eq!(
            store.get_reverse("https://example.com").await.unwrap().as_deref(),
            Some("second")
        );
        assert!(store.exists("first").await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryMappingStore::new(DAY));
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let mapping = UrlMapping::new(
                    format!("https://example{}.com", i),
                    format!("code-{:03}", i),
                );
                store.put(&mapping).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let url = store
                .get_forward(&format!("code-{:03}", i))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(url, format!("https://example{}.com", i));
        }
    }
}
