//! Redis-backed mapping store.

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

/// Key prefix of the forward index (short code → original URL).
pub const FORWARD_PREFIX: &str = "url:";

/// Key prefix of the reverse index (original URL → short code).
pub const REVERSE_PREFIX: &str = "reverse:";

/// Mapping store writing both indices to Redis with `SET ... EX`.
///
/// Uses `ConnectionManager` for automatic reconnection. Unlike a cache, errors
/// are propagated: Redis is the system of record here.
pub struct RedisMappingStore {
    client: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisMappingStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl` - retention window applied to every write
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl: Duration) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds: ttl.as_secs().max(1),
        })
    }

    /// Connects with exponential backoff, making `retries` extra attempts.
    pub async fn connect_with_retry(
        redis_url: &str,
        ttl: Duration,
        retries: usize,
    ) -> StoreResult<Self> {
        let strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(retries);

        Retry::start(strategy, move || async move {
            Self::connect(redis_url, ttl).await.inspect_err(|e| {
                warn!("{}", e);
            })
        })
        .await
    }

    fn forward_key(short_code: &str) -> String {
        format!("{}{}", FORWARD_PREFIX, short_code)
    }

    fn reverse_key(original_url: &str) -> String {
        format!("{}{}", REVERSE_PREFIX, original_url)
    }
}

fn op_error(op: &str, key: &str, e: redis::RedisError) -> StoreError {
    StoreError::OperationError(format!("Redis {} failed for {}: {}", op, key, e))
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn get_forward(&self, short_code: &str) -> StoreResult<Option<String>> {
        let key = Self::forward_key(short_code);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&key)
            .await
            .map_err(|e| op_error("GET", &key, e))
    }

    async fn get_reverse(&self, original_url: &str) -> StoreResult<Option<String>> {
        let key = Self::reverse_key(original_url);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&key)
            .await
            .map_err(|e| op_error("GET", &key, e))
    }

    async fn exists(&self, short_code: &str) -> StoreResult<bool> {
        let key = Self::forward_key(short_code);
        let mut conn = self.client.clone();

        conn.exists::<_, bool>(&key)
            .await
            .map_err(|e| op_error("EXISTS", &key, e))
    }

    async fn put(&self, mapping: &UrlMapping) -> StoreResult<()> {
        let forward = Self::forward_key(&mapping.short_url);
        let reverse = Self::reverse_key(&mapping.original_url);
        let mut conn = self.client.clone();

        // Two independent commands; a failure in between leaves the reverse
        // entry stale until the next create for this URL.
        conn.set_ex::<_, _, ()>(&forward, &mapping.original_url, self.ttl_seconds)
            .await
            .map_err(|e| op_error("SET", &forward, e))?;
        conn.set_ex::<_, _, ()>(&reverse, &mapping.short_url, self.ttl_seconds)
            .await
            .map_err(|e| op_error("SET", &reverse, e))?;

        debug!(
            "Store SET: {} <-> {} (TTL: {}s)",
            mapping.short_url, mapping.original_url, self.ttl_seconds
        );
        Ok(())
    }

    async fn delete(&self, short_code: &str) -> StoreResult<()> {
        let forward = Self::forward_key(short_code);
        let mut conn = self.client.clone();

        let Some(original_url) = conn
            .get::<_, Option<String>>(&forward)
            .await
            .map_err(|e| op_error("GET", &forward, e))?
        else {
            return Ok(());
        };

        let reverse = Self::reverse_key(&original_url);

        conn.del::<_, i32>(&forward)
            .await
            .map_err(|e| op_error("DEL", &forward, e))?;
        conn.del::<_, i32>(&reverse)
            .await
            .map_err(|e| op_error("DEL", &reverse, e))?;

        debug!("Store DEL: {} <-> {}", short_code, original_url);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
