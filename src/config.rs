//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Redis
//!
//! Either a full URL:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! or individual components:
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! When neither `REDIS_URL` nor `REDIS_HOST` is set, mappings are kept in an
//! in-process store and lost on restart.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAPPING_TTL_SECONDS` - Retention window per write (default: 2592000, 30 days)
//! - `CREATE_POLICY` - `reuse` or `replace` (default: `reuse`)
//! - `REDIS_CONNECT_RETRIES` - Extra connection attempts at startup (default: 3)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::CreatePolicy;

/// Default retention window: 30 days.
pub const DEFAULT_MAPPING_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Expiration applied to both index entries on every write.
    pub mapping_ttl_seconds: u64,
    /// Behaviour of random shortening for a URL that already has a code.
    pub create_policy: CreatePolicy,
    pub redis_connect_retries: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CREATE_POLICY` holds an unknown value or
    /// `MAPPING_TTL_SECONDS` is not a number.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let mapping_ttl_seconds = match env::var("MAPPING_TTL_SECONDS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("Invalid MAPPING_TTL_SECONDS '{}'", v))?,
            Err(_) => DEFAULT_MAPPING_TTL_SECONDS,
        };

        let create_policy = match env::var("CREATE_POLICY") {
            Ok(v) => v
                .parse::<CreatePolicy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid CREATE_POLICY")?,
            Err(_) => CreatePolicy::default(),
        };

        let redis_connect_retries = env::var("REDIS_CONNECT_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        Ok(Self {
            redis_url,
            listen_addr,
            log_level,
            log_format,
            mapping_ttl_seconds,
            create_policy,
            redis_connect_retries,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `redis_url` has an unsupported scheme
    /// - `mapping_ttl_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        if self.mapping_ttl_seconds == 0 {
            anyhow::bail!("MAPPING_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns the retention window as a [`Duration`].
    pub fn mapping_ttl(&self) -> Duration {
        Duration::from_secs(self.mapping_ttl_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Store: Redis at {}", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Store: in-memory (mappings are not persisted)");
        }

        tracing::info!("  Mapping TTL: {}s", self.mapping_ttl_seconds);
        tracing::info!("  Create policy: {}", self.create_policy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be already loaded (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
