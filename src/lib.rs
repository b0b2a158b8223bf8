//! # kv-shortener
//!
//! A URL shortener that keeps its mappings in an expiring key-value namespace.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and the store trait
//! - **Application Layer** ([`application`]) - The mapping lifecycle protocol
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Mapping model
//!
//! Each mapping is stored twice: `url:<code>` → original URL (forward) and
//! `reverse:<url>` → code (reverse). Both entries expire after the retention
//! window (30 days by default). Random shortening reuses an existing code for
//! the same URL; caller-chosen codes are rejected when taken.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{CreatePolicy, MappingService};
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::MappingStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryMappingStore, RedisMappingStore};
    pub use crate::state::AppState;
}
