//! Mapping store backends.
//!
//! Provides two [`crate::domain::repositories::MappingStore`] implementations:
//! - [`RedisMappingStore`] - Production Redis backend with `SET EX`
//! - [`InMemoryMappingStore`] - Expiring in-process maps for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryMappingStore;
pub use redis_store::{FORWARD_PREFIX, REVERSE_PREFIX, RedisMappingStore};
