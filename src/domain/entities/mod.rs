//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`], which is persisted as two
//! key-value entries (forward and reverse) by a
//! [`crate::domain::repositories::MappingStore`].

pub mod url_mapping;

pub use url_mapping::UrlMapping;
