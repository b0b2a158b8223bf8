//! Domain layer containing the mapping entity and storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::UrlMapping`] data structure
//! - [`repositories`] - The [`repositories::MappingStore`] trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The mapping protocol itself lives in
//! [`crate::application::services::MappingService`].

pub mod entities;
pub mod repositories;
