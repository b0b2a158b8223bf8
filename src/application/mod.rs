//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::MappingStore`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Short code lifecycle and
//!   forward/reverse consistency

pub mod services;
