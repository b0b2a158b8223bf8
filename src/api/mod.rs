//! REST API layer for HTTP request/response handling.
//!
//! Handlers are thin adapters: they validate the request body, call
//! [`crate::application::services::MappingService`], and shape the response.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
