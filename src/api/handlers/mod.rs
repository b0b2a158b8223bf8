//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod delete;
pub mod health;
pub mod replace;
pub mod resolve;
pub mod shorten;

pub use delete::delete_handler;
pub use health::health_handler;
pub use replace::replace_handler;
pub use resolve::resolve_handler;
pub use shorten::{shorten_random_handler, shorten_specific_handler};
