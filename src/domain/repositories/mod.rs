//! Storage trait definitions for the domain layer.
//!
//! The domain depends only on [`MappingStore`]; concrete backends live in
//! `crate::infrastructure::store`. A `mockall` mock is generated for unit
//! tests of the mapping protocol.

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError, StoreResult};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
