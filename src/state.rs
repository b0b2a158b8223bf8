//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::domain::repositories::MappingStore;

/// Type-erased mapping service so the backend can be chosen at startup.
pub type DynMappingService = MappingService<dyn MappingStore>;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<DynMappingService>,
}

impl AppState {
    pub fn new(mapping_service: Arc<DynMappingService>) -> Self {
        Self { mapping_service }
    }
}
