use std::sync::Arc;

use crate::application::services::{MappingService, UrlValidator};
use crate::infrastructure::persistence::InMemoryMappingRepository;

/// Shared state injected into every handler.
///
/// Cloning is cheap: all fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub url_validator: Arc<UrlValidator>,
    pub mapping_service: Arc<MappingService<InMemoryMappingRepository>>,
}

impl AppState {
    /// Creates application state from its services.
    pub fn new(
        url_validator: Arc<UrlValidator>,
        mapping_service: Arc<MappingService<InMemoryMappingRepository>>,
    ) -> Self {
        Self {
            url_validator,
            mapping_service,
        }
    }
}
