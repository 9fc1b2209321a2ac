//! Business logic services for the application layer.

pub mod mapping_service;
pub mod url_validator;

pub use mapping_service::MappingService;
pub use url_validator::UrlValidator;
