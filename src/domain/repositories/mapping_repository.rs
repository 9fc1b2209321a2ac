//! Repository trait for short URL mapping data access.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the mapping store.
///
/// The store owns the full collection of mappings: every insert and lookup
/// goes through this trait, nothing else touches the collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - concurrent in-memory map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/handler_shorten.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping under its short identifier.
    ///
    /// The check-and-insert must be atomic: two concurrent inserts with the
    /// same `short_id` may not both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortIdTaken`] if the identifier is already in use.
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Mapping>, AppError>;

    /// Counts live mappings.
    async fn count(&self) -> Result<u64, AppError>;
}
