//! Mapping creation and resolution service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::short_id::generate_short_id;

/// Service owning the create/resolve contract of the mapping store.
///
/// Allocates short identifiers with collision retry and serves lookups.
/// Callers are expected to validate URLs before handing them in; this
/// service never re-validates.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a mapping for `original_url` under a fresh short identifier.
    ///
    /// # Identifier Allocation
    ///
    /// Draws random 1-4 digit identifiers and relies on the repository's
    /// atomic insert to detect collisions, retrying up to 100 times. The
    /// identifier space holds 11,110 values, so the budget only runs out
    /// when the store is nearly full.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CapacityExhausted`] when no free identifier was
    /// found within the retry budget.
    pub async fn create(&self, original_url: String) -> Result<Mapping, AppError> {
        const MAX_ATTEMPTS: usize = 100;

        for attempt in 1..=MAX_ATTEMPTS {
            let mapping = Mapping::new(generate_short_id(), original_url.clone());

            match self.repository.insert(mapping.clone()).await {
                Ok(()) => {
                    debug!(short_id = %mapping.short_id, attempt, "mapping created");
                    return Ok(mapping);
                }
                Err(AppError::ShortIdTaken(short_id)) => {
                    debug!(short_id = %short_id, attempt, "short id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(attempts = MAX_ATTEMPTS, "short identifier space exhausted");
        Err(AppError::CapacityExhausted)
    }

    /// Resolves a short identifier to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier was never allocated.
    /// A miss is an expected outcome, not a fault.
    pub async fn resolve(&self, short_id: &str) -> Result<Mapping, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Counts live mappings.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }
}
