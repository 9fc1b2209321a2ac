//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Process-lifetime mapping store backed by a concurrent hash map.
///
/// Keys are short identifiers, values the original URLs they redirect to.
/// The map's entry API makes the collision check and the insert one atomic
/// step, so two parallel requests can never claim the same identifier.
pub struct InMemoryMappingRepository {
    mappings: DashMap<String, String>,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            mappings: DashMap::new(),
        }
    }
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError> {
        match self.mappings.entry(mapping.short_id) {
            Entry::Occupied(entry) => Err(AppError::ShortIdTaken(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(mapping.original_url);
                Ok(())
            }
        }
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self
            .mappings
            .get(short_id)
            .map(|url| Mapping::new(short_id.to_owned(), url.clone())))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.mappings.len() as u64)
    }
}
