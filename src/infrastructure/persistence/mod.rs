//! In-memory repository implementations.
//!
//! Concrete implementations of domain repository traits. Storage is
//! process-local and lives for the lifetime of the process; nothing is
//! persisted across restarts.
//!
//! # Repositories
//!
//! - [`InMemoryMappingRepository`] - Mapping storage and lookup

pub mod memory_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
