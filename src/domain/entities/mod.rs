//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Mapping`] - A short-identifier to original-URL association
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod mapping;

pub use mapping::Mapping;
