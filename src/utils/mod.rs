//! Utility functions shared across the application.
//!
//! - [`short_id`] - Short identifier generation

pub mod short_id;
