//! Hostname resolution for URL validation.
//!
//! Provides a [`HostResolver`] trait with one production implementation:
//! - [`SystemHostResolver`] - resolves through the operating system

mod resolver;
mod system_resolver;

pub use resolver::{HostResolver, ResolveError};
pub use system_resolver::SystemHostResolver;

#[cfg(test)]
pub use resolver::MockHostResolver;
