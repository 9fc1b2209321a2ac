//! Host resolver trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during host resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The lookup itself failed (NXDOMAIN, resolver unreachable, timeout).
    #[error("lookup for '{host}' failed: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// The lookup succeeded but returned no addresses.
    #[error("lookup for '{host}' returned no addresses")]
    NoAddresses { host: String },
}

/// Trait for resolving hostnames to network addresses.
///
/// The validator only cares whether a host resolves at all, so success
/// carries no addresses. Implementations must be thread-safe.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemHostResolver`] - operating system resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to at least one network address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the lookup fails or yields nothing.
    /// No retries are attempted; a transient failure and a permanent one
    /// look the same to callers.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
