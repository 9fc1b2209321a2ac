//! Host resolution through the operating system resolver.

use async_trait::async_trait;
use tokio::net;

use super::resolver::{HostResolver, ResolveError};

/// Resolver backed by the operating system's `getaddrinfo` path.
///
/// Inherits whatever timeout and retry behavior the platform resolver has;
/// no additional policy is layered on top.
pub struct SystemHostResolver;

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        // lookup_host wants a port; it plays no part in the address lookup.
        let mut addresses =
            net::lookup_host((host, 0))
                .await
                .map_err(|source| ResolveError::Lookup {
                    host: host.to_owned(),
                    source,
                })?;

        if addresses.next().is_none() {
            return Err(ResolveError::NoAddresses {
                host: host.to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_localhost() {
        let resolver = SystemHostResolver;

        assert!(resolver.resolve("localhost").await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_nonexistent_host() {
        let resolver = SystemHostResolver;

        let result = resolver.resolve("this-host-does-not-exist.invalid").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_resolves_public_host() {
        let resolver = SystemHostResolver;

        assert!(resolver.resolve("www.google.com").await.is_ok());
    }
}
