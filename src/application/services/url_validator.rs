//! Submitted URL validation.

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::infrastructure::dns::HostResolver;

/// Decides whether a candidate string is usable as a redirect target.
///
/// Validation is two-step: parse the candidate as an absolute URL carrying
/// a host, then check that the host resolves on the network. Both failure
/// kinds collapse to the same `false`; callers never learn which step
/// rejected.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    /// Creates a validator backed by the given resolver.
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Returns whether `candidate` parses as a URL whose host resolves.
    ///
    /// Unparseable and host-less candidates are rejected without touching
    /// the network. Resolution failures are logged and reported as a plain
    /// `false`, indistinguishable from parse failures. A single lookup is
    /// made per call; transient DNS failures are not retried.
    pub async fn validate(&self, candidate: &str) -> bool {
        let url = match Url::parse(candidate) {
            Ok(url) => url,
            Err(e) => {
                debug!(candidate, error = %e, "rejected unparseable url");
                return false;
            }
        };

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => {
                debug!(candidate, "rejected url without a host");
                return false;
            }
        };

        match self.resolver.resolve(host).await {
            Ok(()) => true,
            Err(e) => {
                warn!(host, error = %e, "host resolution failed");
                false
            }
        }
    }
}
