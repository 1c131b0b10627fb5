//! Server endpoint resolution for the swarm-gcs telemetry client
//!
//! The bot's telemetry server has no fixed address: depending on the
//! deployment it is announced through a remote config resource (a plaintext
//! URL hosted on a gist or paste service), remembered from a previous run, or
//! simply the developer-setup loopback. This crate resolves the base URL
//! through that cascade and memoizes the winner so the polling path never
//! pays a config round-trip per tick.
//!
//! # Quick Start
//!
//! ```no_run
//! use gcs_endpoint::{EndpointResolver, ResolverConfig};
//!
//! # async fn demo() {
//! let resolver = EndpointResolver::new(ResolverConfig::default());
//!
//! let endpoint = resolver.resolve().await;
//! println!("Talking to {} (via {:?})", endpoint.base_url, endpoint.tier);
//!
//! // Force the next resolve() to re-run the cascade, e.g. after a
//! // user-triggered "retry connection" action.
//! resolver.invalidate().await;
//! # }
//! ```

mod error;
mod resolver;
pub mod store;

pub use error::{EndpointError, Result};
pub use resolver::EndpointResolver;

use std::path::PathBuf;
use std::time::Duration;

/// Source tier an endpoint was resolved from.
///
/// Tiers are consulted in declaration order; the first one that yields an
/// acceptable value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointTier {
    /// Fetched from the remote config resource (plaintext URL body)
    RemoteConfig,
    /// Read from the locally persisted value of a previous resolution
    LocalCache,
    /// Fixed default, used when no other tier is available
    Default,
}

/// A resolved telemetry server endpoint.
///
/// Immutable once constructed; a new resolution produces a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    /// Base URL of the telemetry server, e.g. "http://10.0.2.2:8000"
    pub base_url: String,
    /// Which cascade tier produced this value
    pub tier: EndpointTier,
}

/// Configuration for the endpoint resolver.
///
/// All values are injected at construction; nothing is hard-coded per call
/// site. The defaults match the standard developer/emulator setup.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Remote config resource returning a plaintext base URL.
    /// `None` disables the remote-config tier.
    pub remote_config_url: Option<String>,

    /// Location of the locally persisted base URL.
    /// `None` disables the local-cache tier.
    pub store_path: Option<PathBuf>,

    /// Fixed fallback endpoint.
    /// Default: "http://10.0.2.2:8000" (emulator loopback)
    pub default_url: String,

    /// Timeout for the remote config fetch.
    /// Default: 10 seconds
    pub fetch_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            remote_config_url: None,
            store_path: store::default_store_path(),
            default_url: "http://10.0.2.2:8000".to_string(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

impl ResolverConfig {
    /// Create a new ResolverConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_config(mut self, url: impl Into<String>) -> Self {
        self.remote_config_url = Some(url.into());
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Disable the local-cache tier entirely
    pub fn without_store(mut self) -> Self {
        self.store_path = None;
        self
    }

    pub fn with_default_url(mut self, url: impl Into<String>) -> Self {
        self.default_url = url.into();
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert!(config.remote_config_url.is_none());
        assert_eq!(config.default_url, "http://10.0.2.2:8000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ResolverConfig::new()
            .with_remote_config("https://gist.example/raw/server_url.txt")
            .with_default_url("http://127.0.0.1:9000")
            .with_fetch_timeout(Duration::from_secs(3))
            .without_store();

        assert_eq!(
            config.remote_config_url.as_deref(),
            Some("https://gist.example/raw/server_url.txt")
        );
        assert_eq!(config.default_url, "http://127.0.0.1:9000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert!(config.store_path.is_none());
    }
}
