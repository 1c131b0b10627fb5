//! Cascade resolution and the process-wide endpoint cache.
//!
//! The resolver consults its tiers in a fixed order:
//! 1. Remote config resource (plaintext body holding a base URL)
//! 2. Locally persisted value from a previous run
//! 3. Fixed default
//!
//! Tier failures never escape `resolve()` - a fetch error, a non-2xx status,
//! or a malformed body just moves the cascade along. The winning endpoint is
//! cached in memory and returned verbatim until `invalidate()` is called.

use tokio::sync::Mutex;

use crate::error::{EndpointError, Result};
use crate::store;
use crate::{EndpointTier, ResolverConfig, ServerEndpoint};

/// Resolves and caches the telemetry server base URL.
///
/// One resolver instance is shared by every polling subscriber in the
/// process; the cache it guards is the only state they share. Concurrent
/// first-time resolutions are serialized on the cache lock, so the cascade
/// runs at most once per cache epoch and all callers converge on the same
/// `ServerEndpoint`.
#[derive(Debug)]
pub struct EndpointResolver {
    config: ResolverConfig,
    http: reqwest::Client,

    /// Cached resolution. Held across the whole cascade so a second caller
    /// waits for the first instead of racing a redundant fetch.
    cache: Mutex<Option<ServerEndpoint>>,
}

impl EndpointResolver {
    /// Create a resolver with the given configuration.
    ///
    /// The HTTP client used for the remote-config tier carries the configured
    /// fetch timeout; resolution can therefore block for at most that long
    /// before falling through.
    pub fn new(config: ResolverConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .connect_timeout(config.fetch_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config,
            http,
            cache: Mutex::new(None),
        }
    }

    /// Resolve the current base URL.
    ///
    /// Returns the cached endpoint when one exists; otherwise runs the
    /// cascade, caches the winner, and returns it. Never fails: the default
    /// tier always yields a value.
    pub async fn resolve(&self) -> ServerEndpoint {
        let mut cache = self.cache.lock().await;
        if let Some(endpoint) = cache.as_ref() {
            return endpoint.clone();
        }

        let endpoint = self.run_cascade().await;
        tracing::debug!(
            "resolved endpoint {} via {:?}",
            endpoint.base_url,
            endpoint.tier
        );
        *cache = Some(endpoint.clone());
        endpoint
    }

    /// Clear the in-memory cached endpoint.
    ///
    /// The next `resolve()` re-runs the full cascade. Affects every
    /// subscriber sharing this resolver, e.g. a manual "retry connection"
    /// action invalidates for the whole process.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        *cache = None;
        tracing::debug!("endpoint cache invalidated");
    }

    /// Return the cached endpoint without resolving, if one exists.
    pub async fn cached(&self) -> Option<ServerEndpoint> {
        self.cache.lock().await.clone()
    }

    /// Persist a base URL to the local-cache tier.
    ///
    /// Takes effect for future process runs (and for this one only after an
    /// `invalidate()`); the current cached resolution is left untouched.
    pub async fn save(&self, url: &str) -> Result<()> {
        let path = self
            .config
            .store_path
            .as_deref()
            .ok_or(EndpointError::StoreDisabled)?;
        store::write(path, url).await
    }

    async fn run_cascade(&self) -> ServerEndpoint {
        if let Some(config_url) = &self.config.remote_config_url {
            if let Some(base_url) = self.fetch_remote(config_url).await {
                return ServerEndpoint {
                    base_url,
                    tier: EndpointTier::RemoteConfig,
                };
            }
        }

        if let Some(path) = &self.config.store_path {
            if let Some(value) = store::read(path).await {
                if is_acceptable(&value) {
                    return ServerEndpoint {
                        base_url: value,
                        tier: EndpointTier::LocalCache,
                    };
                }
                tracing::debug!("persisted endpoint value rejected: {}", value);
            }
        }

        ServerEndpoint {
            base_url: self.config.default_url.clone(),
            tier: EndpointTier::Default,
        }
    }

    /// Fetch the remote config resource and validate its body.
    ///
    /// Any failure mode (transport, status, malformed value) is swallowed so
    /// the cascade continues.
    async fn fetch_remote(&self, config_url: &str) -> Option<String> {
        let response = match self.http.get(config_url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("remote config fetch failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("remote config returned HTTP {}", response.status());
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("remote config body unreadable: {}", e);
                return None;
            }
        };

        let value = body.trim();
        if is_acceptable(value) {
            Some(value.to_string())
        } else {
            tracing::debug!("remote config body rejected: {:?}", value);
            None
        }
    }
}

/// A value is acceptable when it is non-empty and carries a recognized URL
/// scheme. No further validation on purpose; reachability is the client's
/// problem.
fn is_acceptable(value: &str) -> bool {
    !value.is_empty() && (value.starts_with("http://") || value.starts_with("https://"))
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
