//! The telemetry client: request construction, execution, and decoding.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use gcs_endpoint::EndpointResolver;

use crate::models::{
    ArenaMatch, ArenaStats, BattleStats, BotConfig, GameState, StatsMap, TrainingEpisode,
    TrainingStats,
};
use crate::query::Query;
use crate::result::{FailureReason, PollResult};
use crate::TelemetryConfig;

/// Client for the bot's telemetry endpoints.
///
/// Cheap to clone; all clones share the resolver (and therefore the endpoint
/// cache) and the underlying HTTP connection pool. One instance serves every
/// polling subscriber in the process.
///
/// The client holds no connection state of its own: deriving a UI-facing
/// connection status from successive results is the polling layer's job.
#[derive(Debug, Clone)]
pub struct TelemetryClient {
    resolver: Arc<EndpointResolver>,
    http: reqwest::Client,
    config: TelemetryConfig,
}

impl TelemetryClient {
    /// Create a client over a shared endpoint resolver.
    pub fn new(resolver: Arc<EndpointResolver>, config: TelemetryConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            resolver,
            http,
            config,
        }
    }

    /// The resolver this client reads its base URL from.
    pub fn resolver(&self) -> &Arc<EndpointResolver> {
        &self.resolver
    }

    /// Fetch one query and decode its payload.
    ///
    /// Resolves the base URL (cached after the first call), GETs
    /// `<base><path>`, and maps the outcome:
    /// - transport failure after retries -> `Failure(Transport)`
    /// - non-2xx status -> `Failure(Status)` (never retried)
    /// - 2xx with an empty body -> `Empty`
    /// - 2xx with a body -> decoded `Success`, or `Failure(Decode)` when the
    ///   body does not match `T`
    pub async fn fetch<T: DeserializeOwned>(&self, query: Query) -> PollResult<T> {
        let endpoint = self.resolver.resolve().await;
        let url = format!("{}{}", endpoint.base_url.trim_end_matches('/'), query.path());

        let response = match self.send_with_retry(&url).await {
            Ok(response) => response,
            Err(reason) => {
                tracing::debug!("fetch {} failed: {}", query, reason);
                return PollResult::Failure(reason);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("fetch {} returned HTTP {}", query, status);
            return PollResult::Failure(FailureReason::Status(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return PollResult::Failure(FailureReason::Transport(e.to_string())),
        };

        if body.trim().is_empty() {
            return PollResult::Empty;
        }

        match serde_json::from_str(&body) {
            Ok(payload) => PollResult::Success(payload),
            Err(e) => {
                tracing::debug!("fetch {} decode failed: {}", query, e);
                PollResult::Failure(FailureReason::Decode(e.to_string()))
            }
        }
    }

    /// Execute a GET, retrying transport-level failures only.
    ///
    /// An HTTP response of any status counts as a delivered request and is
    /// returned to the caller as-is.
    async fn send_with_retry(&self, url: &str) -> Result<reqwest::Response, FailureReason> {
        let mut attempt: u32 = 0;
        loop {
            let mut request = self.http.get(url);
            if let Some(credentials) = &self.config.credentials {
                request = request.basic_auth(&credentials.username, Some(&credentials.password));
            }

            match request.send().await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt >= self.config.retry_attempts {
                        return Err(FailureReason::Transport(e.to_string()));
                    }
                    attempt += 1;
                    tracing::debug!("transport failure on {} (retry {}): {}", url, attempt, e);
                }
            }
        }
    }

    // Typed accessors, one per dashboard screen.

    pub async fn game_state(&self) -> PollResult<GameState> {
        self.fetch(Query::GameState).await
    }

    pub async fn combat_stats(&self) -> PollResult<StatsMap> {
        self.fetch(Query::CombatStats).await
    }

    pub async fn learning_progress(&self) -> PollResult<StatsMap> {
        self.fetch(Query::LearningProgress).await
    }

    pub async fn battle_stats(&self) -> PollResult<BattleStats> {
        self.fetch(Query::BattleStats).await
    }

    pub async fn arena_stats(&self) -> PollResult<ArenaStats> {
        self.fetch(Query::ArenaStats).await
    }

    pub async fn arena_matches(&self) -> PollResult<Vec<ArenaMatch>> {
        self.fetch(Query::ArenaMatches).await
    }

    pub async fn training_stats(&self) -> PollResult<TrainingStats> {
        self.fetch(Query::TrainingStats).await
    }

    pub async fn training_episodes(&self) -> PollResult<Vec<TrainingEpisode>> {
        self.fetch(Query::TrainingEpisodes).await
    }

    pub async fn bot_configs(&self) -> PollResult<Vec<BotConfig>> {
        self.fetch(Query::BotConfigs).await
    }
}
