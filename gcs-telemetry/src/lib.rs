//! Typed HTTP telemetry client for the swarm-gcs dashboard
//!
//! This crate talks to the bot's telemetry server: it resolves the base URL
//! through the shared [`gcs_endpoint::EndpointResolver`], issues authenticated
//! GET requests for the dashboard's queries, and decodes the JSON payloads
//! into typed models.
//!
//! Every fetch produces exactly one [`PollResult`] variant - success with a
//! payload, empty (the server answered but has nothing to show, e.g. no game
//! in progress), or a typed failure. The client never raises: transport
//! errors, bad statuses, and malformed bodies all surface as
//! [`FailureReason`] values for the polling layer to fold into a connection
//! state.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use gcs_endpoint::{EndpointResolver, ResolverConfig};
//! use gcs_telemetry::{PollResult, TelemetryClient, TelemetryConfig};
//!
//! # async fn demo() {
//! let resolver = Arc::new(EndpointResolver::new(ResolverConfig::default()));
//! let client = TelemetryClient::new(resolver, TelemetryConfig::default());
//!
//! match client.game_state().await {
//!     PollResult::Success(state) => println!("minerals: {}", state.minerals),
//!     PollResult::Empty => println!("no game in progress"),
//!     PollResult::Failure(reason) => println!("fetch failed: {}", reason),
//! }
//! # }
//! ```

mod client;
pub mod models;
mod query;
mod result;

pub use client::TelemetryClient;
pub use models::{
    ArenaMatch, ArenaStats, BattleStats, BotConfig, GameState, StatsMap, TrainingEpisode,
    TrainingStats,
};
pub use query::Query;
pub use result::{FailureReason, PollResult};

use std::time::Duration;

/// Static basic-auth credentials for the telemetry server.
///
/// Presence of this value is what gates the Authorization header; an
/// unauthenticated deployment simply configures `None`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Configuration for the telemetry client.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// TCP connect timeout per request.
    /// Default: 15 seconds
    pub connect_timeout: Duration,

    /// Total timeout per request (connect + read).
    /// Default: 20 seconds
    pub request_timeout: Duration,

    /// Extra attempts after a transport-level failure. HTTP error statuses
    /// are never retried.
    /// Default: 2
    pub retry_attempts: u32,

    /// Optional basic-auth credentials.
    /// Default: none
    pub credentials: Option<Credentials>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(20),
            retry_attempts: 2,
            credentials: None,
        }
    }
}

impl TelemetryConfig {
    /// Create a new TelemetryConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }
}
