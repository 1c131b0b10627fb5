//! # swarm-gcs - Telemetry client SDK for the mobile dashboard
//!
//! The dashboard's screens each watch one telemetry query and render
//! whatever connection state and payload the latest poll produced:
//!
//! ```rust,no_run
//! use swarm_gcs::{GcsClient, GcsConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = GcsClient::new(GcsConfig::default());
//!
//!     // One watcher per visible screen; the callback runs once per tick.
//!     let handle = client.watch_game_state(|update| {
//!         println!("{}", update.state);
//!         if let Some(state) = update.payload {
//!             println!("minerals: {} vespene: {}", state.minerals, state.vespene);
//!         }
//!     });
//!
//!     // User taps "retry connection": re-run the endpoint cascade for
//!     // every watcher's next resolution.
//!     client.refresh_endpoint().await;
//!
//!     // Screen dismissed.
//!     handle.shutdown().await;
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! swarm-gcs (facade: GcsClient, per-query watchers)
//!     |
//! gcs-poll (cancellable polling loops -> ConnectionState)
//!     |
//! gcs-telemetry (typed HTTP client -> PollResult)
//!     |
//! gcs-endpoint (base URL cascade + process-wide cache)
//! ```
//!
//! The endpoint cache is the only state shared between watchers; everything
//! else - credentials, timeouts, the HTTP connection pool - is read-only
//! configuration safe for concurrent use.

mod client;
mod error;
pub mod logging;

pub use client::{GcsClient, GcsConfig};
pub use error::GcsError;

// Re-export the public vocabulary of the member crates.
pub use gcs_endpoint::{EndpointResolver, EndpointTier, ResolverConfig, ServerEndpoint};
pub use gcs_poll::{ConnectionState, PollHandle, PollUpdate};
pub use gcs_telemetry::{
    ArenaMatch, ArenaStats, BattleStats, BotConfig, Credentials, FailureReason, GameState,
    PollResult, Query, StatsMap, TelemetryClient, TelemetryConfig, TrainingEpisode, TrainingStats,
};
