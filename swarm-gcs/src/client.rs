//! The facade client: one resolver + telemetry client shared by all watchers.

use std::sync::Arc;
use std::time::Duration;

use gcs_endpoint::{EndpointResolver, ResolverConfig};
use gcs_poll::{spawn_poller, PollHandle, PollUpdate};
use gcs_telemetry::{
    ArenaMatch, ArenaStats, BattleStats, BotConfig, GameState, StatsMap, TelemetryClient,
    TelemetryConfig, TrainingEpisode, TrainingStats,
};

use crate::GcsError;

/// Configuration for the SDK facade.
#[derive(Debug, Clone)]
pub struct GcsConfig {
    /// Endpoint resolution (cascade tiers, default URL, fetch timeout)
    pub resolver: ResolverConfig,

    /// Telemetry client (timeouts, retries, credentials)
    pub telemetry: TelemetryConfig,

    /// Poll interval for the live game-state screen.
    /// Default: 1 second
    pub live_interval: Duration,

    /// Poll interval for the slower-changing statistics screens.
    /// Default: 5 seconds
    pub stats_interval: Duration,
}

impl Default for GcsConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            telemetry: TelemetryConfig::default(),
            live_interval: Duration::from_secs(1),
            stats_interval: Duration::from_secs(5),
        }
    }
}

impl GcsConfig {
    /// Create a new GcsConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn with_intervals(mut self, live: Duration, stats: Duration) -> Self {
        self.live_interval = live;
        self.stats_interval = stats;
        self
    }
}

/// Generates one typed watcher method per telemetry query.
macro_rules! watch_method {
    ($(#[$doc:meta])* $name:ident, $accessor:ident, $payload:ty, $interval:ident) => {
        $(#[$doc])*
        pub fn $name<U>(&self, on_update: U) -> PollHandle
        where
            U: FnMut(PollUpdate<$payload>) + Send + 'static,
        {
            let client = self.telemetry.clone();
            spawn_poller(
                self.$interval,
                move || {
                    let client = client.clone();
                    async move { client.$accessor().await }
                },
                on_update,
            )
        }
    };
}

/// Entry point for the dashboard's presentation layer.
///
/// Owns the process-wide endpoint resolver and the telemetry client, and
/// spawns one polling loop per watched screen. All watchers share the
/// resolver's endpoint cache: an `invalidate` from one affects every
/// watcher's next resolution.
#[derive(Debug, Clone)]
pub struct GcsClient {
    resolver: Arc<EndpointResolver>,
    telemetry: TelemetryClient,
    live_interval: Duration,
    stats_interval: Duration,
}

impl GcsClient {
    pub fn new(config: GcsConfig) -> Self {
        let resolver = Arc::new(EndpointResolver::new(config.resolver));
        let telemetry = TelemetryClient::new(Arc::clone(&resolver), config.telemetry);

        Self {
            resolver,
            telemetry,
            live_interval: config.live_interval,
            stats_interval: config.stats_interval,
        }
    }

    /// Direct access to the telemetry client, for one-shot fetches outside a
    /// polling loop.
    pub fn telemetry(&self) -> &TelemetryClient {
        &self.telemetry
    }

    /// The shared endpoint resolver.
    pub fn resolver(&self) -> &Arc<EndpointResolver> {
        &self.resolver
    }

    /// User-triggered "retry connection": drop the cached endpoint so every
    /// watcher's next tick re-runs the resolution cascade.
    pub async fn refresh_endpoint(&self) {
        tracing::info!("endpoint refresh requested");
        self.resolver.invalidate().await;
    }

    /// Persist a base URL to the local store for future runs. Call
    /// [`refresh_endpoint`](Self::refresh_endpoint) afterwards to pick it up
    /// in the current process.
    pub async fn save_endpoint(&self, url: &str) -> Result<(), GcsError> {
        self.resolver.save(url).await?;
        Ok(())
    }

    watch_method!(
        /// Watch the live game state. Polls at the live interval (1 s by
        /// default).
        watch_game_state,
        game_state,
        GameState,
        live_interval
    );

    watch_method!(
        /// Watch the free-form combat statistics.
        watch_combat_stats,
        combat_stats,
        StatsMap,
        stats_interval
    );

    watch_method!(
        /// Watch the free-form learning-progress statistics.
        watch_learning_progress,
        learning_progress,
        StatsMap,
        stats_interval
    );

    watch_method!(
        /// Watch the aggregate battle record.
        watch_battle_stats,
        battle_stats,
        BattleStats,
        stats_interval
    );

    watch_method!(
        /// Watch the aggregate arena record.
        watch_arena_stats,
        arena_stats,
        ArenaStats,
        stats_interval
    );

    watch_method!(
        /// Watch the recent arena match history.
        watch_arena_matches,
        arena_matches,
        Vec<ArenaMatch>,
        stats_interval
    );

    watch_method!(
        /// Watch the aggregate training statistics.
        watch_training_stats,
        training_stats,
        TrainingStats,
        stats_interval
    );

    watch_method!(
        /// Watch the recent training episodes.
        watch_training_episodes,
        training_episodes,
        Vec<TrainingEpisode>,
        stats_interval
    );

    watch_method!(
        /// Watch the named bot configurations.
        watch_bot_configs,
        bot_configs,
        Vec<BotConfig>,
        stats_interval
    );
}
