//! Typed payload models for the telemetry endpoints.
//!
//! Field names mirror the server's wire format, which mixes snake_case and
//! camelCase; renames pin the exact names so the structs can stay idiomatic.
//! Every struct is `#[serde(default)]`: the server omits fields it has no
//! data for and a partial record is still a usable record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Free-form key/value statistics, used by the combat-stats and
/// learning-progress endpoints.
pub type StatsMap = HashMap<String, serde_json::Value>;

/// Live state of the game in progress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub is_running: bool,
    pub minerals: u32,
    pub vespene: u32,
    #[serde(rename = "supplyUsed")]
    pub supply_used: u32,
    #[serde(rename = "supplyCap")]
    pub supply_cap: u32,
    /// Unit type name to live count
    pub units: HashMap<String, u32>,
    #[serde(rename = "winRate")]
    pub win_rate: f64,
}

impl GameState {
    /// Total live unit count across all types.
    pub fn total_units(&self) -> u32 {
        self.units.values().sum()
    }
}

/// Aggregate battle record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleStats {
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

/// Aggregate ladder-arena record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaStats {
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

/// One ladder-arena match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaMatch {
    pub opponent_name: String,
    /// "Win" or "Loss"
    pub result: String,
    /// Server-formatted timestamp, displayed verbatim
    pub played_at: String,
}

/// Aggregate training statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingStats {
    pub total_episodes: u32,
    pub average_reward: f32,
    pub win_rate: f64,
}

/// One reinforcement-learning training episode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingEpisode {
    pub episode_number: u32,
    pub reward: f32,
    pub duration_seconds: u32,
    pub result: String,
}

/// A named bot configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub bot_name: String,
    /// e.g. "RuleBased", "RL"
    pub bot_type: String,
    pub race: String,
    pub is_active: bool,
}
