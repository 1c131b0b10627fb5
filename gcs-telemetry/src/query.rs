//! The dashboard's logical telemetry queries and their request paths.

/// A logical telemetry query, mapped to a GET path relative to the resolved
/// base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Live game state (resources, supply, unit counts)
    GameState,
    /// Free-form combat statistics map
    CombatStats,
    /// Free-form learning-progress statistics map
    LearningProgress,
    /// Aggregate battle win/loss record
    BattleStats,
    /// Aggregate ladder-arena record
    ArenaStats,
    /// Recent arena match history
    ArenaMatches,
    /// Aggregate training statistics
    TrainingStats,
    /// Recent training episode records
    TrainingEpisodes,
    /// Named bot configurations with the active flag
    BotConfigs,
}

impl Query {
    /// Request path for this query, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Query::GameState => "/api/game-state",
            Query::CombatStats => "/api/combat-stats",
            Query::LearningProgress => "/api/learning-progress",
            Query::BattleStats => "/api/battle-stats",
            Query::ArenaStats => "/api/arena-stats",
            Query::ArenaMatches => "/api/arena-matches",
            Query::TrainingStats => "/api/training-stats",
            Query::TrainingEpisodes => "/api/training-episodes",
            Query::BotConfigs => "/api/bot-configs",
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        let queries = [
            Query::GameState,
            Query::CombatStats,
            Query::LearningProgress,
            Query::BattleStats,
            Query::ArenaStats,
            Query::ArenaMatches,
            Query::TrainingStats,
            Query::TrainingEpisodes,
            Query::BotConfigs,
        ];
        for query in queries {
            assert!(query.path().starts_with("/api/"), "{}", query);
        }
    }
}
