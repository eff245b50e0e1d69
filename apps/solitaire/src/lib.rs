#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod stats;


// Re-exports for public API
pub use config::{stats_path, EngineConfig};
pub use domain::{
    Action, ActionOutcome, Board, Card, Destination, FacedCard, Game, GameSnapshot, GameState,
    GameStatus, GameTransition, GameVariant, Hint, MoveRejection, MoveRequest, Pile, Rank,
    ScoringRules, Source, Suit,
};
pub use errors::{DomainError, InfraErrorKind, ValidationKind};
pub use logging::{init_tracing, init_tracing_with_default, LogFormat};
pub use stats::{GameOutcome, GameSession, GameStats, JsonFileStatsStore, MemoryStatsStore, StatsStore};

// Prelude for test convenience
pub mod prelude {
    pub use super::config::{stats_path, EngineConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_STATS_PATH};
    pub use super::domain::*;
    pub use super::errors::{DomainError, InfraErrorKind, ValidationKind};
    pub use super::stats::{
        GameOutcome, GameSession, GameStats, JsonFileStatsStore, MemoryStatsStore, SessionStep,
        StatsStore,
    };
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
