use std::env;
use std::path::PathBuf;

use crate::domain::scoring::ScoringRules;
use crate::errors::domain::DomainError;

pub const DEFAULT_HISTORY_LIMIT: usize = 1000;
pub const DEFAULT_STATS_PATH: &str = "solitaire-stats.json";

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of undo steps kept.
    pub history_limit: usize,
    pub scoring: ScoringRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            scoring: ScoringRules::default(),
        }
    }
}

impl EngineConfig {
    /// Read `SOLITAIRE_HISTORY_LIMIT` (positive integer, defaults to 1000).
    pub fn from_env() -> Result<Self, DomainError> {
        Ok(Self {
            history_limit: history_limit()?,
            scoring: ScoringRules::default(),
        })
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

fn history_limit() -> Result<usize, DomainError> {
    let Ok(raw) = env::var("SOLITAIRE_HISTORY_LIMIT") else {
        return Ok(DEFAULT_HISTORY_LIMIT);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(DomainError::config(format!(
            "SOLITAIRE_HISTORY_LIMIT must be a positive integer, got '{raw}'"
        ))),
        Ok(limit) => Ok(limit),
    }
}

/// Location of the statistics file (`SOLITAIRE_STATS_PATH`).
pub fn stats_path() -> PathBuf {
    env::var("SOLITAIRE_STATS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH))
}
