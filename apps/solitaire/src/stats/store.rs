use parking_lot::Mutex;

use crate::errors::domain::DomainError;
use crate::stats::record::{GameOutcome, GameStats};

/// Where statistics live. Injected into the session rather than reached
/// through a global.
pub trait StatsStore: Send + Sync {
    fn load(&self) -> Result<GameStats, DomainError>;

    fn save(&self, stats: &GameStats) -> Result<(), DomainError>;

    /// Read-modify-write one outcome; returns the updated totals.
    fn record(&self, outcome: GameOutcome) -> Result<GameStats, DomainError> {
        let mut stats = self.load()?;
        stats.record(outcome);
        self.save(&stats)?;
        Ok(stats)
    }

    /// A deal already counted as lost was won after all.
    fn upgrade_to_win(&self, score: i32) -> Result<GameStats, DomainError> {
        let mut stats = self.load()?;
        stats.upgrade_to_win(score);
        self.save(&stats)?;
        Ok(stats)
    }
}

impl<S: StatsStore + ?Sized> StatsStore for &S {
    fn load(&self) -> Result<GameStats, DomainError> {
        (**self).load()
    }

    fn save(&self, stats: &GameStats) -> Result<(), DomainError> {
        (**self).save(stats)
    }

    fn record(&self, outcome: GameOutcome) -> Result<GameStats, DomainError> {
        (**self).record(outcome)
    }

    fn upgrade_to_win(&self, score: i32) -> Result<GameStats, DomainError> {
        (**self).upgrade_to_win(score)
    }
}

/// In-process store; shareable across threads.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    stats: Mutex<GameStats>,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(stats: GameStats) -> Self {
        Self {
            stats: Mutex::new(stats),
        }
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&self) -> Result<GameStats, DomainError> {
        Ok(*self.stats.lock())
    }

    fn save(&self, stats: &GameStats) -> Result<(), DomainError> {
        *self.stats.lock() = *stats;
        Ok(())
    }

    fn record(&self, outcome: GameOutcome) -> Result<GameStats, DomainError> {
        let mut guard = self.stats.lock();
        guard.record(outcome);
        Ok(*guard)
    }

    fn upgrade_to_win(&self, score: i32) -> Result<GameStats, DomainError> {
        let mut guard = self.stats.lock();
        guard.upgrade_to_win(score);
        Ok(*guard)
    }
}
