//! Persistent win/loss statistics and the session that feeds them.

pub mod file_store;
pub mod record;
pub mod session;
pub mod store;

pub use file_store::JsonFileStatsStore;
pub use record::{GameOutcome, GameStats};
pub use session::{GameSession, SessionStep};
pub use store::{MemoryStatsStore, StatsStore};
