pub mod engine;

pub use engine::{stats_path, EngineConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_STATS_PATH};
