use tracing::{info, warn};

use crate::errors::domain::DomainError;

/// A deal reached the foundations.
pub fn game_won(seed: u64, score: i32, moves: u32) {
    info!(event = "GAME_WON", seed, score, moves, "Game won");
}

/// A deal ran out of moves.
pub fn game_lost(seed: u64, score: i32, moves: u32) {
    info!(event = "GAME_LOST", seed, score, moves, "Game lost");
}

/// Statistics could not be read or written; play continues.
pub fn stats_store_failed(operation: &str, error: &DomainError) {
    warn!(
        event = "STATS_STORE_FAILED",
        operation,
        error = %error,
        "Statistics store failure"
    );
}
