use serde::{Deserialize, Serialize};

use crate::domain::state::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: the last card reached the foundations.
    GameWon { score: i32 },

    /// Edge-triggered: stock and waste exhausted with no legal move left.
    GameLost { score: i32 },
}

/// Derive terminal transitions from before/after status.
///
/// Only a false→true edge yields a transition, so reading a finished game
/// twice never reports it twice.
pub fn derive_game_transitions(
    before: GameStatus,
    after: GameStatus,
    score: i32,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if !before.won && after.won {
        transitions.push(GameTransition::GameWon { score });
    }

    if !before.lost && after.lost {
        transitions.push(GameTransition::GameLost { score });
    }

    transitions
}
