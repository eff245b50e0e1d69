//! Serialisable read-only view of a game.

use serde::{Deserialize, Serialize};

use crate::domain::actions::Hint;
use crate::domain::piles::Board;
use crate::domain::GameVariant;

/// Everything a presentation layer needs to draw the table and enable its
/// controls. Produced by `Game::snapshot`, accepted back by `Game::restore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub variant: GameVariant,
    pub seed: u64,
    pub board: Board,
    pub score: i32,
    pub move_count: u32,
    pub won: bool,
    pub lost: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_auto_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_hint: Option<Hint>,
}
