use serde::{Deserialize, Serialize};

use crate::domain::hints::has_legal_move;
use crate::domain::piles::Board;

/// Snapshot unit kept in the undo history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: i32,
    pub move_count: u32,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: 0,
            move_count: 0,
        }
    }

    /// Same cards in the same places with the same faces. Score and move count ignored.
    pub fn same_layout(&self, other: &GameState) -> bool {
        self.board == other.board
    }
}

/// Derived terminal flags. Advisory only: actions stay well-defined either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub won: bool,
    pub lost: bool,
}

impl GameStatus {
    pub fn of(board: &Board) -> Self {
        let won = board.is_won();
        let lost = !won && board.stock.is_empty() && board.waste.is_empty() && !has_legal_move(board);
        Self { won, lost }
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }
}
