//! Score deltas for each kind of action.

use serde::{Deserialize, Serialize};

/// Points awarded (or taken) per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Stock card turned onto the waste.
    pub draw: i32,
    /// Waste turned back into the stock.
    pub recycle: i32,
    /// Per card moved onto a tableau column.
    pub to_tableau: i32,
    /// Per card moved onto a foundation.
    pub to_foundation: i32,
    /// Applied to the restored score on undo.
    pub undo: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            draw: 5,
            recycle: -100,
            to_tableau: 10,
            to_foundation: 40,
            undo: -15,
        }
    }
}

impl ScoringRules {
    pub fn tableau_move(&self, cards: usize) -> i32 {
        self.to_tableau.saturating_mul(cards as i32)
    }

    pub fn foundation_move(&self, cards: usize) -> i32 {
        self.to_foundation.saturating_mul(cards as i32)
    }
}
