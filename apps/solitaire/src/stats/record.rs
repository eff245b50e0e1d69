use serde::{Deserialize, Serialize};

use crate::domain::game_transition::GameTransition;

/// How a finished deal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameOutcome {
    Won { score: i32 },
    Lost { score: i32 },
}

impl GameOutcome {
    pub fn score(&self) -> i32 {
        match self {
            GameOutcome::Won { score } | GameOutcome::Lost { score } => *score,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, GameOutcome::Won { .. })
    }
}

impl From<GameTransition> for GameOutcome {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::GameWon { score } => GameOutcome::Won { score },
            GameTransition::GameLost { score } => GameOutcome::Lost { score },
        }
    }
}

/// Persisted aggregate, stored as `{"gamesPlayed", "gamesWon", "bestScore"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub best_score: i32,
}

impl GameStats {
    /// Count a finished deal. Only wins can raise the best score.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played = self.games_played.saturating_add(1);
        if let GameOutcome::Won { score } = outcome {
            self.games_won = self.games_won.saturating_add(1);
            self.best_score = self.best_score.max(score);
        }
    }

    /// Turn an already counted loss of the same deal into a win.
    pub fn upgrade_to_win(&mut self, score: i32) {
        self.games_won = self.games_won.saturating_add(1).min(self.games_played);
        self.best_score = self.best_score.max(score);
    }

    /// Fraction of games won, 0.0 when none were played.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played)
    }
}
