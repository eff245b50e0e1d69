//! Everything a caller can ask the engine to do, and what it answers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Card;

/// Where a moved run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pile", rename_all = "snake_case")]
pub enum Source {
    /// The top waste card.
    Waste,
    /// Cards `start..` of a tableau column.
    Tableau { column: usize, start: usize },
}

/// Where a moved run goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pile", rename_all = "snake_case")]
pub enum Destination {
    Tableau { column: usize },
    Foundation { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: Source,
    pub to: Destination,
}

impl MoveRequest {
    pub fn new(from: Source, to: Destination) -> Self {
        Self { from, to }
    }

    pub fn waste_to_tableau(column: usize) -> Self {
        Self::new(Source::Waste, Destination::Tableau { column })
    }

    pub fn waste_to_foundation(index: usize) -> Self {
        Self::new(Source::Waste, Destination::Foundation { index })
    }

    pub fn tableau_to_tableau(column: usize, start: usize, dest: usize) -> Self {
        Self::new(
            Source::Tableau { column, start },
            Destination::Tableau { column: dest },
        )
    }

    pub fn tableau_to_foundation(column: usize, start: usize, index: usize) -> Self {
        Self::new(
            Source::Tableau { column, start },
            Destination::Foundation { index },
        )
    }
}

/// Closed set of engine inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    NewGame {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    Draw,
    Move(MoveRequest),
    Undo,
    Redo,
    AutoComplete,
    Hint,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::NewGame { .. } => "new_game",
            Action::Draw => "draw",
            Action::Move(_) => "move",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::AutoComplete => "auto_complete",
            Action::Hint => "hint",
        }
    }
}

/// Why a move was refused. State is unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRejection {
    #[error("no such pile")]
    NoSuchPile,
    #[error("source pile has no card at that position")]
    EmptySource,
    #[error("face-down cards cannot be moved")]
    FaceDown,
    #[error("cards do not form a descending alternating-color run")]
    BrokenRun,
    #[error("source and destination are the same column")]
    SameColumn,
    #[error("card cannot be placed there")]
    IllegalPlacement,
    #[error("foundations take one card at a time")]
    FoundationTakesOneCard,
}

/// Advisory move suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub from: Source,
    pub to: Destination,
    /// Card leading the suggested run.
    pub card: Card,
    /// Number of cards the move would carry.
    pub count: usize,
}

impl Hint {
    pub fn as_move(&self) -> MoveRequest {
        MoveRequest::new(self.from, self.to)
    }
}

/// Result of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// State changed.
    Applied,
    /// Nothing to do (empty stock and waste, empty history, ...).
    NoOp,
    /// Illegal move; state unchanged.
    Rejected(MoveRejection),
    /// Answer to [`Action::Hint`].
    Hint(Option<Hint>),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            ActionOutcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
