//! Undo/redo stacks.
//!
//! Entries are [`GameState`] values whose piles share storage with the live
//! state, so recording one costs a handful of reference-count bumps. The past
//! stack is capped; the oldest entries fall off first.

use std::collections::VecDeque;

use crate::domain::state::GameState;

#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<GameState>,
    future: Vec<GameState>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record the state preceding a new action; the redo stack is dropped.
    pub fn record(&mut self, before: GameState) {
        self.past.push_back(before);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back: returns the state to restore and parks `current` for redo.
    pub fn undo(&mut self, current: GameState) -> Option<GameState> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward: returns the state to restore and parks `current` for undo.
    pub fn redo(&mut self, current: GameState) -> Option<GameState> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
