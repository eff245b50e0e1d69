//! A game wired to a statistics store.

use crate::domain::actions::{Action, ActionOutcome};
use crate::domain::engine::Game;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::errors::domain::DomainError;
use crate::logging::game_events;
use crate::stats::record::{GameOutcome, GameStats};
use crate::stats::store::StatsStore;

/// What one session dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    pub outcome: ActionOutcome,
    pub transitions: Vec<GameTransition>,
}

/// Records each deal exactly once.
///
/// Undoing out of a finished position and finishing again does not count a
/// second time. A loss that is undone and then won is turned into a win.
/// `NewGame` starts a fresh deal and re-arms recording.
pub struct GameSession<S: StatsStore> {
    game: Game,
    store: S,
    recorded: Option<GameOutcome>,
}

impl<S: StatsStore> GameSession<S> {
    pub fn new(game: Game, store: S) -> Self {
        Self {
            game,
            store,
            recorded: None,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> SessionStep {
        let before = self.game.status();
        let outcome = self.game.dispatch(action);

        if matches!(action, Action::NewGame { .. }) && outcome.is_applied() {
            self.recorded = None;
        }

        let after = self.game.status();
        let transitions = derive_game_transitions(before, after, self.game.score());

        if let Some(first) = transitions.first().copied() {
            self.on_finished(first);
        }

        SessionStep {
            outcome,
            transitions,
        }
    }

    fn on_finished(&mut self, transition: GameTransition) {
        let (seed, moves) = (self.game.seed(), self.game.move_count());
        match transition {
            GameTransition::GameWon { score } => game_events::game_won(seed, score, moves),
            GameTransition::GameLost { score } => game_events::game_lost(seed, score, moves),
        }

        let outcome = GameOutcome::from(transition);
        let (operation, result) = match (self.recorded, outcome) {
            (None, _) => ("record", self.store.record(outcome)),
            (Some(GameOutcome::Lost { .. }), GameOutcome::Won { score }) => {
                ("upgrade_to_win", self.store.upgrade_to_win(score))
            }
            _ => return,
        };
        self.recorded = Some(outcome);
        if let Err(err) = result {
            game_events::stats_store_failed(operation, &err);
        }
    }

    pub fn stats(&self) -> Result<GameStats, DomainError> {
        self.store.load()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the current deal has already been counted.
    pub fn is_recorded(&self) -> bool {
        self.recorded.is_some()
    }

    /// The outcome the store currently holds for this deal.
    pub fn recorded_outcome(&self) -> Option<GameOutcome> {
        self.recorded
    }

    pub fn into_parts(self) -> (Game, S) {
        (self.game, self.store)
    }
}
