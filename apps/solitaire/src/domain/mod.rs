//! Domain layer: pure Klondike rules, state and the game engine.

pub mod actions;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod engine;
pub mod hints;
pub mod history;
pub mod invariants;
pub mod piles;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
#[cfg(test)]
pub(crate) mod test_state_helpers;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_auto_complete;
#[cfg(test)]
mod tests_props_engine;
#[cfg(test)]
mod tests_undo_redo;

// Re-exports for ergonomics
pub use actions::{Action, ActionOutcome, Destination, Hint, MoveRejection, MoveRequest, Source};
pub use cards_parsing::parse_cards;
pub use cards_types::{rank_value, Card, Color, FacedCard, GameVariant, Rank, Suit};
pub use dealing::deal_klondike;
pub use deck::{create_deck, full_deck, shuffle};
pub use engine::{validate_move, Game};
pub use game_transition::{derive_game_transitions, GameTransition};
pub use piles::{Board, Pile};
pub use rules::{is_valid_foundation_move, is_valid_run, is_valid_tableau_move};
pub use scoring::ScoringRules;
pub use seed_derivation::{daily_seed, derive_batch_seed, today_seed};
pub use snapshot::GameSnapshot;
pub use state::{GameState, GameStatus};
