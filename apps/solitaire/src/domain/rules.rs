//! Klondike legality predicates and layout constants.
//!
//! Every higher-level check (move validation, hints, auto-complete, loss
//! detection) goes through these functions.

use crate::domain::{Card, FacedCard, Rank, Suit};

pub const DECK_SIZE: usize = 52;
pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATIONS: usize = 4;
/// 52 - (1 + 2 + ... + 7)
pub const STOCK_SIZE: usize = 24;
pub const CARDS_PER_SUIT: usize = 13;

/// Foundation `i` only accepts `FOUNDATION_SUITS[i]`.
pub const FOUNDATION_SUITS: [Suit; FOUNDATIONS] = Suit::ALL;

pub fn foundation_index(suit: Suit) -> usize {
    match suit {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    }
}

/// Can `moving` be placed on a tableau column whose top card is `target`?
pub fn is_valid_tableau_move(moving: Card, target: Option<Card>) -> bool {
    match target {
        None => moving.rank == Rank::King,
        Some(target) => {
            moving.color() != target.color() && moving.value() + 1 == target.value()
        }
    }
}

/// Can `moving` be placed on the `foundation_suit` foundation whose top is `target`?
pub fn is_valid_foundation_move(moving: Card, target: Option<Card>, foundation_suit: Suit) -> bool {
    if moving.suit != foundation_suit {
        return false;
    }
    match target {
        None => moving.rank == Rank::Ace,
        Some(target) => moving.value() == target.value() + 1,
    }
}

/// A run is movable as a unit: all face-up, descending, alternating colors.
pub fn is_valid_run(cards: &[FacedCard]) -> bool {
    if cards.is_empty() || cards.iter().any(|c| !c.face_up) {
        return false;
    }
    cards
        .windows(2)
        .all(|pair| is_valid_tableau_move(pair[1].card, Some(pair[0].card)))
}
