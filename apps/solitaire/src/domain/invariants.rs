//! Card conservation: every transition keeps exactly one copy of each card.

use std::collections::HashSet;

use crate::domain::piles::Board;
use crate::domain::rules::{DECK_SIZE, FOUNDATION_SUITS};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Ok iff the board holds the 52 distinct cards of a deck.
pub fn check_card_conservation(board: &Board) -> Result<(), DomainError> {
    let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);
    for faced in board.all_cards() {
        if !seen.insert(faced.card) {
            return Err(DomainError::validation(
                ValidationKind::CardConservation,
                format!("duplicate card {}", faced.card),
            ));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::CardConservation,
            format!("expected {DECK_SIZE} cards on the board, found {}", seen.len()),
        ));
    }
    Ok(())
}

/// Structural checks a well-formed board always passes.
pub fn check_layout(board: &Board) -> Result<(), DomainError> {
    let bad = |detail: String| DomainError::validation(ValidationKind::InvalidSnapshot, detail);

    if board.stock.cards().iter().any(|c| c.face_up) {
        return Err(bad("stock cards must be face-down".into()));
    }
    if board.waste.cards().iter().any(|c| !c.face_up) {
        return Err(bad("waste cards must be face-up".into()));
    }
    for (i, column) in board.tableau.iter().enumerate() {
        let first_up = column.first_face_up();
        if column.cards()[first_up..].iter().any(|c| !c.face_up) {
            return Err(bad(format!("tableau {i}: face-down card above a face-up one")));
        }
        if !column.is_empty() && first_up == column.len() {
            return Err(bad(format!("tableau {i}: top card is face-down")));
        }
    }
    for (i, foundation) in board.foundations.iter().enumerate() {
        let suit = FOUNDATION_SUITS[i];
        for (pos, faced) in foundation.cards().iter().enumerate() {
            if faced.card.suit != suit || faced.card.value() as usize != pos + 1 || !faced.face_up {
                return Err(bad(format!("foundation {i}: {} out of sequence", faced.card)));
            }
        }
    }
    Ok(())
}
