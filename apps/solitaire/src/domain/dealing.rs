//! Deterministic Klondike deal.

use std::collections::HashSet;

use crate::domain::piles::{Board, Pile};
use crate::domain::rules::{DECK_SIZE, TABLEAU_COLUMNS};
use crate::domain::{Card, FacedCard};
use crate::errors::domain::{DomainError, ValidationKind};

/// Lay out a shuffled deck.
///
/// Cards are taken from the front of `deck`. Round `r` gives one card to each
/// column `r..7`; the card a column receives in its own round is its last and
/// the only face-up one, so column `i` ends with `i + 1` cards. The 24 cards
/// left become the stock in deck order, face-down.
pub fn deal_klondike(deck: Vec<FacedCard>) -> Result<Board, DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeck,
            format!("deck must hold {DECK_SIZE} cards, got {}", deck.len()),
        ));
    }
    let unique: HashSet<Card> = deck.iter().map(|c| c.card).collect();
    if unique.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeck,
            "deck contains duplicate cards",
        ));
    }

    let mut cards = deck.into_iter();
    let mut columns: [Vec<FacedCard>; TABLEAU_COLUMNS] = Default::default();
    for round in 0..TABLEAU_COLUMNS {
        for (col, column) in columns.iter_mut().enumerate().skip(round) {
            let Some(card) = cards.next() else {
                return Err(DomainError::validation(
                    ValidationKind::InvalidDeck,
                    "deck ran out during the tableau deal",
                ));
            };
            column.push(FacedCard {
                card: card.card,
                face_up: col == round,
            });
        }
    }

    let stock: Vec<FacedCard> = cards.map(|c| c.flipped_down()).collect();

    Ok(Board {
        stock: Pile::from_cards(stock),
        waste: Pile::new(),
        tableau: columns.map(Pile::from_cards),
        foundations: Default::default(),
    })
}
