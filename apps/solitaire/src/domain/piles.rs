//! Piles and the board.
//!
//! A [`Pile`] is a copy-on-write vector: cloning a [`Board`] for the undo
//! history only bumps reference counts, and the next mutation copies just
//! the piles it touches.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{CARDS_PER_SUIT, FOUNDATIONS, TABLEAU_COLUMNS};
use crate::domain::{Card, FacedCard};

/// Ordered cards, top = last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile(Arc<Vec<FacedCard>>);

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<FacedCard>) -> Self {
        Self(Arc::new(cards))
    }

    pub fn cards(&self) -> &[FacedCard] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn top(&self) -> Option<FacedCard> {
        self.0.last().copied()
    }

    pub fn top_card(&self) -> Option<Card> {
        self.top().map(|c| c.card)
    }

    /// Index of the first face-up card, or `len()` when none are.
    pub fn first_face_up(&self) -> usize {
        self.0
            .iter()
            .position(|c| c.face_up)
            .unwrap_or(self.0.len())
    }

    /// Whether two piles share storage (no copy has happened yet).
    pub fn shares_storage(&self, other: &Pile) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn push(&mut self, card: FacedCard) {
        Arc::make_mut(&mut self.0).push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<FacedCard> {
        if self.0.is_empty() {
            return None;
        }
        Arc::make_mut(&mut self.0).pop()
    }

    pub(crate) fn extend(&mut self, cards: &[FacedCard]) {
        Arc::make_mut(&mut self.0).extend_from_slice(cards);
    }

    /// Removes and returns `start..`.
    pub(crate) fn split_off(&mut self, start: usize) -> Vec<FacedCard> {
        Arc::make_mut(&mut self.0).split_off(start)
    }

    /// Reveal rule: the new top card of a tableau column turns face-up.
    pub(crate) fn reveal_top(&mut self) -> bool {
        match self.0.last() {
            Some(top) if !top.face_up => {
                if let Some(top) = Arc::make_mut(&mut self.0).last_mut() {
                    top.face_up = true;
                }
                true
            }
            _ => false,
        }
    }

    pub(crate) fn take_all(&mut self) -> Vec<FacedCard> {
        std::mem::take(Arc::make_mut(&mut self.0))
    }
}

/// Every pile of a Klondike layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub stock: Pile,
    pub waste: Pile,
    pub tableau: [Pile; TABLEAU_COLUMNS],
    pub foundations: [Pile; FOUNDATIONS],
}

impl Board {
    /// All four foundations complete.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == CARDS_PER_SUIT)
    }

    pub fn foundation_total(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Every card on the board, in pile order.
    pub fn all_cards(&self) -> impl Iterator<Item = &FacedCard> + '_ {
        self.stock
            .cards()
            .iter()
            .chain(self.waste.cards())
            .chain(self.tableau.iter().flat_map(|p| p.cards()))
            .chain(self.foundations.iter().flat_map(|p| p.cards()))
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }
}
