//! Core card-related types: Card, Rank, Suit, Color, FacedCard

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// Ace is low: `Rank::Ace < Rank::Two < ... < Rank::King`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value 1..=13 (A=1, K=13).
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(Rank::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

/// Total order over ranks used by every legality check.
pub fn rank_value(rank: Rank) -> u8 {
    rank.value()
}

/// Immutable card identity. Face state lives in [`FacedCard`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn color(self) -> Color {
        self.suit.color()
    }

    pub fn value(self) -> u8 {
        self.rank.value()
    }
}

// Note: Ord on Card is only for stable sorting: suit order H<D<C<S then rank order.
// Legality checks go through `rules`, never through this ordering.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A card as it sits in a pile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FacedCard {
    pub card: Card,
    pub face_up: bool,
}

impl FacedCard {
    pub const fn face_down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }

    pub const fn face_up(card: Card) -> Self {
        Self {
            card,
            face_up: true,
        }
    }

    pub fn flipped_up(self) -> Self {
        Self::face_up(self.card)
    }

    pub fn flipped_down(self) -> Self {
        Self::face_down(self.card)
    }
}

/// Playable variants. Only Klondike has rules behind it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    #[default]
    Klondike,
    Spider,
    FreeCell,
}

impl GameVariant {
    pub fn is_playable(self) -> bool {
        matches!(self, GameVariant::Klondike)
    }
}
