//! Deck construction and shuffling.

use rand::seq::SliceRandom;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, FacedCard, Rank, Suit};

/// All 52 cards in canonical order: hearts, diamonds, clubs, spades; A..K.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fresh face-down deck, shuffled. `Some(seed)` is reproducible.
pub fn create_deck(seed: Option<u64>) -> Vec<FacedCard> {
    let mut deck: Vec<FacedCard> = full_deck().into_iter().map(FacedCard::face_down).collect();
    shuffle(&mut deck, seed);
    deck
}

/// Fisher-Yates over the whole slice.
///
/// With a seed the permutation depends only on the seed, which is what the
/// daily challenge relies on. Without one the thread RNG is used.
pub fn shuffle<T>(deck: &mut [T], seed: Option<u64>) {
    match seed {
        Some(seed) => shuffle_with_seed(deck, seed),
        None => deck.shuffle(&mut rand::rng()),
    }
}

/// Deterministic generator for seeded shuffles.
///
/// SplitMix64: well distributed and stable across platforms and crate
/// versions, so a given seed keeps producing the same deal.
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform in `0..max`.
    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Values >= limit would bias the modulo; draw again.
        let limit = u64::MAX - (u64::MAX % m);

        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

fn shuffle_with_seed<T>(deck: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_range(i + 1);
        deck.swap(i, j);
    }
}
