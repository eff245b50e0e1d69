//! Seed derivation for reproducible deals.
//!
//! The daily challenge seed is the calendar date written as a number, so
//! everyone playing on the same day gets the same shuffle.

use time::{Date, OffsetDateTime};

/// `year * 10000 + month * 100 + day`, e.g. 2024-03-15 → 20240315.
pub fn daily_seed(date: Date) -> u64 {
    let year = date.year().max(0) as u64;
    let month = u8::from(date.month()) as u64;
    let day = date.day() as u64;
    year * 10_000 + month * 100 + day
}

/// Seed for today's challenge (UTC calendar date).
pub fn today_seed() -> u64 {
    daily_seed(OffsetDateTime::now_utc().date())
}

/// Seed for the `game_no`-th game of a batch started from `base`.
pub fn derive_batch_seed(base: u64, game_no: u64) -> u64 {
    base.wrapping_add(game_no)
}
