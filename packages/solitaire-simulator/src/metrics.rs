//! Per-game metrics written by the simulator.

use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::StopReason;

/// Complete record for one simulated deal.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_no: u32,
    pub seed: u64,
    pub timestamp: String,
    pub stop_reason: StopReason,
    pub won: bool,
    pub score: i32,
    pub moves: u32,
    pub draws: u32,
    pub recycles: u32,
    pub auto_completes: u32,
    pub foundation_cards: usize,
    pub steps: u32,
    pub duration_ms: f64,
}

pub fn build_game_metrics(game_no: u32, result: &GameResult, duration_ms: f64) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    GameMetrics {
        game_no,
        seed: result.seed,
        timestamp,
        stop_reason: result.stop_reason,
        won: result.won(),
        score: result.score,
        moves: result.moves,
        draws: result.draws,
        recycles: result.recycles,
        auto_completes: result.auto_completes,
        foundation_cards: result.foundation_cards,
        steps: result.steps,
        duration_ms,
    }
}

/// Flat row for the CSV summary.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_no: u32,
    pub seed: u64,
    pub stop_reason: &'static str,
    pub won: bool,
    pub score: i32,
    pub moves: u32,
    pub draws: u32,
    pub recycles: u32,
    pub foundation_cards: usize,
    pub duration_ms: f64,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_no: metrics.game_no,
            seed: metrics.seed,
            stop_reason: metrics.stop_reason.as_str(),
            won: metrics.won,
            score: metrics.score,
            moves: metrics.moves,
            draws: metrics.draws,
            recycles: metrics.recycles,
            foundation_cards: metrics.foundation_cards,
            duration_ms: metrics.duration_ms,
        }
    }
}
