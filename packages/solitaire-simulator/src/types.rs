//! Shared types for the simulator.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as games finish.
    Jsonl,
    /// A single JSON array written at the end.
    Json,
}

/// Why a simulated game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Won,
    Lost,
    /// The step budget ran out.
    StepLimit,
    /// A full pass through the stock changed nothing.
    Stalled,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Won => "won",
            StopReason::Lost => "lost",
            StopReason::StepLimit => "step_limit",
            StopReason::Stalled => "stalled",
        }
    }
}
