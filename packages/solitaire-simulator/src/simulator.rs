//! Headless autoplay over the engine's public action set.

use solitaire::domain::hints::legal_moves;
use solitaire::{Action, ActionOutcome, Board, Game, GameSession, GameTransition, Source, StatsStore};
use tracing::{debug, trace};

use crate::types::StopReason;

/// Result of simulating one deal.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub stop_reason: StopReason,
    pub score: i32,
    pub moves: u32,
    pub draws: u32,
    pub recycles: u32,
    pub auto_completes: u32,
    pub steps: u32,
    pub foundation_cards: usize,
    pub transitions: Vec<GameTransition>,
}

impl GameResult {
    pub fn won(&self) -> bool {
        self.stop_reason == StopReason::Won
    }
}

/// Policy per step: auto-complete if anything can go up, else the first
/// productive legal move in hint order, else draw.
pub struct Simulator {
    max_steps: u32,
}

impl Simulator {
    pub fn new(max_steps: u32) -> Self {
        Self {
            max_steps: max_steps.max(1),
        }
    }

    pub fn simulate_game<S: StatsStore>(&self, session: &mut GameSession<S>) -> GameResult {
        let mut result = GameResult {
            seed: session.game().seed(),
            stop_reason: StopReason::StepLimit,
            score: 0,
            moves: 0,
            draws: 0,
            recycles: 0,
            auto_completes: 0,
            steps: 0,
            foundation_cards: 0,
            transitions: Vec::new(),
        };
        let mut progress_at_recycle: Option<Progress> = None;

        while result.steps < self.max_steps {
            let status = session.game().status();
            if status.won {
                result.stop_reason = StopReason::Won;
                break;
            }
            if status.lost {
                result.stop_reason = StopReason::Lost;
                break;
            }

            let action = choose_action(session.game());
            let recycling =
                matches!(action, Action::Draw) && session.game().board().stock.is_empty();
            if recycling {
                let now = Progress::of(session.game().board());
                if progress_at_recycle == Some(now) {
                    result.stop_reason = StopReason::Stalled;
                    break;
                }
                progress_at_recycle = Some(now);
            }

            let step = session.dispatch(action);
            result.steps += 1;
            trace!(action = action.name(), outcome = ?step.outcome, "simulator step");
            result.transitions.extend(step.transitions);

            match (step.outcome, action) {
                (ActionOutcome::Applied, Action::Draw) if recycling => result.recycles += 1,
                (ActionOutcome::Applied, Action::Draw) => result.draws += 1,
                (ActionOutcome::Applied, Action::AutoComplete) => result.auto_completes += 1,
                (ActionOutcome::Applied, _) => {}
                (other, _) => {
                    // Nothing to draw and nothing to play: the status check
                    // above will report the loss.
                    debug!(?other, "policy action did not apply");
                    let status = session.game().status();
                    result.stop_reason = if status.lost {
                        StopReason::Lost
                    } else {
                        StopReason::Stalled
                    };
                    break;
                }
            }
        }

        // The loop may also end right after the winning step.
        let status = session.game().status();
        if status.won {
            result.stop_reason = StopReason::Won;
        } else if status.lost {
            result.stop_reason = StopReason::Lost;
        }

        let game = session.game();
        result.score = game.score();
        result.moves = game.move_count();
        result.foundation_cards = game.board().foundation_total();
        result
    }
}

/// Next action for `game` under the autoplay policy.
///
/// Tableau-to-tableau moves are only taken when they carry the whole face-up
/// run, which always reveals a card or empties a column; partial-run moves
/// can shuttle between two columns forever.
pub fn choose_action(game: &Game) -> Action {
    if game.can_auto_complete() {
        return Action::AutoComplete;
    }
    let board = game.board();
    legal_moves(board)
        .into_iter()
        .find(|hint| match hint.from {
            Source::Waste => true,
            Source::Tableau { column, start } => {
                start == board.tableau[column].first_face_up()
            }
        })
        .map(|hint| Action::Move(hint.as_move()))
        .unwrap_or(Action::Draw)
}

/// Monotone measures of how far a deal has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Progress {
    foundation: usize,
    hidden: usize,
    stock_and_waste: usize,
}

impl Progress {
    fn of(board: &Board) -> Self {
        Self {
            foundation: board.foundation_total(),
            hidden: board.tableau.iter().map(|p| p.first_face_up()).sum(),
            stock_and_waste: board.stock.len() + board.waste.len(),
        }
    }
}
