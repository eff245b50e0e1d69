// Proptest generators for domain types.
// Move generators deliberately include out-of-range piles and bad indices so
// rejections are exercised alongside legal play.

use proptest::prelude::*;

use crate::domain::actions::{Action, ActionOutcome, Destination, MoveRequest, Source};
use crate::domain::engine::Game;
use crate::domain::hints::find_hint;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

pub fn source() -> impl Strategy<Value = Source> {
    prop_oneof![
        Just(Source::Waste),
        (0usize..8, 0usize..14).prop_map(|(column, start)| Source::Tableau { column, start }),
    ]
}

pub fn destination() -> impl Strategy<Value = Destination> {
    prop_oneof![
        (0usize..8).prop_map(|column| Destination::Tableau { column }),
        (0usize..5).prop_map(|index| Destination::Foundation { index }),
    ]
}

pub fn move_request() -> impl Strategy<Value = MoveRequest> {
    (source(), destination()).prop_map(|(from, to)| MoveRequest { from, to })
}

/// One step of a scripted session.
#[derive(Debug, Clone)]
pub enum Step {
    Act(Action),
    /// Play whatever the engine currently suggests (or draw if nothing).
    FollowHint,
}

pub fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => Just(Step::FollowHint),
        3 => Just(Step::Act(Action::Draw)),
        2 => move_request().prop_map(|m| Step::Act(Action::Move(m))),
        1 => Just(Step::Act(Action::Undo)),
        1 => Just(Step::Act(Action::Redo)),
        1 => Just(Step::Act(Action::AutoComplete)),
        1 => Just(Step::Act(Action::Hint)),
    ]
}

pub fn steps(max: usize) -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(step(), 0..=max)
}

/// Apply a step to a live game.
pub fn run_step(game: &mut Game, step: &Step) -> ActionOutcome {
    match step {
        Step::Act(action) => game.dispatch(*action),
        Step::FollowHint => match find_hint(game.board()) {
            Some(hint) => game.dispatch(Action::Move(hint.as_move())),
            None => game.dispatch(Action::Draw),
        },
    }
}
