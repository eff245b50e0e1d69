//! Property-based tests for the engine: conservation, determinism and
//! atomicity over random action sequences.

use proptest::prelude::*;

use crate::domain::actions::{Action, ActionOutcome};
use crate::domain::engine::Game;
use crate::domain::hints::find_hint;
use crate::domain::invariants::{check_card_conservation, check_layout};
use crate::domain::piles::Pile;
use crate::domain::rules::STOCK_SIZE;
use crate::domain::test_gens::{run_step, Step};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every reachable board holds the 52 cards exactly once and
    /// stays well-formed.
    #[test]
    fn prop_cards_are_conserved(seed in test_gens::seed(), steps in test_gens::steps(120)) {
        let mut game = Game::new(Some(seed)).unwrap();
        for step in &steps {
            run_step(&mut game, step);
            prop_assert!(check_card_conservation(game.board()).is_ok(), "after {:?}", step);
            prop_assert!(check_layout(game.board()).is_ok(), "after {:?}", step);
        }
    }

    /// Property: same seed and same inputs give the same game.
    #[test]
    fn prop_replay_is_deterministic(seed in test_gens::seed(), steps in test_gens::steps(80)) {
        let mut a = Game::new(Some(seed)).unwrap();
        let mut b = Game::new(Some(seed)).unwrap();
        for step in &steps {
            let out_a = run_step(&mut a, step);
            let out_b = run_step(&mut b, step);
            prop_assert_eq!(out_a, out_b);
        }
        prop_assert_eq!(a.state(), b.state());
        prop_assert_eq!(a.status(), b.status());
    }

    /// Property: a rejected or no-op action leaves state and history alone.
    #[test]
    fn prop_refused_actions_are_atomic(seed in test_gens::seed(), steps in test_gens::steps(60)) {
        let mut game = Game::new(Some(seed)).unwrap();
        for step in &steps {
            let before = game.state().clone();
            let depth = game.undo_depth();
            let outcome = run_step(&mut game, step);
            if matches!(outcome, ActionOutcome::Rejected(_) | ActionOutcome::NoOp | ActionOutcome::Hint(_)) {
                prop_assert_eq!(game.state(), &before);
                prop_assert_eq!(game.undo_depth(), depth);
            }
        }
    }

    /// Property: whatever the hint suggests is accepted.
    #[test]
    fn prop_hints_are_playable(seed in test_gens::seed(), steps in test_gens::steps(60)) {
        let mut game = Game::new(Some(seed)).unwrap();
        for step in &steps {
            run_step(&mut game, step);
            if let Some(hint) = find_hint(game.board()) {
                let mut probe = game.clone();
                prop_assert_eq!(probe.dispatch(Action::Move(hint.as_move())), ActionOutcome::Applied);
            }
        }
    }

    /// Property: any seed deals [1..7] columns, a 24-card stock and one
    /// face-up card per column.
    #[test]
    fn prop_deal_shape(seed in test_gens::seed()) {
        let game = Game::new(Some(seed)).unwrap();
        let board = game.board();
        let lens: Vec<usize> = board.tableau.iter().map(Pile::len).collect();
        prop_assert_eq!(lens, vec![1, 2, 3, 4, 5, 6, 7]);
        prop_assert_eq!(board.stock.len(), STOCK_SIZE);
        for column in &board.tableau {
            prop_assert_eq!(column.cards().iter().filter(|c| c.face_up).count(), 1);
        }
    }

    /// Property: undoing every applied step restores the deal.
    #[test]
    fn prop_undo_unwinds_to_the_deal(seed in test_gens::seed(), steps in test_gens::steps(40)) {
        let mut game = Game::new(Some(seed)).unwrap();
        let initial = game.board().clone();
        // Only forward steps, so the history depth equals the applied count.
        let forward: Vec<Step> = steps
            .into_iter()
            .filter(|s| !matches!(s, Step::Act(Action::Undo | Action::Redo | Action::NewGame { .. })))
            .collect();
        let mut applied = 0;
        for step in &forward {
            if run_step(&mut game, step).is_applied() {
                applied += 1;
            }
        }
        for _ in 0..applied {
            prop_assert!(game.dispatch(Action::Undo).is_applied());
        }
        prop_assert_eq!(game.board(), &initial);
    }
}
