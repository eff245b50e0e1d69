use crate::config::EngineConfig;
use crate::domain::actions::{Action, ActionOutcome};
use crate::domain::engine::Game;
use crate::domain::hints::find_hint;

fn play_some(game: &mut Game, steps: usize) -> usize {
    let mut applied = 0;
    for _ in 0..steps {
        let action = match find_hint(game.board()) {
            Some(hint) => Action::Move(hint.as_move()),
            None => Action::Draw,
        };
        if game.dispatch(action).is_applied() {
            applied += 1;
        }
    }
    applied
}

#[test]
fn undo_restores_previous_state_with_penalty() {
    let mut game = Game::new(Some(11)).unwrap();
    let initial = game.board().clone();

    game.dispatch(Action::Draw);
    assert_eq!(game.score(), 5);

    assert_eq!(game.dispatch(Action::Undo), ActionOutcome::Applied);
    assert_eq!(game.board(), &initial);
    assert_eq!(game.score(), -15);
    assert!(game.can_redo());
}

#[test]
fn redo_restores_the_stored_score() {
    let mut game = Game::new(Some(11)).unwrap();
    game.dispatch(Action::Draw);
    let after_draw = game.state().clone();

    game.dispatch(Action::Undo);
    assert_eq!(game.dispatch(Action::Redo), ActionOutcome::Applied);
    assert_eq!(game.state(), &after_draw);
    assert_eq!(game.score(), 5);
    assert!(!game.can_redo());
}

#[test]
fn undoing_everything_returns_to_the_deal() {
    let mut game = Game::new(Some(2024)).unwrap();
    let initial = game.board().clone();

    let applied = play_some(&mut game, 30);
    assert!(applied > 0);
    for _ in 0..applied {
        assert!(game.dispatch(Action::Undo).is_applied());
    }
    assert_eq!(game.board(), &initial);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.dispatch(Action::Undo), ActionOutcome::NoOp);
}

#[test]
fn redo_replays_a_full_undo() {
    let mut game = Game::new(Some(77)).unwrap();
    let applied = play_some(&mut game, 20);
    let end = game.state().clone();

    for _ in 0..applied {
        game.dispatch(Action::Undo);
    }
    for _ in 0..applied {
        assert!(game.dispatch(Action::Redo).is_applied());
    }
    assert_eq!(game.state(), &end);
}

#[test]
fn a_fresh_action_discards_redo() {
    let mut game = Game::new(Some(3)).unwrap();
    game.dispatch(Action::Draw);
    game.dispatch(Action::Undo);
    assert!(game.can_redo());

    game.dispatch(Action::Draw);
    assert!(!game.can_redo());
    assert_eq!(game.dispatch(Action::Redo), ActionOutcome::NoOp);
}

#[test]
fn empty_history_is_a_noop() {
    let mut game = Game::new(Some(3)).unwrap();
    let before = game.state().clone();
    assert_eq!(game.dispatch(Action::Undo), ActionOutcome::NoOp);
    assert_eq!(game.dispatch(Action::Redo), ActionOutcome::NoOp);
    assert_eq!(game.state(), &before);
}

#[test]
fn history_is_capped() {
    let config = EngineConfig::default().with_history_limit(3);
    let mut game = Game::with_config(Some(3), config).unwrap();
    for _ in 0..5 {
        game.dispatch(Action::Draw);
    }
    assert_eq!(game.undo_depth(), 3);
    for _ in 0..3 {
        assert!(game.dispatch(Action::Undo).is_applied());
    }
    assert_eq!(game.dispatch(Action::Undo), ActionOutcome::NoOp);
    assert_eq!(game.board().waste.len(), 2);
}

#[test]
fn history_shares_untouched_piles() {
    let mut game = Game::new(Some(9)).unwrap();
    let before = game.board().clone();

    game.dispatch(Action::Draw);
    for (now, then) in game.board().tableau.iter().zip(&before.tableau) {
        assert!(now.shares_storage(then));
    }
    assert!(!game.board().stock.shares_storage(&before.stock));
}
