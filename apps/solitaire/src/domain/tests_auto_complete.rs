use crate::domain::actions::{Action, ActionOutcome};
use crate::domain::piles::Board;
use crate::domain::rules::CARDS_PER_SUIT;
use crate::domain::test_state_helpers::{
    board_from, completed_foundations, foundation_up_to, game_at, one_move_from_win, pile,
    with_rest_in_stock,
};
use crate::domain::Rank;

/// Hearts need TH, JH, QH, KH: TH and JH are stacked in column 0 (TH on
/// top), KH sits in column 1 and QH is on the waste. Clearing them takes
/// three passes.
fn hearts_to_finish() -> Board {
    let mut foundations = completed_foundations();
    foundations[0] = foundation_up_to(0, Rank::Nine);
    let mut board = Board {
        foundations,
        ..Board::default()
    };
    board.waste = pile(&["QH"]);
    board.tableau[0] = pile(&["JH", "TH"]);
    board.tableau[1] = pile(&["KH"]);
    board
}

#[test]
fn single_move_to_victory() {
    let mut game = game_at(one_move_from_win());
    assert!(game.can_auto_complete());

    assert_eq!(game.dispatch(Action::AutoComplete), ActionOutcome::Applied);
    assert!(game.status().won);
    assert_eq!(game.score(), 40);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.undo_depth(), 1);
    assert!(!game.can_auto_complete());
}

#[test]
fn repeated_passes_until_nothing_moves() {
    let mut game = game_at(hearts_to_finish());

    assert_eq!(game.dispatch(Action::AutoComplete), ActionOutcome::Applied);
    assert!(game.status().won);
    assert_eq!(game.board().foundations[0].len(), CARDS_PER_SUIT);
    assert!(game.board().waste.is_empty());
    assert_eq!(game.score(), 4 * 40);
    assert_eq!(game.move_count(), 4);
    assert_eq!(game.undo_depth(), 1, "the sweep is a single undo step");

    assert_eq!(game.dispatch(Action::Undo), ActionOutcome::Applied);
    assert_eq!(game.board(), &hearts_to_finish());
    assert_eq!(game.score(), -15);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn sweep_reveals_and_continues() {
    let board = with_rest_in_stock(board_from(
        &[],
        &[],
        &[&["#2H", "AH"], &[], &[], &[], &[], &[], &[]],
        &[&[], &[], &[], &[]],
    ));
    let mut game = game_at(board);

    assert!(game.dispatch(Action::AutoComplete).is_applied());
    assert_eq!(game.board().foundations[0].len(), 2);
    assert!(game.board().tableau[0].is_empty());
    assert_eq!(game.move_count(), 2);
}

#[test]
fn nothing_to_move_is_a_noop_and_idempotent() {
    let board = with_rest_in_stock(board_from(
        &[],
        &["5C"],
        &[&["#AS", "9D"], &[], &[], &[], &[], &[], &[]],
        &[&[], &[], &[], &[]],
    ));
    let mut game = game_at(board);
    let before = game.state().clone();
    assert!(!game.can_auto_complete());

    for _ in 0..2 {
        assert_eq!(game.dispatch(Action::AutoComplete), ActionOutcome::NoOp);
        assert_eq!(game.state(), &before);
        assert!(!game.can_undo());
    }
}

#[test]
fn auto_complete_on_a_won_game_is_a_noop() {
    let mut game = game_at(one_move_from_win());
    game.dispatch(Action::AutoComplete);
    let score = game.score();
    assert_eq!(game.dispatch(Action::AutoComplete), ActionOutcome::NoOp);
    assert_eq!(game.score(), score);
    assert_eq!(game.undo_depth(), 1);
}
