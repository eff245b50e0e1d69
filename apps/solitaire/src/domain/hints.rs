//! Legal-move scanning: hints, loss detection and auto-complete targets.

use std::ops::ControlFlow;

use crate::domain::actions::{Destination, Hint, Source};
use crate::domain::piles::Board;
use crate::domain::rules::{
    foundation_index, is_valid_foundation_move, is_valid_run, is_valid_tableau_move,
    FOUNDATION_SUITS, TABLEAU_COLUMNS,
};
use crate::domain::Card;

/// First legal move in priority order, or `None` when the position is stuck
/// (drawing from the stock is not considered).
pub fn find_hint(board: &Board) -> Option<Hint> {
    let mut found = None;
    scan_moves(board, |hint| {
        found = Some(hint);
        ControlFlow::Break(())
    });
    found
}

/// Every legal move, in hint priority order.
pub fn legal_moves(board: &Board) -> Vec<Hint> {
    let mut moves = Vec::new();
    scan_moves(board, |hint| {
        moves.push(hint);
        ControlFlow::Continue(())
    });
    moves
}

pub fn has_legal_move(board: &Board) -> bool {
    find_hint(board).is_some()
}

/// Foundation that would accept `card` right now.
pub fn foundation_target(board: &Board, card: Card) -> Option<usize> {
    let index = foundation_index(card.suit);
    let top = board.foundations[index].top_card();
    is_valid_foundation_move(card, top, FOUNDATION_SUITS[index]).then_some(index)
}

/// Whether some waste or tableau top card can go to its foundation.
pub fn has_foundation_move(board: &Board) -> bool {
    let waste = board.waste.top_card().into_iter();
    let tableau = board
        .tableau
        .iter()
        .filter_map(|p| p.top().filter(|c| c.face_up).map(|c| c.card));
    waste
        .chain(tableau)
        .any(|card| foundation_target(board, card).is_some())
}

/// Priority: waste→foundation, waste→tableau, tableau→foundation,
/// tableau→tableau; earliest column first, longest run first.
///
/// A run that already starts at the bottom of its column is never offered
/// for an empty column: the move changes nothing.
fn scan_moves(board: &Board, mut visit: impl FnMut(Hint) -> ControlFlow<()>) {
    let mut emit = |from: Source, to: Destination, card: Card, count: usize| {
        visit(Hint {
            from,
            to,
            card,
            count,
        })
    };

    if let Some(top) = board.waste.top_card() {
        if let Some(index) = foundation_target(board, top) {
            if emit(Source::Waste, Destination::Foundation { index }, top, 1).is_break() {
                return;
            }
        }
        for column in 0..TABLEAU_COLUMNS {
            if is_valid_tableau_move(top, board.tableau[column].top_card())
                && emit(Source::Waste, Destination::Tableau { column }, top, 1).is_break()
            {
                return;
            }
        }
    }

    for (column, pile) in board.tableau.iter().enumerate() {
        let Some(top) = pile.top().filter(|c| c.face_up) else {
            continue;
        };
        if let Some(index) = foundation_target(board, top.card) {
            let from = Source::Tableau {
                column,
                start: pile.len() - 1,
            };
            if emit(from, Destination::Foundation { index }, top.card, 1).is_break() {
                return;
            }
        }
    }

    for (column, pile) in board.tableau.iter().enumerate() {
        let cards = pile.cards();
        for start in pile.first_face_up()..cards.len() {
            let run = &cards[start..];
            if !is_valid_run(run) {
                continue;
            }
            let lead = run[0].card;
            for (dest, target) in board.tableau.iter().enumerate() {
                if dest == column {
                    continue;
                }
                if target.is_empty() && start == 0 {
                    continue;
                }
                if is_valid_tableau_move(lead, target.top_card()) {
                    let from = Source::Tableau { column, start };
                    let to = Destination::Tableau { column: dest };
                    if emit(from, to, lead, run.len()).is_break() {
                        return;
                    }
                }
            }
        }
    }
}
