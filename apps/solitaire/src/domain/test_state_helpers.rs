//! Board builders for unit tests.
//!
//! Tokens are card tokens (`"7C"`); a leading `#` marks a face-down card.

use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::domain::deck::full_deck;
use crate::domain::engine::Game;
use crate::domain::piles::{Board, Pile};
use crate::domain::rules::{FOUNDATIONS, FOUNDATION_SUITS, TABLEAU_COLUMNS};
use crate::domain::state::GameState;
use crate::domain::{Card, FacedCard, Rank};

pub fn faced(token: &str) -> FacedCard {
    match token.strip_prefix('#') {
        Some(rest) => FacedCard::face_down(rest.parse().expect("valid card token")),
        None => FacedCard::face_up(token.parse().expect("valid card token")),
    }
}

pub fn pile(tokens: &[&str]) -> Pile {
    Pile::from_cards(tokens.iter().map(|t| faced(t)).collect())
}

/// Build a board; may hold any subset of the deck.
pub fn board_from(
    stock: &[&str],
    waste: &[&str],
    tableau: &[&[&str]],
    foundations: &[&[&str]],
) -> Board {
    assert_eq!(tableau.len(), TABLEAU_COLUMNS, "tableau needs 7 columns");
    assert_eq!(foundations.len(), FOUNDATIONS, "need 4 foundations");
    Board {
        stock: pile(stock),
        waste: pile(waste),
        tableau: std::array::from_fn(|i| pile(tableau[i])),
        foundations: std::array::from_fn(|i| pile(foundations[i])),
    }
}

/// Foundation pile holding A..=`up_to` of its suit.
pub fn foundation_up_to(index: usize, up_to: Rank) -> Pile {
    let suit = FOUNDATION_SUITS[index];
    Pile::from_cards(
        Rank::ALL
            .iter()
            .take(up_to.value() as usize)
            .map(|&rank| FacedCard::face_up(Card { suit, rank }))
            .collect(),
    )
}

pub fn completed_foundations() -> [Pile; FOUNDATIONS] {
    std::array::from_fn(|i| foundation_up_to(i, Rank::King))
}

/// Fill the stock (beneath any listed stock cards) with every card the
/// board is missing, so the position holds a full deck.
pub fn with_rest_in_stock(mut board: Board) -> Board {
    let present: HashSet<Card> = board.all_cards().map(|c| c.card).collect();
    let mut stock: Vec<FacedCard> = full_deck()
        .into_iter()
        .filter(|c| !present.contains(c))
        .map(FacedCard::face_down)
        .collect();
    stock.extend_from_slice(board.stock.cards());
    board.stock = Pile::from_cards(stock);
    board
}

pub fn game_at(board: Board) -> Game {
    Game::from_state(GameState::new(board), 7, EngineConfig::default())
        .expect("test position holds a full deck")
}

/// Everything on the foundations except the king of spades, which sits
/// face-up alone in column 0.
pub fn one_move_from_win() -> Board {
    let mut foundations = completed_foundations();
    foundations[3] = foundation_up_to(3, Rank::Queen);
    let mut board = Board {
        foundations,
        ..Board::default()
    };
    board.tableau[0] = pile(&["KS"]);
    board
}

/// Full deck, stock and waste empty, and no card can move: every column
/// shows a king or a five over a face-down pile.
pub fn blocked_full_board() -> Board {
    let tops: Vec<Card> = ["KS", "KC", "KH", "KD", "5S", "5C", "5H"]
        .iter()
        .map(|t| t.parse().expect("valid card token"))
        .collect();
    let mut columns: [Vec<FacedCard>; TABLEAU_COLUMNS] = Default::default();
    let hidden = full_deck().into_iter().filter(|c| !tops.contains(c));
    for (i, card) in hidden.enumerate() {
        columns[i % TABLEAU_COLUMNS].push(FacedCard::face_down(card));
    }
    for (column, top) in columns.iter_mut().zip(&tops) {
        column.push(FacedCard::face_up(*top));
    }
    Board {
        tableau: columns.map(Pile::from_cards),
        ..Board::default()
    }
}

/// [`blocked_full_board`] with the 4♠ lifted onto the waste. Its only
/// destination is the 5♥, after which nothing can move.
pub fn one_move_from_loss() -> Board {
    let mut board = blocked_full_board();
    let four: Card = "4S".parse().expect("valid card token");
    for column in board.tableau.iter_mut() {
        let kept: Vec<FacedCard> = column
            .cards()
            .iter()
            .copied()
            .filter(|c| c.card != four)
            .collect();
        *column = Pile::from_cards(kept);
    }
    board.waste = pile(&["4S"]);
    board
}

/// Hearts to 8 and clubs to 6 home; column 0 hides the rest under the 9♥,
/// column 1 holds the 8♣. Playing 8♣ onto 9♥ loses; 9♥ home first wins.
pub fn loss_or_win_in_one() -> Board {
    let mut foundations = completed_foundations();
    foundations[0] = foundation_up_to(0, Rank::Eight);
    foundations[2] = foundation_up_to(2, Rank::Six);
    let mut board = Board {
        foundations,
        ..Board::default()
    };
    board.tableau[0] = pile(&[
        "#KH", "#QH", "#JH", "#TH", "#KC", "#QC", "#JC", "#TC", "#9C", "#7C", "9H",
    ]);
    board.tableau[1] = pile(&["8C"]);
    board
}
