//! The Klondike state machine.
//!
//! [`Game`] owns the live [`GameState`] and its undo/redo history. Callers
//! drive it exclusively through [`Game::dispatch`]; every action either
//! applies completely or leaves the state untouched.

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::domain::actions::{Action, ActionOutcome, Destination, Hint, MoveRejection, MoveRequest, Source};
use crate::domain::dealing::deal_klondike;
use crate::domain::deck::create_deck;
use crate::domain::hints::{find_hint, foundation_target, has_foundation_move};
use crate::domain::history::History;
use crate::domain::invariants::{check_card_conservation, check_layout};
use crate::domain::piles::{Board, Pile};
use crate::domain::rules::{
    is_valid_foundation_move, is_valid_run, is_valid_tableau_move, FOUNDATIONS, FOUNDATION_SUITS,
    TABLEAU_COLUMNS,
};
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::{FacedCard, GameVariant};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    history: History,
    status: GameStatus,
    seed: u64,
    variant: GameVariant,
    last_hint: Option<Hint>,
    config: EngineConfig,
}

impl Game {
    /// Deal a Klondike game with default settings. `None` picks a random seed.
    pub fn new(seed: Option<u64>) -> Result<Self, DomainError> {
        Self::with_config(seed, EngineConfig::default())
    }

    pub fn with_config(seed: Option<u64>, config: EngineConfig) -> Result<Self, DomainError> {
        Self::for_variant(GameVariant::Klondike, seed, config)
    }

    /// Only [`GameVariant::Klondike`] is playable; the others are rejected.
    pub fn for_variant(
        variant: GameVariant,
        seed: Option<u64>,
        config: EngineConfig,
    ) -> Result<Self, DomainError> {
        if !variant.is_playable() {
            return Err(DomainError::validation(
                ValidationKind::UnsupportedVariant,
                format!("{variant:?} is not available yet"),
            ));
        }
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let board = deal_for_seed(seed)?;
        Ok(Self::from_parts(GameState::new(board), seed, config))
    }

    /// Resume from an arbitrary position. The board must hold a full deck
    /// in a well-formed layout; history starts empty.
    pub fn from_state(
        state: GameState,
        seed: u64,
        config: EngineConfig,
    ) -> Result<Self, DomainError> {
        check_card_conservation(&state.board)?;
        check_layout(&state.board)?;
        Ok(Self::from_parts(state, seed, config))
    }

    /// Rebuild a game from a snapshot. The last hint is not carried over.
    pub fn restore(snapshot: GameSnapshot, config: EngineConfig) -> Result<Self, DomainError> {
        if !snapshot.variant.is_playable() {
            return Err(DomainError::validation(
                ValidationKind::UnsupportedVariant,
                format!("{:?} snapshots cannot be restored", snapshot.variant),
            ));
        }
        let state = GameState {
            board: snapshot.board,
            score: snapshot.score,
            move_count: snapshot.move_count,
        };
        Self::from_state(state, snapshot.seed, config)
    }

    fn from_parts(state: GameState, seed: u64, config: EngineConfig) -> Self {
        let status = GameStatus::of(&state.board);
        Self {
            state,
            history: History::new(config.history_limit),
            status,
            seed,
            variant: GameVariant::Klondike,
            last_hint: None,
            config,
        }
    }

    /// Apply one action. Illegal moves come back as
    /// [`ActionOutcome::Rejected`]; nothing here panics or errors.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        self.last_hint = None;
        let outcome = match action {
            Action::NewGame { seed } => self.new_deal(seed),
            Action::Draw => self.draw(),
            Action::Move(request) => self.apply_move(request),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::AutoComplete => self.auto_complete(),
            Action::Hint => self.hint(),
        };

        if outcome.is_applied() {
            self.status = GameStatus::of(&self.state.board);
            debug_assert!(
                check_card_conservation(&self.state.board).is_ok(),
                "card conservation broken by {}",
                action.name()
            );
            debug!(
                action = action.name(),
                score = self.state.score,
                moves = self.state.move_count,
                won = self.status.won,
                lost = self.status.lost,
                "action applied"
            );
        }
        outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> i32 {
        self.state.score
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn last_hint(&self) -> Option<Hint> {
        self.last_hint
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn can_auto_complete(&self) -> bool {
        has_foundation_move(&self.state.board)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            variant: self.variant,
            seed: self.seed,
            board: self.state.board.clone(),
            score: self.state.score,
            move_count: self.state.move_count,
            won: self.status.won,
            lost: self.status.lost,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            can_auto_complete: self.can_auto_complete(),
            last_hint: self.last_hint,
        }
    }

    fn new_deal(&mut self, seed: Option<u64>) -> ActionOutcome {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        match deal_for_seed(seed) {
            Ok(board) => {
                self.state = GameState::new(board);
                self.history.clear();
                self.seed = seed;
                ActionOutcome::Applied
            }
            Err(err) => {
                warn!(seed, error = %err, "deal failed; keeping current game");
                ActionOutcome::NoOp
            }
        }
    }

    fn draw(&mut self) -> ActionOutcome {
        let before = self.state.clone();
        let scoring = self.config.scoring;
        let board = &mut self.state.board;

        let delta = if let Some(card) = board.stock.pop() {
            board.waste.push(card.flipped_up());
            scoring.draw
        } else if !board.waste.is_empty() {
            let mut cards = board.waste.take_all();
            cards.reverse();
            board.stock = Pile::from_cards(cards.into_iter().map(FacedCard::flipped_down).collect());
            scoring.recycle
        } else {
            return ActionOutcome::NoOp;
        };

        self.state.score = self.state.score.saturating_add(delta);
        self.history.record(before);
        ActionOutcome::Applied
    }

    fn apply_move(&mut self, request: MoveRequest) -> ActionOutcome {
        let count = match validate_move(&self.state.board, &request) {
            Ok(count) => count,
            Err(reason) => {
                trace!(?request, %reason, "move rejected");
                return ActionOutcome::Rejected(reason);
            }
        };

        let before = self.state.clone();
        let board = &mut self.state.board;
        let moved: Vec<FacedCard> = match request.from {
            Source::Waste => board.waste.pop().into_iter().collect(),
            Source::Tableau { column, start } => {
                let run = board.tableau[column].split_off(start);
                board.tableau[column].reveal_top();
                run
            }
        };
        debug_assert_eq!(moved.len(), count);

        let delta = match request.to {
            Destination::Tableau { column } => {
                board.tableau[column].extend(&moved);
                self.config.scoring.tableau_move(count)
            }
            Destination::Foundation { index } => {
                board.foundations[index].extend(&moved);
                self.config.scoring.foundation_move(count)
            }
        };

        self.state.score = self.state.score.saturating_add(delta);
        self.state.move_count = self.state.move_count.saturating_add(1);
        self.history.record(before);
        ActionOutcome::Applied
    }

    fn undo(&mut self) -> ActionOutcome {
        let current = self.state.clone();
        match self.history.undo(current) {
            Some(mut previous) => {
                previous.score = previous.score.saturating_add(self.config.scoring.undo);
                self.state = previous;
                ActionOutcome::Applied
            }
            None => ActionOutcome::NoOp,
        }
    }

    fn redo(&mut self) -> ActionOutcome {
        let current = self.state.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.state = next;
                ActionOutcome::Applied
            }
            None => ActionOutcome::NoOp,
        }
    }

    /// Sweep the waste top and tableau tops onto the foundations until a
    /// pass moves nothing. The whole sweep is one undo step.
    fn auto_complete(&mut self) -> ActionOutcome {
        let before = self.state.clone();
        let board = &mut self.state.board;
        let mut moved = 0usize;

        loop {
            let mut pass = 0usize;

            if let Some(card) = board.waste.top_card() {
                if let Some(index) = foundation_target(board, card) {
                    if let Some(top) = board.waste.pop() {
                        board.foundations[index].push(top);
                        pass += 1;
                    }
                }
            }

            for column in 0..TABLEAU_COLUMNS {
                let Some(top) = board.tableau[column].top().filter(|c| c.face_up) else {
                    continue;
                };
                if let Some(index) = foundation_target(board, top.card) {
                    board.tableau[column].pop();
                    board.tableau[column].reveal_top();
                    board.foundations[index].push(top);
                    pass += 1;
                }
            }

            if pass == 0 {
                break;
            }
            moved += pass;
        }

        if moved == 0 {
            return ActionOutcome::NoOp;
        }

        let gained = self.config.scoring.foundation_move(moved);
        self.state.score = self.state.score.saturating_add(gained);
        self.state.move_count = self
            .state
            .move_count
            .saturating_add(u32::try_from(moved).unwrap_or(u32::MAX));
        self.history.record(before);
        trace!(moved, "auto-complete sweep");
        ActionOutcome::Applied
    }

    fn hint(&mut self) -> ActionOutcome {
        let hint = find_hint(&self.state.board);
        trace!(?hint, "hint computed");
        self.last_hint = hint;
        ActionOutcome::Hint(hint)
    }
}

/// Check a move against the board without applying it. On success returns
/// the number of cards that would move.
pub fn validate_move(board: &Board, request: &MoveRequest) -> Result<usize, MoveRejection> {
    let run: &[FacedCard] = match request.from {
        Source::Waste => {
            let cards = board.waste.cards();
            match cards.len() {
                0 => return Err(MoveRejection::EmptySource),
                len => &cards[len - 1..],
            }
        }
        Source::Tableau { column, start } => {
            let pile = board.tableau.get(column).ok_or(MoveRejection::NoSuchPile)?;
            let cards = pile.cards();
            if start >= cards.len() {
                return Err(MoveRejection::EmptySource);
            }
            &cards[start..]
        }
    };

    if run.iter().any(|c| !c.face_up) {
        return Err(MoveRejection::FaceDown);
    }
    if !is_valid_run(run) {
        return Err(MoveRejection::BrokenRun);
    }
    let lead = run[0].card;

    match request.to {
        Destination::Tableau { column } => {
            let target = board.tableau.get(column).ok_or(MoveRejection::NoSuchPile)?;
            if matches!(request.from, Source::Tableau { column: from, .. } if from == column) {
                return Err(MoveRejection::SameColumn);
            }
            if !is_valid_tableau_move(lead, target.top_card()) {
                return Err(MoveRejection::IllegalPlacement);
            }
        }
        Destination::Foundation { index } => {
            if index >= FOUNDATIONS {
                return Err(MoveRejection::NoSuchPile);
            }
            if run.len() != 1 {
                return Err(MoveRejection::FoundationTakesOneCard);
            }
            let top = board.foundations[index].top_card();
            if !is_valid_foundation_move(lead, top, FOUNDATION_SUITS[index]) {
                return Err(MoveRejection::IllegalPlacement);
            }
        }
    }
    Ok(run.len())
}

fn deal_for_seed(seed: u64) -> Result<Board, DomainError> {
    deal_klondike(create_deck(Some(seed)))
}
