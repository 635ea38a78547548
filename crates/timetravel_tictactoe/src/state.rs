//! Game state with move history and time travel.
//!
//! [`GameState`] is a plain value. Every transition borrows the current
//! state and returns the next one, so callers decide when to replace it.
//!
//! Invalid inputs are not errors at this level: [`GameState::apply_move`]
//! and [`GameState::jump_to`] return an unchanged copy when the request
//! cannot be honoured. [`GameState::try_apply_move`] exposes the reason.

use super::action::{Move, MoveError};
use super::history::HistoryEntry;
use super::invariants::{GameInvariants, InvariantSet};
use super::moves::MoveOrder;
use super::rules::{WinningLine, evaluate};
use super::status::Status;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Move history, the step currently displayed, and the move-list order.
///
/// Whose turn it is is not stored; it follows from the parity of the step.
///
/// Deserialized snapshots are checked against [`GameInvariants`] and
/// rejected if the step does not index a consistent history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
    pub(crate) order: MoveOrder,
}

impl GameState {
    /// Creates a new game with a single empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a new game listing moves in `order`.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
            order,
        }
    }

    /// All recorded entries, including any kept beyond the current step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed entry.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Move-list display order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The displayed entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player who moves next from the displayed step.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.step)
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        evaluate(self.board())
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        Status::of(self.board(), self.to_move())
    }

    /// Returns true if the displayed board accepts no more moves.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Plays the current player's mark at board index `index`.
    ///
    /// Returns an unchanged copy if the index is out of range, the game is
    /// over on the displayed board, or the square is occupied.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&self, index: usize) -> GameState {
        let result = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|pos| self.try_apply_move(pos));

        match result {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Move ignored");
                self.clone()
            }
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Entries after the displayed step are discarded before the new one
    /// is appended, and the step moves to the new entry.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed board has a winner or is full.
    /// - [`MoveError::SquareOccupied`] if `pos` is already marked.
    /// - [`MoveError::InvariantViolation`] if the produced state is inconsistent.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let mut board = *self.board();
        board.set(pos, Square::Occupied(player));

        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(HistoryEntry::after(board, Move::new(player, pos)));

        let next = GameState {
            step: history.len() - 1,
            history,
            order: self.order,
        };

        next.check_invariants()?;

        debug!(
            position = %pos,
            new_step = next.step,
            discarded,
            "Move applied"
        );
        Ok(next)
    }

    /// Displays entry `step` without discarding later entries.
    ///
    /// Returns an unchanged copy if `step` is past the end of the history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> GameState {
        if step >= self.history.len() {
            debug!(len = self.history.len(), "Jump target out of range, ignored");
            return self.clone();
        }
        debug!("Jumped");
        GameState {
            step,
            ..self.clone()
        }
    }

    /// Flips the move-list order. History is untouched.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_order(&self) -> GameState {
        GameState {
            order: self.order.toggle(),
            ..self.clone()
        }
    }
}

impl GameState {
    fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

/// Unchecked field mirror used while deserializing a [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step: usize,
    order: MoveOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = MoveError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            history: raw.history,
            step: raw.step,
            order: raw.order,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
