//! Status line derivation.

use super::rules::{evaluate, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line reports for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game is ongoing and this player moves next.
    #[display("Next player: {}", _0)]
    Next(Player),
    /// A winning line exists; the player owns its marks.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full with no winning line.
    #[display("It is a draw")]
    Draw,
}

impl Status {
    /// Derives the status of `board` when `to_move` would play next.
    ///
    /// The winner is read from the marks on the winning line, never from
    /// whose turn it is.
    #[instrument(level = "trace", skip(board))]
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(line) = evaluate(board) {
            Status::Winner(line.player)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::Next(to_move)
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Next(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(player),
            _ => None,
        }
    }
}
