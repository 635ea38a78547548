//! Recorded board snapshots.

use super::{Board, Move};
use serde::{Deserialize, Serialize};

/// One step of the game: the board after a move, and the move itself.
///
/// The first entry of every history is the empty board with no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn start() -> Self {
        Self::default()
    }

    /// The entry produced by `mv`, with `board` already containing it.
    pub fn after(board: Board, mv: Move) -> Self {
        Self {
            board,
            last_move: Some(mv),
        }
    }

    /// Board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry, or `None` for the start entry.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// One-based `(column, row)` of the move, as shown in the move list.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.last_move
            .map(|mv| (mv.position.col() + 1, mv.position.row() + 1))
    }
}
