//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three equal marks in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The three squares of the line.
    pub positions: [Position; 3],
    /// The player whose marks fill the line.
    pub player: Player,
}

impl WinningLine {
    /// Returns true if `pos` is one of the line's squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Finds the first winning line on the board.
///
/// Returns `None` if no line has three equal non-empty squares.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|positions| {
        let [a, b, c] = positions;
        let square = board.get(a);
        match square {
            Square::Occupied(player) if board.get(b) == square && board.get(c) == square => {
                Some(WinningLine { positions, player })
            }
            _ => None,
        }
    })
}
