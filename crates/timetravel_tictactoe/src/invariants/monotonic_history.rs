//! Monotonic history invariant: each entry adds exactly its own move.

use super::Invariant;
use crate::{GameState, Position, Square};

/// Invariant: every entry's board is the previous board plus one mark.
///
/// The added mark sits at the entry's recorded position and belongs to the
/// entry's recorded player. Marks are never removed or overwritten.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(mv) = pair[1].last_move() else {
                return false;
            };
            Position::ALL.into_iter().all(|pos| {
                if pos == mv.position {
                    before.get(pos) == Square::Empty
                        && after.get(pos) == Square::Occupied(mv.player)
                } else {
                    before.get(pos) == after.get(pos)
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous board"
    }
}
