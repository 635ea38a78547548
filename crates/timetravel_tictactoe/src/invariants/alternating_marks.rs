//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: entry N was produced by X when N is odd, by O when N is even.
///
/// Entry 0 has no move.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .iter()
            .enumerate()
            .all(|(step, entry)| match (step, entry.last_move()) {
                (0, mv) => mv.is_none(),
                (_, Some(mv)) => mv.player == Player::to_move_at(step - 1),
                (_, None) => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
