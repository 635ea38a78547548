//! Step pointer invariant: the displayed step exists and history starts empty.

use super::Invariant;
use crate::{GameState, HistoryEntry};

/// Invariant: the step pointer indexes a history entry.
///
/// History is never empty and its first entry is always the empty board
/// with no move.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.first() == Some(&HistoryEntry::start())
            && state.step < state.history.len()
    }

    fn description() -> &'static str {
        "Step indexes a history that starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_jump_stays_in_bounds() {
        let state = GameState::new().apply_move(0).apply_move(1).jump_to(7);
        assert!(StepInBoundsInvariant::holds(&state));
        assert_eq!(state.step(), 2);
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!StepInBoundsInvariant::holds(&state));
    }
}
