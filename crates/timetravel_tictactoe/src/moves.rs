//! Move list shown beside the board.

use super::GameState;
use super::history::HistoryEntry;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One clickable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History step this item jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the step currently displayed.
    pub selected: bool,
}

/// Button text for history entry `step`.
pub fn label(step: usize, entry: &HistoryEntry) -> String {
    match entry.coordinates() {
        Some((col, row)) if step > 0 => format!("Go to move #{} ({}, {})", step, col, row),
        _ => "Go to game start".to_string(),
    }
}

/// Builds the move list in display order.
///
/// Descending order is a reversed copy; the history is never reordered.
#[instrument(skip(state), fields(len = state.history().len(), order = ?state.order()))]
pub fn move_list(state: &GameState) -> Vec<MoveListItem> {
    let items = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem {
            step,
            label: label(step, entry),
            selected: step == state.step(),
        });

    match state.order() {
        MoveOrder::Ascending => items.collect(),
        MoveOrder::Descending => items.rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(state: &GameState) -> Vec<String> {
        move_list(state).into_iter().map(|item| item.label).collect()
    }

    #[test]
    fn test_start_only() {
        let items = move_list(&GameState::new());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Go to game start");
        assert!(items[0].selected);
    }

    #[test]
    fn test_labels_use_one_based_column_then_row() {
        // Index 5 is row 1, column 2; index 6 is row 2, column 0.
        let state = GameState::new().apply_move(5).apply_move(6);
        assert_eq!(
            labels(&state),
            vec![
                "Go to game start",
                "Go to move #1 (3, 2)",
                "Go to move #2 (1, 3)",
            ]
        );
    }

    #[test]
    fn test_selected_follows_step() {
        let state = GameState::new().apply_move(0).apply_move(1).jump_to(1);
        let selected: Vec<_> = move_list(&state).iter().map(|i| i.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn test_descending_is_reversed_copy() {
        let state = GameState::new().apply_move(0).apply_move(1);
        let ascending = move_list(&state);
        let descending = move_list(&state.toggle_order());
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(descending[0].step, 2);
    }

    #[test]
    fn test_order_config_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            order: MoveOrder,
        }
        let parsed: Wrapper = serde_json::from_str(r#"{"order":"descending"}"#).unwrap();
        assert_eq!(parsed.order, MoveOrder::Descending);
    }
}
