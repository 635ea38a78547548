//! Headless replay: apply moves and print the view as text.

use timetravel_tictactoe::{GameState, MoveOrder, Player, Position, Square, move_list};
use tracing::{info, instrument};

/// Applies `moves` to a new game, then jumps to `jump` if given.
///
/// Invalid indices and steps are ignored, as in the interactive mode.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, order: MoveOrder) -> GameState {
    let state = moves
        .iter()
        .fold(GameState::with_order(order), |state, index| state.apply_move(*index));
    let state = match jump {
        Some(step) => state.jump_to(step),
        None => state,
    };
    info!(step = state.step(), status = %state.status(), "Replay finished");
    state
}

/// Renders the board, status line and move list as plain text.
///
/// Empty squares print as `.`; squares of the winning line are bracketed.
/// The displayed step is marked with `>` in the move list.
pub fn render(state: &GameState) -> String {
    let winning_line = state.winning_line();
    let mut out = String::new();

    for row in Position::ALL.chunks(3) {
        let line: String = row
            .iter()
            .map(|pos| {
                let mark = match state.board().get(*pos) {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                if winning_line.is_some_and(|line| line.contains(*pos)) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&state.status().to_string());
    out.push_str("\n\n");

    for item in move_list(state) {
        let marker = if item.selected { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, item.label));
    }
    out
}
