//! Tic-tac-toe with a recorded move history and time travel.
//!
//! The crate has no I/O. A [`GameState`] holds every board snapshot since
//! the start of the game, a pointer to the one currently displayed, and
//! the preferred order of the move list. Its transitions return new
//! values:
//!
//! ```
//! use timetravel_tictactoe::{GameState, Player, Status};
//!
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |state, index| state.apply_move(index));
//! assert_eq!(state.status(), Status::Winner(Player::X));
//!
//! // Going back and playing elsewhere discards the later moves.
//! let branched = state.jump_to(1).apply_move(4);
//! assert_eq!(branched.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use history::HistoryEntry;
pub use moves::{MoveListItem, MoveOrder, label, move_list};
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use state::GameState;
pub use status::Status;
pub use types::{Board, Player, Square};
