//! Terminal front end for time-travel tic-tac-toe.
//!
//! - **app**: input handling over a [`timetravel_tictactoe::GameState`]
//! - **ui**: ratatui rendering and mouse hit-testing
//! - **replay**: headless text rendering for scripted games
//! - **config** / **cli** / **logging**: ambient setup for the binary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
