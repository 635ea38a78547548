//! timetravel - tic-tac-toe with time travel in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use timetravel_tictactoe::MoveOrder;
use timetravel_tui::{Cli, Command, TuiConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { descending } => {
            let config = if descending {
                config.with_order(MoveOrder::Descending)
            } else {
                config
            };
            tui::run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
        } => {
            logging::init_stderr(&config);
            let order = if descending {
                MoveOrder::Descending
            } else {
                *config.order()
            };
            info!(moves = moves.len(), ?jump, "Replaying moves");
            let state = replay::replay(&moves, jump, order);
            print!("{}", replay::render(&state));
            Ok(())
        }
    }
}
