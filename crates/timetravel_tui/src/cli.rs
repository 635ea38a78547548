//! Command-line interface for timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if missing)
    #[arg(short, long, global = true, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List moves latest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply board indices (0-8) and print the resulting view
    Replay {
        /// Board indices in play order; invalid ones are ignored
        moves: Vec<usize>,

        /// Step to display after all moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["timetravel", "play"]).unwrap();
        assert_eq!(cli.command, Command::Play { descending: false });
        assert_eq!(cli.config, PathBuf::from("timetravel.toml"));
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "timetravel",
            "replay",
            "0",
            "3",
            "1",
            "--jump",
            "1",
            "--descending",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Replay {
                moves: vec![0, 3, 1],
                jump: Some(1),
                descending: true,
            }
        );
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_reject_non_numeric_move() {
        assert!(Cli::try_parse_from(["timetravel", "replay", "center"]).is_err());
    }
}
