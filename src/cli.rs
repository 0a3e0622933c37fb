//! Command-line interface for strictly_ludo_sim.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_ludo_sim::Strategy;

/// Strictly Ludo - headless race-and-capture games between computer players
#[derive(Parser, Debug)]
#[command(name = "strictly_ludo_sim")]
#[command(about = "Simulate Mensch ärgere dich nicht games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every subcommand.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Path to a TOML simulation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of players (overrides the config file)
    #[arg(short, long)]
    pub players: Option<u8>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more games and print the result
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Seed for dice and players
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Player turns before a game is abandoned
        #[arg(long)]
        max_turns: Option<u32>,

        /// Strategy per seat, comma-separated (e.g. eager,random)
        #[arg(long, value_delimiter = ',')]
        strategy: Vec<Strategy>,

        /// Record every roll in the report
        #[arg(long)]
        events: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print each player's entry cell and home turn-off
    Geometry {
        #[command(flatten)]
        board: BoardArgs,
    },
}
