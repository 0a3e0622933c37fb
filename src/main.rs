//! Strictly Ludo - simulator CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use strictly_ludo::{Board, BoardConfig};
use strictly_ludo_sim::{SimConfig, play_series};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            board,
            seed,
            games,
            max_turns,
            strategy,
            events,
            json,
        } => {
            let mut config = load_config(&board)?;
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            if let Some(max_turns) = max_turns {
                config = config.with_max_turns(max_turns);
            }
            if !strategy.is_empty() {
                config = config.with_strategies(strategy);
            }
            if events {
                config = config.with_record_events(true);
            }
            config.validate()?;
            run_play(&config, games, json)
        }
        Command::Geometry { board } => run_geometry(&load_config(&board)?),
    }
}

/// Loads the config file, if any, and applies the board overrides.
#[instrument]
fn load_config(args: &BoardArgs) -> Result<SimConfig> {
    let config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    Ok(match args.players {
        Some(players) => {
            let board = BoardConfig::new(
                players,
                config.board().track_length(),
                config.board().home_size(),
            )
            .context("Invalid --players")?;
            config.with_board(board)
        }
        None => config,
    })
}

/// Plays the requested games and prints the outcome.
fn run_play(config: &SimConfig, games: u32, json: bool) -> Result<()> {
    info!(games, players = config.board().players(), "Starting simulation");
    let series = play_series(config, games)?;

    if json {
        if games == 1 && let Some(report) = series.reports.first() {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        return Ok(());
    }

    if games == 1 && let Some(report) = series.reports.first() {
        println!("{}", report);
    } else {
        print!("{}", series);
    }
    Ok(())
}

/// Prints the derived board geometry.
fn run_geometry(config: &SimConfig) -> Result<()> {
    let board = Board::new(*config.board())?;
    println!(
        "Track length {}, home size {}",
        board.config().track_length(),
        board.config().home_size()
    );
    for player in board.players() {
        println!(
            "{}: entry {}, home turn-off after {}",
            player,
            board.entry_index_for_player(player)?,
            board.home_base_for_player(player)?
        );
    }
    Ok(())
}
