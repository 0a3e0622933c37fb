//! Turn controller: rolls, asks players, applies moves, detects the winner.

use crate::config::SimConfig;
use crate::players::{ComputerPlayer, player_for};
use crate::report::{GameReport, SeriesReport, TurnAction, TurnRecord};
use derive_more::{Display, Error, From};
use strictly_ludo::{Board, Dice, Die, EngineError, Move, MoveOutcome, PlayerId, Rules, valid_moves};
use tracing::{debug, info, instrument, warn};

/// Error raised while setting up or running a simulated game.
#[derive(Debug, Display, Error, From)]
pub enum SimError {
    /// Invalid configuration.
    #[display("{}", _0)]
    Config(crate::config::ConfigError),
    /// Structural engine misuse.
    #[display("{}", _0)]
    Engine(EngineError),
}

/// Plays one game between computer players on a single board.
pub struct Orchestrator {
    board: Board,
    dice: Dice,
    players: Vec<(PlayerId, Box<dyn ComputerPlayer>)>,
    seed: u64,
    max_turns: u32,
    record_events: bool,
}

impl Orchestrator {
    /// Creates an orchestrator for one game.
    ///
    /// Without a configured seed one is drawn from the OS and kept in the
    /// report, so every game can be replayed.
    #[instrument(skip(config))]
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let seed = config.seed().unwrap_or_else(rand::random);
        let board = Board::new(*config.board())?;
        let players = board
            .players()
            .map(|player| {
                let strategy = config.strategy_for(player);
                let name = format!("{} ({})", player, strategy);
                let player_seed = seed.wrapping_add(u64::from(player.get()));
                (player, player_for(strategy, name, player_seed))
            })
            .collect();
        debug!(seed, "Orchestrator ready");
        Ok(Self {
            board,
            dice: Dice::seeded(seed),
            players,
            seed,
            max_turns: *config.max_turns(),
            record_events: *config.record_events(),
        })
    }

    /// Replaces the starting board, e.g. with a prepared scenario.
    ///
    /// The board must have the configured geometry.
    pub fn with_board(mut self, board: Board) -> Result<Self, SimError> {
        if board.config() != self.board.config() {
            return Err(crate::config::ConfigError::new(format!(
                "scenario board {:?} does not match configured {:?}",
                board.config(),
                self.board.config()
            ))
            .into());
        }
        self.board = board;
        Ok(self)
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game until someone wins or the turn cap is reached.
    ///
    /// Seats play in order. A six earns the same player another roll, whether
    /// or not a piece could move.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn run(&mut self) -> Result<GameReport, SimError> {
        info!("Starting game");
        let mut report = GameReport {
            seed: self.seed,
            winner: None,
            turns: 0,
            moves: 0,
            captures: 0,
            events: Vec::new(),
            final_board: String::new(),
        };

        'game: for turn in 1..=self.max_turns {
            let seat = (turn as usize - 1) % self.players.len();
            report.turns = turn;

            loop {
                let die = self.dice.roll();
                let (player, action) = self.play_roll(seat, die)?;

                if let TurnAction::Moved { captured, .. } = &action {
                    report.moves += 1;
                    if captured.is_some() {
                        report.captures += 1;
                    }
                }
                if self.record_events {
                    report.events.push(TurnRecord::new(turn, player, die, action));
                }

                if let Some(winner) = Rules::new(&mut self.board).check_if_player_won() {
                    info!(%winner, turns = turn, "Game won");
                    report.winner = Some(winner);
                    break 'game;
                }

                self.dice.reset();
                if !die.is_six() {
                    break;
                }
                debug!(%player, "Six rolled, rolling again");
            }
        }

        if report.winner.is_none() {
            warn!(max_turns = self.max_turns, "Turn cap reached without a winner");
        }
        report.final_board = self.board.display();
        Ok(report)
    }

    /// Resolves a single roll for the player in `seat`.
    fn play_roll(&mut self, seat: usize, die: Die) -> Result<(PlayerId, TurnAction), SimError> {
        let (player, ai) = &mut self.players[seat];
        let player = *player;

        let candidates = valid_moves(&self.board, player, die)?;
        if candidates.is_empty() {
            debug!(%player, %die, "No legal move, passing");
            return Ok((player, TurnAction::Passed));
        }
        let Some(piece) = ai.choose(&self.board, die, &candidates) else {
            debug!(%player, %die, "Player passed");
            return Ok((player, TurnAction::Passed));
        };

        let mut rules = Rules::new(&mut self.board);
        let from = rules.board().piece(piece)?.location();
        let outcome = rules.do_move(Move::new(player, piece.slot, die))?;
        let action = match outcome {
            MoveOutcome::Moved { to, captured, .. } => TurnAction::Moved {
                piece,
                from,
                to,
                captured,
            },
            MoveOutcome::Rejected(reason) => {
                warn!(%piece, %reason, "Chosen move was rejected");
                TurnAction::Rejected { piece, reason }
            }
        };
        Ok((player, action))
    }
}

/// Plays `games` games, deriving each game's seed from the configured one.
#[instrument(skip(config))]
pub fn play_series(config: &SimConfig, games: u32) -> Result<SeriesReport, SimError> {
    let base_seed = config.seed().unwrap_or_else(rand::random);
    let mut series = SeriesReport::default();
    for game in 0..games {
        let game_config = config
            .clone()
            .with_seed(Some(base_seed.wrapping_add(u64::from(game))));
        let report = Orchestrator::new(&game_config)?.run()?;
        series.record(report);
    }
    info!(games, unfinished = series.unfinished, "Series finished");
    Ok(series)
}
