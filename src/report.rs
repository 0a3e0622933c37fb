//! Game reports.

use derive_new::new;
use serde::Serialize;
use std::collections::BTreeMap;
use strictly_ludo::{Die, Location, PieceId, PlayerId, Rejection};

/// What happened on one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnAction {
    /// No piece could move.
    Passed,
    /// A piece moved.
    Moved {
        /// Piece that moved.
        piece: PieceId,
        /// Where it started.
        from: Location,
        /// Where it ended.
        to: Location,
        /// Opponent sent back to base.
        captured: Option<PieceId>,
    },
    /// The player picked a piece the board refused to move.
    Rejected {
        /// Piece the player picked.
        piece: PieceId,
        /// Why the board refused.
        reason: Rejection,
    },
}

/// One roll within a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct TurnRecord {
    /// Player turn number, starting at 1.
    pub turn: u32,
    /// Player who rolled.
    pub player: PlayerId,
    /// Roll.
    pub die: Die,
    /// Result of the roll.
    pub action: TurnAction,
}

/// Summary of a finished or abandoned game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    /// Seed the dice and players were built from.
    pub seed: u64,
    /// First player with every piece home; `None` if the turn cap was hit.
    pub winner: Option<PlayerId>,
    /// Player turns played.
    pub turns: u32,
    /// Pieces moved.
    pub moves: u32,
    /// Pieces captured.
    pub captures: u32,
    /// Per-roll log, when recording was enabled.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TurnRecord>,
    /// Final board, one line per player.
    pub final_board: String,
}

impl std::fmt::Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(winner) => writeln!(f, "{} wins after {} turns", winner, self.turns)?,
            None => writeln!(f, "No winner after {} turns", self.turns)?,
        }
        writeln!(f, "Moves: {}, captures: {}, seed: {}", self.moves, self.captures, self.seed)?;
        write!(f, "{}", self.final_board)
    }
}

/// Aggregate over several games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesReport {
    /// Games played.
    pub games: u32,
    /// Wins per player number.
    pub wins: BTreeMap<u8, u32>,
    /// Games that hit the turn cap.
    pub unfinished: u32,
    /// Pieces captured across all games.
    pub captures: u32,
    /// Individual reports.
    pub reports: Vec<GameReport>,
}

impl SeriesReport {
    /// Folds one game into the aggregate.
    pub fn record(&mut self, report: GameReport) {
        self.games += 1;
        self.captures += report.captures;
        match report.winner {
            Some(winner) => *self.wins.entry(winner.get()).or_default() += 1,
            None => self.unfinished += 1,
        }
        self.reports.push(report);
    }
}

impl std::fmt::Display for SeriesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games: {}, unfinished: {}, captures: {}", self.games, self.unfinished, self.captures)?;
        for (player, wins) in &self.wins {
            let rate = f64::from(*wins) / f64::from(self.games.max(1)) * 100.0;
            writeln!(f, "Player {}: {} wins ({:.1}%)", player, wins, rate)?;
        }
        Ok(())
    }
}
