//! Board geometry configuration.

use crate::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cells on the shared ring of the reference board.
pub const DEFAULT_TRACK_LENGTH: usize = 40;

/// Home lane slots per player on the reference board.
pub const DEFAULT_HOME_SIZE: usize = 4;

/// Pieces each player owns.
pub const PIECES_PER_PLAYER: u8 = 4;

/// Fewest players a board can seat.
pub const MIN_PLAYERS: u8 = 2;

/// Most players a board can seat.
pub const MAX_PLAYERS: u8 = 4;

/// Geometry of a board: seat count, ring length and home lane length.
///
/// Entry points are spaced `track_length / players` cells apart, so the ring
/// must divide evenly between the seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of seated players.
    players: u8,
    /// Cells on the shared ring.
    track_length: usize,
    /// Slots in each private home lane.
    home_size: usize,
}

impl BoardConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(players: u8, track_length: usize, home_size: usize) -> Result<Self, EngineError> {
        let config = Self {
            players,
            track_length,
            home_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reference geometry with a different number of players.
    #[instrument]
    pub fn with_players(players: u8) -> Result<Self, EngineError> {
        Self::new(players, DEFAULT_TRACK_LENGTH, DEFAULT_HOME_SIZE)
    }

    /// Checks that this configuration describes a playable board.
    ///
    /// Deserialized configurations bypass [`BoardConfig::new`], so
    /// [`Board::new`](crate::Board::new) calls this again.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(EngineError::InvalidConfig(format!(
                "players must be {}..={}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.players
            )));
        }
        if self.track_length == 0 || self.track_length % self.players as usize != 0 {
            return Err(EngineError::InvalidConfig(format!(
                "track length {} must be a positive multiple of the player count {}",
                self.track_length, self.players
            )));
        }
        if self.home_size < PIECES_PER_PLAYER as usize {
            return Err(EngineError::InvalidConfig(format!(
                "home size {} cannot hold all {} pieces",
                self.home_size, PIECES_PER_PLAYER
            )));
        }
        Ok(())
    }

    /// Number of seated players.
    pub fn players(&self) -> u8 {
        self.players
    }

    /// Cells on the shared ring.
    pub fn track_length(&self) -> usize {
        self.track_length
    }

    /// Slots in each home lane.
    pub fn home_size(&self) -> usize {
        self.home_size
    }

    /// Pieces each player owns.
    pub fn pieces_per_player(&self) -> u8 {
        PIECES_PER_PLAYER
    }

    /// Distance between consecutive players' entry cells.
    pub fn entry_spacing(&self) -> usize {
        self.track_length / self.players as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            players: MAX_PLAYERS,
            track_length: DEFAULT_TRACK_LENGTH,
            home_size: DEFAULT_HOME_SIZE,
        }
    }
}
