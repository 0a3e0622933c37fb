//! Engine error types.

use crate::{PieceId, PlayerId};

/// Structural misuse of the engine API.
///
/// These are programming errors on the caller's side. Game-rule outcomes such
/// as a blocked entry or an overshoot are never reported here; they come back
/// as [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The player is not seated at this board.
    #[display("{} is not seated at this board ({} players)", player, players)]
    PlayerOutOfRange {
        /// Requested player.
        player: PlayerId,
        /// Number of seated players.
        players: u8,
    },

    /// The piece slot is outside `0..pieces_per_player`.
    #[display("Piece slot {} is out of range (0..{})", slot, pieces)]
    SlotOutOfRange {
        /// Requested slot.
        slot: u8,
        /// Pieces per player.
        pieces: u8,
    },

    /// An administrative placement targeted a cell outside the ring.
    #[display("Track position {} is out of range (0..{})", position, track_length)]
    TrackPositionOutOfRange {
        /// Requested track cell.
        position: usize,
        /// Ring length.
        track_length: usize,
    },

    /// An administrative placement targeted a home slot that does not exist.
    #[display("Home slot {} is out of range (0..{})", slot, home_size)]
    HomeSlotOutOfRange {
        /// Requested home slot.
        slot: usize,
        /// Home lane length.
        home_size: usize,
    },

    /// An administrative placement targeted a track cell held by another piece.
    #[display("Track position {} is already held by {}", position, occupant)]
    TrackCellOccupied {
        /// Requested track cell.
        position: usize,
        /// Piece currently on that cell.
        occupant: PieceId,
    },

    /// An administrative placement targeted a home slot held by another piece.
    #[display("Home slot {} is already held by {}", slot, occupant)]
    HomeSlotOccupied {
        /// Requested home slot.
        slot: usize,
        /// Piece currently in that slot.
        occupant: PieceId,
    },

    /// A die value outside `1..=6`.
    #[display("Die value {} is not in 1..=6", _0)]
    InvalidDie(u8),

    /// The board configuration cannot describe a playable board.
    #[display("Invalid board configuration: {}", _0)]
    InvalidConfig(String),
}

impl std::error::Error for EngineError {}
