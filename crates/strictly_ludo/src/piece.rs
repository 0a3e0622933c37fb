//! Players, pieces and where a piece can be.

use serde::{Deserialize, Serialize};

/// A seated player, numbered from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("Player {}", _0)]
#[serde(transparent)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player id. Whether it is seated is checked by the board.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// The 1-based player number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based seat index. Only meaningful for a seated player.
    pub(crate) fn seat(self) -> usize {
        usize::from(self.0.saturating_sub(1))
    }
}

impl From<u8> for PlayerId {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

/// Handle naming one piece: its owner and its slot within the owner's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[display("P{}-{}", player.get(), slot)]
pub struct PieceId {
    /// Owning player.
    pub player: PlayerId,
    /// Slot within the owner's pieces (0-based).
    pub slot: u8,
}

impl PieceId {
    /// Creates a piece handle.
    pub const fn new(player: PlayerId, slot: u8) -> Self {
        Self { player, slot }
    }
}

/// Where a piece currently is. Exactly one variant holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "at", content = "index", rename_all = "snake_case")]
pub enum Location {
    /// Waiting in the owner's base.
    #[default]
    #[display("base")]
    InBase,
    /// On the shared ring at an absolute cell.
    #[display("track {}", _0)]
    OnTrack(usize),
    /// In the owner's home lane; slot 0 is nearest the turn-off.
    #[display("home {}", _0)]
    InHome(usize),
}

/// A single playing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}@{}", id, location)]
pub struct Piece {
    id: PieceId,
    location: Location,
}

impl Piece {
    /// A piece waiting in base.
    pub(crate) fn new(id: PieceId) -> Self {
        Self {
            id,
            location: Location::InBase,
        }
    }

    /// This piece's handle.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Owning player.
    pub fn owner(&self) -> PlayerId {
        self.id.player
    }

    /// Slot within the owner's pieces.
    pub fn slot(&self) -> u8 {
        self.id.slot
    }

    /// Current location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// True while waiting in base.
    pub fn is_in_base(&self) -> bool {
        matches!(self.location, Location::InBase)
    }

    /// True while on the shared ring.
    pub fn is_on_track(&self) -> bool {
        matches!(self.location, Location::OnTrack(_))
    }

    /// True once in the home lane.
    pub fn is_in_home(&self) -> bool {
        matches!(self.location, Location::InHome(_))
    }

    /// Absolute ring cell, if on the track.
    pub fn track_position(&self) -> Option<usize> {
        match self.location {
            Location::OnTrack(pos) => Some(pos),
            _ => None,
        }
    }

    /// Home lane slot, if home.
    pub fn home_slot(&self) -> Option<usize> {
        match self.location {
            Location::InHome(slot) => Some(slot),
            _ => None,
        }
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}
