//! Move requests and their outcomes.
//!
//! Moves are domain values: a turn controller builds a [`Move`], the board
//! validates it into a [`Transition`] and only then commits it.

use crate::{Die, Location, PieceId, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request to move one piece by one die roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// Which of the player's pieces moves.
    pub slot: u8,
    /// The die roll being spent.
    pub die: Die,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: PlayerId, slot: u8, die: Die) -> Self {
        Self { player, slot, die }
    }

    /// Handle of the piece being moved.
    pub fn piece(&self) -> PieceId {
        PieceId::new(self.player, self.slot)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolls {}", self.piece(), self.die)
    }
}

/// Why a move was refused. Refusals are ordinary game events, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// A piece in base needs a six to come out.
    #[display("a six is needed to leave base")]
    NeedSixToLeaveBase,
    /// The destination track cell holds one of the mover's own pieces.
    #[display("destination is blocked by an own piece")]
    BlockedByOwnPiece,
    /// The roll would carry the piece past the last home slot.
    #[display("roll overshoots the home lane")]
    Overshoot,
    /// The destination home slot is already taken.
    #[display("home slot is already occupied")]
    HomeSlotOccupied,
}

/// A validated, not yet applied, single-piece move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Transition {
    /// Piece that moves.
    piece: PieceId,
    /// Where it starts.
    from: Location,
    /// Where it ends.
    to: Location,
    /// Opponent sent back to base, if any.
    capture: Option<PieceId>,
}

impl Transition {
    pub(crate) fn new(piece: PieceId, from: Location, to: Location, capture: Option<PieceId>) -> Self {
        Self {
            piece,
            from,
            to,
            capture,
        }
    }
}

/// Result of [`Board::move_piece`](crate::Board::move_piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The piece moved; an opposing piece may have been captured.
    Moved {
        /// Where the piece started.
        from: Location,
        /// Where it ended.
        to: Location,
        /// Opposing piece sent back to base.
        captured: Option<PieceId>,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Whether the piece moved.
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    /// Whether an opposing piece was captured.
    pub fn captured(&self) -> bool {
        self.captured_piece().is_some()
    }

    /// The captured piece, if any.
    pub fn captured_piece(&self) -> Option<PieceId> {
        match self {
            MoveOutcome::Moved { captured, .. } => *captured,
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// The refusal reason, if the move was rejected.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            MoveOutcome::Moved { .. } => None,
        }
    }
}

impl From<Transition> for MoveOutcome {
    fn from(transition: Transition) -> Self {
        MoveOutcome::Moved {
            from: transition.from,
            to: transition.to,
            captured: transition.capture,
        }
    }
}

impl From<Rejection> for MoveOutcome {
    fn from(reason: Rejection) -> Self {
        MoveOutcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_triple() {
        let victim = PieceId::new(PlayerId::new(2), 1);
        let outcome = MoveOutcome::Moved {
            from: Location::InBase,
            to: Location::OnTrack(0),
            captured: Some(victim),
        };
        assert!(outcome.moved());
        assert!(outcome.captured());
        assert_eq!(outcome.captured_piece(), Some(victim));

        let rejected = MoveOutcome::from(Rejection::Overshoot);
        assert!(!rejected.moved());
        assert!(!rejected.captured());
        assert_eq!(rejected.rejection(), Some(Rejection::Overshoot));
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(PlayerId::new(3), 1, Die::SIX);
        assert_eq!(mv.to_string(), "P3-1 rolls 6");
        assert_eq!(mv.piece(), PieceId::new(PlayerId::new(3), 1));
    }
}
