//! Greedy computer player.

use super::ComputerPlayer;
use strictly_ludo::{Board, Die, Location, PieceId};
use tracing::debug;

/// Prefers a capture, then entering home, then leaving base, then moving the
/// piece that has travelled furthest.
pub struct EagerPlayer {
    name: String,
}

impl EagerPlayer {
    /// Creates an eager player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Orders a candidate move; larger is better.
    fn score(board: &Board, die: Die, piece: PieceId) -> Option<(u8, usize)> {
        let transition = board.plan_move(piece, die).ok()?.ok()?;
        let priority = match (transition.from(), transition.to()) {
            _ if transition.capture().is_some() => 4,
            (Location::OnTrack(_), Location::InHome(_)) => 3,
            (Location::InBase, _) => 2,
            _ => 1,
        };
        let progress = match transition.from() {
            Location::InBase => 0,
            Location::OnTrack(pos) => {
                let entry = board.entry_index_for_player(piece.player).ok()?;
                let track_length = board.config().track_length();
                (pos + track_length - entry) % track_length + 1
            }
            Location::InHome(slot) => board.config().track_length() + slot + 1,
        };
        Some((priority, progress))
    }
}

impl ComputerPlayer for EagerPlayer {
    fn choose(&mut self, board: &Board, die: Die, candidates: &[PieceId]) -> Option<PieceId> {
        let choice = candidates
            .iter()
            .copied()
            .filter_map(|piece| Self::score(board, die, piece).map(|score| (score, piece)))
            .max_by_key(|(score, _)| *score)
            .map(|(_, piece)| piece);
        debug!(ai = %self.name, %die, ?choice, "Eager player chose");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
