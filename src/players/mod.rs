//! Computer players.

mod eager;
mod random;

pub use eager::EagerPlayer;
pub use random::RandomPlayer;

use crate::config::Strategy;
use strictly_ludo::{Board, Die, PieceId};

/// Trait for players that pick which piece to move.
pub trait ComputerPlayer {
    /// Picks one of `candidates` to move with `die`.
    ///
    /// `candidates` holds only pieces with a legal move and is never empty.
    /// Returning `None` passes.
    fn choose(&mut self, board: &Board, die: Die, candidates: &[PieceId]) -> Option<PieceId>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Builds the player for a strategy.
pub fn player_for(strategy: Strategy, name: impl Into<String>, seed: u64) -> Box<dyn ComputerPlayer> {
    match strategy {
        Strategy::Random => Box::new(RandomPlayer::new(name, seed)),
        Strategy::Eager => Box::new(EagerPlayer::new(name)),
    }
}
