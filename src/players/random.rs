//! Random computer player.

use super::ComputerPlayer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use strictly_ludo::{Board, Die, PieceId};
use tracing::debug;

/// Picks uniformly among the legal moves.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a seeded random player.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ComputerPlayer for RandomPlayer {
    fn choose(&mut self, _board: &Board, die: Die, candidates: &[PieceId]) -> Option<PieceId> {
        let choice = candidates.choose(&mut self.rng).copied();
        debug!(ai = %self.name, %die, ?choice, "Random player chose");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
