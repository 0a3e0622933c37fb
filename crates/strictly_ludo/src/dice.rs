//! Dice source backed by `rand`.

use crate::Die;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// A six-sided die that remembers its last roll until reset.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
    current: Option<Die>,
}

impl Dice {
    /// A die seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// A reproducible die.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng, current: None }
    }

    /// Rolls and remembers the result.
    pub fn roll(&mut self) -> Die {
        let die = Die::ALL[self.rng.random_range(0..Die::ALL.len())];
        debug!(%die, "Rolled");
        self.current = Some(die);
        die
    }

    /// The last roll, if the die has been rolled since the last reset.
    pub fn current(&self) -> Option<Die> {
        self.current
    }

    /// True once rolled this turn.
    pub fn has_been_rolled(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the last roll for the next turn.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}
