//! First-class board invariants.
//!
//! Invariants are properties every reachable board satisfies. The board checks
//! them after each committed move in debug builds; tests check them directly.

use crate::{Board, Location};
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: no two pieces share a track cell.
pub struct TrackCellsExclusive;

impl Invariant<Board> for TrackCellsExclusive {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board
            .pieces()
            .iter()
            .filter_map(|p| p.track_position())
            .all(|pos| seen.insert(pos))
    }

    fn description() -> &'static str {
        "No two pieces occupy the same track cell"
    }
}

/// Invariant: each home slot holds at most one piece of its owner.
///
/// Ownership is structural (a piece's home slot is always in its owner's
/// lane), so this reduces to uniqueness per player.
pub struct HomeSlotsExclusive;

impl Invariant<Board> for HomeSlotsExclusive {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board
            .pieces()
            .iter()
            .filter_map(|p| p.home_slot().map(|slot| (p.owner(), slot)))
            .all(|key| seen.insert(key))
    }

    fn description() -> &'static str {
        "Home slots hold at most one piece"
    }
}

/// Invariant: every location is inside the board's geometry.
pub struct LocationsInBounds;

impl Invariant<Board> for LocationsInBounds {
    fn holds(board: &Board) -> bool {
        let config = board.config();
        board.pieces().iter().all(|p| match p.location() {
            Location::InBase => true,
            Location::OnTrack(pos) => pos < config.track_length(),
            Location::InHome(slot) => slot < config.home_size(),
        })
    }

    fn description() -> &'static str {
        "Track cells and home slots are within bounds"
    }
}

/// All board invariants.
pub type BoardInvariants = (TrackCellsExclusive, HomeSlotsExclusive, LocationsInBounds);

/// Panics in debug builds if any board invariant is violated.
pub(crate) fn debug_assert_invariants(board: &Board) {
    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(board)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Board invariant violated: {}", descriptions);
    }
}
