//! Strictly Ludo - race-and-capture board game engine
//!
//! Pieces leave a private base on a six, race round a shared ring, capture
//! opponents by landing on them, and finish by threading into a private home
//! lane with an exact roll. The first player with every piece home wins.
//!
//! # Architecture
//!
//! - **Board**: canonical piece state and single-piece movement
//! - **Rules**: legal-move queries, move forwarding and win detection
//! - **Dice**: a `rand`-backed die (feature `roll`)
//!
//! Turn order is left to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_ludo::{Board, Die, PieceId, PlayerId, Rules};
//!
//! # fn example() -> Result<(), strictly_ludo::EngineError> {
//! let mut board = Board::with_players(2)?;
//! let piece = PieceId::new(PlayerId::new(1), 0);
//!
//! let outcome = board.move_piece(piece, Die::SIX)?;
//! assert!(outcome.moved());
//!
//! let rules = Rules::new(&mut board);
//! assert_eq!(rules.check_if_player_won(), None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
#[cfg(feature = "roll")]
mod dice;
mod die;
mod error;
pub mod invariants;
mod piece;
pub mod rules;

pub use action::{Move, MoveOutcome, Rejection, Transition};
pub use board::{Board, MovePlan};
pub use config::{
    BoardConfig, DEFAULT_HOME_SIZE, DEFAULT_TRACK_LENGTH, MAX_PLAYERS, MIN_PLAYERS,
    PIECES_PER_PLAYER,
};
#[cfg(feature = "roll")]
pub use dice::Dice;
pub use die::Die;
pub use error::EngineError;
pub use piece::{Location, Piece, PieceId, PlayerId};
pub use rules::{Rules, check_winner, valid_moves};
