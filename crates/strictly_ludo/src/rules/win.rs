//! Win detection.

use crate::{Board, Piece, PlayerId};
use tracing::instrument;

/// Returns the first player, in seat order, whose pieces are all home.
///
/// Evaluated from scratch on every call.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<PlayerId> {
    board.players().find(|&player| {
        board
            .pieces_of(player)
            .map(|pieces| pieces.iter().all(Piece::is_in_home))
            .unwrap_or(false)
    })
}
