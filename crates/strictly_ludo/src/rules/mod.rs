//! Turn-level rules layered on [`Board`].
//!
//! Whose turn it is stays with the caller. The rules answer which pieces can
//! move, forward moves to the board and detect the winner.

pub mod win;

pub use win::check_winner;

use crate::{Board, Die, EngineError, Move, MoveOutcome, PieceId, PlayerId};
use tracing::{debug, info, instrument};

/// Pieces of `player` that can legally move with `die`.
#[instrument(skip(board))]
pub fn valid_moves(board: &Board, player: PlayerId, die: Die) -> Result<Vec<PieceId>, EngineError> {
    let mut movable = Vec::new();
    for piece in board.pieces_of(player)? {
        if board.plan_move(piece.id(), die)?.is_ok() {
            movable.push(piece.id());
        }
    }
    Ok(movable)
}

/// Rules view over a borrowed board.
///
/// The board is only ever changed through [`Board::move_piece`] and
/// [`Board::clear`].
#[derive(Debug)]
pub struct Rules<'a> {
    board: &'a mut Board,
    last_roll: Option<Die>,
}

impl<'a> Rules<'a> {
    /// Wraps a board.
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            last_roll: None,
        }
    }

    /// The board being ruled.
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// The player whose pieces are all home, if any.
    pub fn check_if_player_won(&self) -> Option<PlayerId> {
        check_winner(self.board)
    }

    /// Pieces of `player` that can legally move with `die`.
    pub fn valid_moves(&self, player: PlayerId, die: Die) -> Result<Vec<PieceId>, EngineError> {
        valid_moves(self.board, player, die)
    }

    /// Whether `player` has any legal move with `die`.
    pub fn moves_possible(&self, player: PlayerId, die: Die) -> Result<bool, EngineError> {
        Ok(!self.valid_moves(player, die)?.is_empty())
    }

    /// Applies a move request.
    ///
    /// Unknown players or slots are errors; rule refusals come back as a
    /// rejected outcome. The roll is remembered whatever the outcome.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn do_move(&mut self, mv: Move) -> Result<MoveOutcome, EngineError> {
        self.last_roll = Some(mv.die);
        let outcome = self.board.move_piece(mv.piece(), mv.die)?;
        if let Some(victim) = outcome.captured_piece() {
            info!(by = %mv.piece(), %victim, "Piece captured");
        }
        debug!(?outcome, "Move resolved");
        Ok(outcome)
    }

    /// The die spent by the last [`Rules::do_move`].
    pub fn last_roll(&self) -> Option<Die> {
        self.last_roll
    }

    /// Whether the last roll earns the mover another roll.
    pub fn last_move_gives_extra_turn(&self) -> bool {
        self.last_roll.is_some_and(Die::is_six)
    }

    /// Sends every piece back to base and forgets the last roll.
    pub fn clear_field(&mut self) {
        self.board.clear();
        self.last_roll = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die(value: u8) -> Die {
        Die::new(value).unwrap()
    }

    #[test]
    fn test_valid_moves_from_base_need_six() {
        let board = Board::default();
        let player = PlayerId::new(1);
        assert!(valid_moves(&board, player, die(3)).unwrap().is_empty());
        assert_eq!(valid_moves(&board, player, Die::SIX).unwrap().len(), 4);
    }

    #[test]
    fn test_valid_moves_are_exact() {
        let mut board = Board::default();
        let player = PlayerId::new(1);
        board.place_piece(PieceId::new(player, 0), 0).unwrap();
        // Entry is blocked by the own piece, so only the track piece may move.
        assert_eq!(
            valid_moves(&board, player, Die::SIX).unwrap(),
            vec![PieceId::new(player, 0)]
        );
    }

    #[test]
    fn test_valid_moves_unknown_player() {
        let board = Board::with_players(2).unwrap();
        assert!(valid_moves(&board, PlayerId::new(4), Die::SIX).is_err());
    }

    #[test]
    fn test_do_move_tracks_extra_turn() {
        let mut board = Board::default();
        let mut rules = Rules::new(&mut board);
        let player = PlayerId::new(2);

        let outcome = rules.do_move(Move::new(player, 0, Die::SIX)).unwrap();
        assert!(outcome.moved());
        assert!(rules.last_move_gives_extra_turn());

        let outcome = rules.do_move(Move::new(player, 0, die(3))).unwrap();
        assert!(outcome.moved());
        assert!(!rules.last_move_gives_extra_turn());
        assert_eq!(rules.board().piece(PieceId::new(player, 0)).unwrap().track_position(), Some(13));
    }

    #[test]
    fn test_do_move_bad_slot_is_error() {
        let mut board = Board::default();
        let mut rules = Rules::new(&mut board);
        assert!(matches!(
            rules.do_move(Move::new(PlayerId::new(1), 7, Die::SIX)),
            Err(EngineError::SlotOutOfRange { .. })
        ));
    }

    #[test]
    fn test_moves_possible_and_clear() {
        let mut board = Board::default();
        let mut rules = Rules::new(&mut board);
        let player = PlayerId::new(3);
        assert!(!rules.moves_possible(player, die(1)).unwrap());
        rules.do_move(Move::new(player, 1, Die::SIX)).unwrap();
        assert!(rules.moves_possible(player, die(1)).unwrap());
        rules.clear_field();
        assert!(!rules.moves_possible(player, die(1)).unwrap());
        assert_eq!(rules.last_roll(), None);
    }
}
