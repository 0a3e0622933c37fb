//! Canonical piece geometry and single-piece movement.
//!
//! The board owns every piece in one collection indexed by `(player, slot)`.
//! Track occupancy is derived from the pieces' own locations, so there is no
//! second map that could disagree with them.

use crate::invariants::debug_assert_invariants;
use crate::{
    BoardConfig, Die, EngineError, Location, MoveOutcome, Piece, PieceId, PlayerId, Rejection,
    Transition,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Validation result of a prospective move.
pub type MovePlan = Result<Transition, Rejection>;

/// Race-and-capture board: a shared ring, a base and a home lane per player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    config: BoardConfig,
    /// Pieces in seat order, `pieces_per_player` per seat.
    pieces: Vec<Piece>,
}

impl Board {
    /// Creates a board with every piece in base.
    #[instrument]
    pub fn new(config: BoardConfig) -> Result<Self, EngineError> {
        config.validate()?;
        debug!(players = config.players(), track_length = config.track_length(), "Board created");
        Ok(Self::seated(config))
    }

    fn seated(config: BoardConfig) -> Self {
        let pieces = (1..=config.players())
            .flat_map(|player| {
                (0..config.pieces_per_player())
                    .map(move |slot| Piece::new(PieceId::new(PlayerId::new(player), slot)))
            })
            .collect();
        Self { config, pieces }
    }

    /// Reference geometry with `players` seats.
    #[instrument]
    pub fn with_players(players: u8) -> Result<Self, EngineError> {
        Self::new(BoardConfig::with_players(players)?)
    }

    /// The board's geometry.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Seated players in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + use<> {
        (1..=self.config.players()).map(PlayerId::new)
    }

    /// Every piece, in seat order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The pieces of one player.
    pub fn pieces_of(&self, player: PlayerId) -> Result<&[Piece], EngineError> {
        self.check_player(player)?;
        let per_player = usize::from(self.config.pieces_per_player());
        let start = player.seat() * per_player;
        Ok(&self.pieces[start..start + per_player])
    }

    /// Looks up a piece by handle.
    pub fn piece(&self, id: PieceId) -> Result<&Piece, EngineError> {
        let index = self.index_of(id)?;
        Ok(&self.pieces[index])
    }

    /// Looks up a player's piece by slot.
    ///
    /// Fails with an out-of-range error for an unseated player or a slot
    /// outside `0..pieces_per_player`.
    pub fn get_player_piece(&self, player: PlayerId, slot: u8) -> Result<&Piece, EngineError> {
        self.piece(PieceId::new(player, slot))
    }

    /// Track cell a player's piece lands on when leaving base.
    pub fn entry_index_for_player(&self, player: PlayerId) -> Result<usize, EngineError> {
        self.check_player(player)?;
        Ok(self.entry_index(player))
    }

    /// Last track cell before a player's home lane turn-off.
    ///
    /// This is the cell just behind the player's entry cell: a piece goes once
    /// round the ring and then turns off into its home lane.
    pub fn home_base_for_player(&self, player: PlayerId) -> Result<usize, EngineError> {
        self.check_player(player)?;
        Ok(self.home_turnoff(player))
    }

    /// The piece on a track cell, if any.
    pub fn piece_at(&self, position: usize) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.track_position() == Some(position))
    }

    /// True if no piece stands on the track cell.
    pub fn is_track_free(&self, position: usize) -> bool {
        self.piece_at(position).is_none()
    }

    /// The piece in one of a player's home slots, if any.
    pub fn piece_in_home(&self, player: PlayerId, slot: usize) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.owner() == player && p.home_slot() == Some(slot))
    }

    // ─────────────────────────────────────────────────────────────
    //  Administrative placement
    // ─────────────────────────────────────────────────────────────

    /// Puts a piece directly on a track cell, bypassing movement rules.
    ///
    /// This is a setup escape hatch for tests and scenario loading. It checks
    /// bounds and refuses to stack two pieces on one cell, nothing more. Game
    /// play goes through [`Board::move_piece`].
    #[instrument(skip(self))]
    pub fn place_piece(&mut self, id: PieceId, position: usize) -> Result<(), EngineError> {
        let index = self.index_of(id)?;
        if position >= self.config.track_length() {
            return Err(EngineError::TrackPositionOutOfRange {
                position,
                track_length: self.config.track_length(),
            });
        }
        if let Some(occupant) = self.piece_at(position)
            && occupant.id() != id
        {
            return Err(EngineError::TrackCellOccupied {
                position,
                occupant: occupant.id(),
            });
        }
        self.pieces[index].set_location(Location::OnTrack(position));
        debug_assert_invariants(self);
        Ok(())
    }

    /// Puts a piece directly into one of its owner's home slots.
    ///
    /// Same contract as [`Board::place_piece`].
    #[instrument(skip(self))]
    pub fn place_in_home(&mut self, id: PieceId, slot: usize) -> Result<(), EngineError> {
        let index = self.index_of(id)?;
        if slot >= self.config.home_size() {
            return Err(EngineError::HomeSlotOutOfRange {
                slot,
                home_size: self.config.home_size(),
            });
        }
        if let Some(occupant) = self.piece_in_home(id.player, slot)
            && occupant.id() != id
        {
            return Err(EngineError::HomeSlotOccupied {
                slot,
                occupant: occupant.id(),
            });
        }
        self.pieces[index].set_location(Location::InHome(slot));
        debug_assert_invariants(self);
        Ok(())
    }

    /// Sends a piece back to its base.
    #[instrument(skip(self))]
    pub fn send_to_base(&mut self, id: PieceId) -> Result<(), EngineError> {
        let index = self.index_of(id)?;
        self.pieces[index].set_location(Location::InBase);
        Ok(())
    }

    /// Returns every piece to base.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        for piece in &mut self.pieces {
            piece.set_location(Location::InBase);
        }
        debug!("Board cleared");
    }

    // ─────────────────────────────────────────────────────────────
    //  Movement
    // ─────────────────────────────────────────────────────────────

    /// Validates a move without applying it.
    ///
    /// The outer `Result` reports structural misuse (an unknown piece); the
    /// inner [`MovePlan`] is the game-rule verdict.
    pub fn plan_move(&self, id: PieceId, die: Die) -> Result<MovePlan, EngineError> {
        let piece = self.piece(id)?;
        let from = piece.location();
        let track_length = self.config.track_length();

        let plan = match from {
            Location::InBase => {
                if die.is_six() {
                    self.land_on_track(id, from, self.entry_index(id.player))
                } else {
                    Err(Rejection::NeedSixToLeaveBase)
                }
            }
            Location::OnTrack(position) => {
                let turnoff = self.home_turnoff(id.player);
                let distance_to_turnoff = (turnoff + track_length - position) % track_length;
                let steps = die.steps();
                if steps <= distance_to_turnoff {
                    self.land_on_track(id, from, (position + steps) % track_length)
                } else {
                    self.land_in_home(id, from, steps - distance_to_turnoff - 1)
                }
            }
            Location::InHome(slot) => self.land_in_home(id, from, slot + die.steps()),
        };

        Ok(plan)
    }

    /// Moves one piece by one die roll.
    ///
    /// A rejected move leaves the board untouched. A move onto an opposing
    /// piece on the shared ring sends that piece back to base and reports it.
    /// The only error is an unknown piece handle.
    #[instrument(skip_all, fields(piece = %id, die = %die))]
    pub fn move_piece(&mut self, id: PieceId, die: Die) -> Result<MoveOutcome, EngineError> {
        match self.plan_move(id, die)? {
            Ok(transition) => {
                self.commit(&transition)?;
                debug!(from = %transition.from(), to = %transition.to(), captured = ?transition.capture(), "Piece moved");
                Ok(transition.into())
            }
            Err(reason) => {
                debug!(%reason, "Move rejected");
                Ok(reason.into())
            }
        }
    }

    /// Applies a validated transition.
    fn commit(&mut self, transition: &Transition) -> Result<(), EngineError> {
        let mover = self.index_of(*transition.piece())?;
        if let Some(victim) = transition.capture() {
            let victim = self.index_of(*victim)?;
            self.pieces[victim].set_location(Location::InBase);
        }
        self.pieces[mover].set_location(*transition.to());
        debug_assert_invariants(self);
        Ok(())
    }

    fn land_on_track(&self, id: PieceId, from: Location, target: usize) -> MovePlan {
        match self.piece_at(target) {
            Some(occupant) if occupant.owner() == id.player => Err(Rejection::BlockedByOwnPiece),
            Some(occupant) => Ok(Transition::new(
                id,
                from,
                Location::OnTrack(target),
                Some(occupant.id()),
            )),
            None => Ok(Transition::new(id, from, Location::OnTrack(target), None)),
        }
    }

    fn land_in_home(&self, id: PieceId, from: Location, slot: usize) -> MovePlan {
        if slot >= self.config.home_size() {
            return Err(Rejection::Overshoot);
        }
        if self.piece_in_home(id.player, slot).is_some() {
            return Err(Rejection::HomeSlotOccupied);
        }
        Ok(Transition::new(id, from, Location::InHome(slot), None))
    }

    // ─────────────────────────────────────────────────────────────
    //  Geometry
    // ─────────────────────────────────────────────────────────────

    fn entry_index(&self, player: PlayerId) -> usize {
        (player.seat() * self.config.entry_spacing()) % self.config.track_length()
    }

    fn home_turnoff(&self, player: PlayerId) -> usize {
        let track_length = self.config.track_length();
        (self.entry_index(player) + track_length - 1) % track_length
    }

    fn check_player(&self, player: PlayerId) -> Result<(), EngineError> {
        if (1..=self.config.players()).contains(&player.get()) {
            Ok(())
        } else {
            Err(EngineError::PlayerOutOfRange {
                player,
                players: self.config.players(),
            })
        }
    }

    fn index_of(&self, id: PieceId) -> Result<usize, EngineError> {
        self.check_player(id.player)?;
        let per_player = self.config.pieces_per_player();
        if id.slot >= per_player {
            return Err(EngineError::SlotOutOfRange {
                slot: id.slot,
                pieces: per_player,
            });
        }
        Ok(id.player.seat() * usize::from(per_player) + usize::from(id.slot))
    }

    #[cfg(test)]
    pub(crate) fn force_location(&mut self, id: PieceId, location: Location) {
        let index = self.index_of(id).expect("valid piece in test");
        self.pieces[index].set_location(location);
    }

    /// Formats the board as a per-player summary.
    pub fn display(&self) -> String {
        let mut lines = Vec::new();
        for player in self.players() {
            let mut base = 0;
            let mut track = Vec::new();
            let mut home = Vec::new();
            for piece in self.pieces.iter().filter(|p| p.owner() == player) {
                match piece.location() {
                    Location::InBase => base += 1,
                    Location::OnTrack(pos) => track.push(pos.to_string()),
                    Location::InHome(slot) => home.push(slot.to_string()),
                }
            }
            lines.push(format!(
                "{}: base {} | track [{}] | home [{}]",
                player,
                base,
                track.join(", "),
                home.join(", ")
            ));
        }
        lines.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seated(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(player: u8, slot: u8) -> PieceId {
        PieceId::new(PlayerId::new(player), slot)
    }

    fn die(value: u8) -> Die {
        Die::new(value).unwrap()
    }

    #[test]
    fn test_new_board_all_in_base() {
        let board = Board::default();
        assert_eq!(board.pieces().len(), 16);
        assert!(board.pieces().iter().all(Piece::is_in_base));
        assert_eq!(board.players().count(), 4);
    }

    #[test]
    fn test_geometry_reference_board() {
        let board = Board::default();
        let entries: Vec<_> = board
            .players()
            .map(|p| board.entry_index_for_player(p).unwrap())
            .collect();
        assert_eq!(entries, vec![0, 10, 20, 30]);
        let turnoffs: Vec<_> = board
            .players()
            .map(|p| board.home_base_for_player(p).unwrap())
            .collect();
        assert_eq!(turnoffs, vec![39, 9, 19, 29]);
    }

    #[test]
    fn test_lookup_out_of_range() {
        let board = Board::with_players(2).unwrap();
        assert!(matches!(
            board.get_player_piece(PlayerId::new(3), 0),
            Err(EngineError::PlayerOutOfRange { .. })
        ));
        assert!(matches!(
            board.get_player_piece(PlayerId::new(0), 0),
            Err(EngineError::PlayerOutOfRange { .. })
        ));
        assert!(matches!(
            board.get_player_piece(PlayerId::new(1), 4),
            Err(EngineError::SlotOutOfRange { .. })
        ));
    }

    #[test]
    fn test_pieces_of_slices_by_seat() {
        let board = Board::default();
        let pieces = board.pieces_of(PlayerId::new(3)).unwrap();
        assert_eq!(pieces.len(), 4);
        assert!(pieces.iter().all(|p| p.owner() == PlayerId::new(3)));
        assert_eq!(pieces[2].slot(), 2);
    }

    #[test]
    fn test_place_piece_bounds_and_stacking() {
        let mut board = Board::default();
        assert!(matches!(
            board.place_piece(piece(1, 0), 40),
            Err(EngineError::TrackPositionOutOfRange { .. })
        ));
        board.place_piece(piece(1, 0), 12).unwrap();
        assert_eq!(board.piece_at(12).map(Piece::id), Some(piece(1, 0)));
        assert!(!board.is_track_free(12));
        assert!(matches!(
            board.place_piece(piece(2, 0), 12),
            Err(EngineError::TrackCellOccupied { .. })
        ));
        // Re-placing onto its own cell is fine.
        board.place_piece(piece(1, 0), 12).unwrap();
    }

    #[test]
    fn test_track_wraps_around() {
        let mut board = Board::default();
        // Player 2 turns off at 9, so from 37 it keeps circling.
        board.place_piece(piece(2, 0), 37).unwrap();
        let outcome = board.move_piece(piece(2, 0), die(5)).unwrap();
        assert!(outcome.moved());
        assert_eq!(board.piece(piece(2, 0)).unwrap().track_position(), Some(2));
    }

    #[test]
    fn test_capture_on_track() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 3).unwrap();
        board.place_piece(piece(3, 2), 7).unwrap();
        let outcome = board.move_piece(piece(1, 0), die(4)).unwrap();
        assert!(outcome.moved());
        assert_eq!(outcome.captured_piece(), Some(piece(3, 2)));
        assert!(board.piece(piece(3, 2)).unwrap().is_in_base());
        assert_eq!(board.piece_at(7).map(Piece::id), Some(piece(1, 0)));
    }

    #[test]
    fn test_own_piece_blocks_on_track() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 3).unwrap();
        board.place_piece(piece(1, 1), 5).unwrap();
        let before = board.clone();
        let outcome = board.move_piece(piece(1, 0), die(2)).unwrap();
        assert_eq!(outcome.rejection(), Some(Rejection::BlockedByOwnPiece));
        assert_eq!(board, before);
    }

    #[test]
    fn test_turn_into_home_slot_arithmetic() {
        let mut board = Board::default();
        // Player 1 turns off after 39; from 37 the distance is 2.
        board.place_piece(piece(1, 0), 37).unwrap();
        let outcome = board.move_piece(piece(1, 0), die(5)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Location::OnTrack(37),
                to: Location::InHome(2),
                captured: None,
            }
        );
    }

    #[test]
    fn test_exact_landing_on_turnoff_stays_on_track() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 37).unwrap();
        board.move_piece(piece(1, 0), die(2)).unwrap();
        assert_eq!(board.piece(piece(1, 0)).unwrap().track_position(), Some(39));
    }

    #[test]
    fn test_no_capture_when_turning_home() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 38).unwrap();
        // An opponent sits on the cell the roll would reach if the ring continued.
        board.place_piece(piece(2, 0), 0).unwrap();
        let outcome = board.move_piece(piece(1, 0), die(2)).unwrap();
        assert!(outcome.moved());
        assert!(!outcome.captured());
        assert!(board.piece(piece(2, 0)).unwrap().is_on_track());
        assert_eq!(board.piece(piece(1, 0)).unwrap().home_slot(), Some(0));
    }

    #[test]
    fn test_home_entry_overshoot_rejected() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 38).unwrap();
        let before = board.clone();
        // distance 1, slot = 6 - 1 - 1 = 4 >= home size
        let outcome = board.move_piece(piece(1, 0), die(6)).unwrap();
        assert_eq!(outcome.rejection(), Some(Rejection::Overshoot));
        assert_eq!(board, before);
    }

    #[test]
    fn test_home_entry_onto_occupied_slot_rejected() {
        let mut board = Board::default();
        board.place_in_home(piece(1, 1), 1).unwrap();
        board.place_piece(piece(1, 0), 39).unwrap();
        let before = board.clone();
        let outcome = board.move_piece(piece(1, 0), die(2)).unwrap();
        assert_eq!(outcome.rejection(), Some(Rejection::HomeSlotOccupied));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_within_home() {
        let mut board = Board::default();
        board.place_in_home(piece(2, 0), 0).unwrap();
        assert!(board.move_piece(piece(2, 0), die(2)).unwrap().moved());
        assert_eq!(board.piece(piece(2, 0)).unwrap().home_slot(), Some(2));

        board.place_in_home(piece(2, 1), 3).unwrap();
        let outcome = board.move_piece(piece(2, 0), die(1)).unwrap();
        assert_eq!(outcome.rejection(), Some(Rejection::HomeSlotOccupied));
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 3).unwrap();
        board.place_piece(piece(2, 0), 9).unwrap();
        let before = board.clone();
        let plan = board.plan_move(piece(1, 0), Die::SIX).unwrap().unwrap();
        assert_eq!(plan.capture(), &Some(piece(2, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_send_to_base_frees_cell() {
        let mut board = Board::default();
        board.place_piece(piece(2, 1), 14).unwrap();
        board.send_to_base(piece(2, 1)).unwrap();
        assert!(board.is_track_free(14));
        assert!(board.piece(piece(2, 1)).unwrap().is_in_base());
        assert!(board.send_to_base(piece(5, 0)).is_err());
    }

    #[test]
    fn test_clear_returns_everything_to_base() {
        let mut board = Board::default();
        board.place_piece(piece(1, 0), 3).unwrap();
        board.place_in_home(piece(4, 3), 0).unwrap();
        board.clear();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_display_summary() {
        let mut board = Board::with_players(2).unwrap();
        board.place_piece(piece(1, 0), 3).unwrap();
        board.place_in_home(piece(2, 1), 0).unwrap();
        assert_eq!(
            board.display(),
            "Player 1: base 3 | track [3] | home []\nPlayer 2: base 3 | track [] | home [0]"
        );
    }
}
