use super::error::HistoryError;
use super::state::Position;
use super::types::{Color, Move, MoveKind, Piece, PromotionPiece, Square};

/// Rook home corner on `color`'s back rank.
#[inline]
fn rook_corner(color: Color, kingside: bool) -> Square {
    let file = if kingside { 7 } else { 0 };
    Square::from_index(color.back_rank() * 8 + file)
}

impl Position {
    /// Apply `mv` for the side to move.
    ///
    /// The move is trusted: no legality check is made. The previous state is
    /// pushed onto the history so [`Position::revert_move`] can restore it.
    pub fn apply_move(&mut self, mv: Move) {
        self.history.push(self.snapshot());

        let color = self.side_to_move();
        let from = mv.from();
        let to = mv.to();

        let moving = self.clear_square(from).map(|(_, piece)| piece);
        let captured = match mv.kind() {
            MoveKind::Capture | MoveKind::PromotionCapture => self.clear_square(to),
            MoveKind::EnPassant => to
                .offset(-color.pawn_step())
                .and_then(|victim| self.clear_square(victim)),
            _ => None,
        };

        let placed = mv.promotion_piece().map(PromotionPiece::piece).or(moving);
        if let Some(piece) = placed {
            self.set_piece(to, color, piece);
        }

        match mv.kind() {
            MoveKind::KingCastle => self.shift_castling_rook(color, true),
            MoveKind::QueenCastle => self.shift_castling_rook(color, false),
            _ => {}
        }

        match moving {
            Some(Piece::King) => self.castling.remove_color(color),
            Some(Piece::Rook) => self.strip_rook_corner(color, from),
            _ => {}
        }
        if let Some((owner, Piece::Rook)) = captured {
            self.strip_rook_corner(owner, to);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            to.offset(-color.pawn_step())
        } else {
            None
        };
        self.white_to_move = !self.white_to_move;

        log_trace!("applied {:?} for {}, captured {:?}", mv, color, captured);
    }

    /// Undo the most recent [`Position::apply_move`].
    ///
    /// # Panics
    /// Panics when there is no applied move to undo. Use
    /// [`Position::try_revert_move`] to get an error instead.
    pub fn revert_move(&mut self) {
        if let Err(err) = self.try_revert_move() {
            panic!("revert_move called with empty history: {err}");
        }
    }

    /// Undo the most recent applied move, or report that there is none.
    pub fn try_revert_move(&mut self) -> Result<(), HistoryError> {
        let snapshot = self.history.pop().ok_or(HistoryError::Empty)?;
        self.restore(snapshot);
        Ok(())
    }

    fn shift_castling_rook(&mut self, color: Color, kingside: bool) {
        let rank = color.back_rank();
        let (rook_from, rook_to) = if kingside { (7, 5) } else { (0, 3) };
        let rook_from = Square::from_index(rank * 8 + rook_from);
        let rook_to = Square::from_index(rank * 8 + rook_to);
        if self.clear_square(rook_from).is_some() {
            self.set_piece(rook_to, color, Piece::Rook);
        }
    }

    /// A rook of `owner` left or was taken on `sq`; drop the matching right.
    fn strip_rook_corner(&mut self, owner: Color, sq: Square) {
        if sq == rook_corner(owner, true) {
            self.castling.remove(owner, true);
        } else if sq == rook_corner(owner, false) {
            self.castling.remove(owner, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::CastlingRights;

    #[test]
    fn test_double_push_sets_en_passant() {
        let mut position = Position::new();
        position.apply_move(Move::double_pawn_push(Square::E2, Square::E4));
        assert_eq!(position.en_passant_square(), Some(Square::E3));
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.piece_at(Square::E4), Some((Color::White, Piece::Pawn)));
        assert_eq!(position.piece_kind_at(Square::E2), None);

        position.apply_move(Move::quiet(Square::G8, Square::F6));
        assert_eq!(position.en_passant_square(), None);
    }

    #[test]
    fn test_black_double_push_target_is_behind() {
        let mut position = Position::new();
        position.apply_move(Move::quiet(Square::G1, Square::F3));
        position.apply_move(Move::double_pawn_push(Square::D7, Square::D5));
        assert_eq!(position.en_passant_square(), Some(Square::D6));
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let mut position = Position::empty();
        position.set_piece(Square::E5, Color::White, Piece::Pawn);
        position.set_piece(Square::D5, Color::Black, Piece::Pawn);
        position.en_passant = Some(Square::D6);

        position.apply_move(Move::en_passant(Square::E5, Square::D6));
        assert_eq!(position.piece_at(Square::D6), Some((Color::White, Piece::Pawn)));
        assert_eq!(position.piece_kind_at(Square::D5), None);
        assert_eq!(position.occupied_by_black().popcount(), 0);
    }

    #[test]
    fn test_black_en_passant_removes_pawn_ahead() {
        let mut position = Position::empty();
        position.white_to_move = false;
        position.set_piece(Square::D4, Color::Black, Piece::Pawn);
        position.set_piece(Square::E4, Color::White, Piece::Pawn);
        position.en_passant = Some(Square::E3);

        position.apply_move(Move::en_passant(Square::D4, Square::E3));
        assert_eq!(position.piece_at(Square::E3), Some((Color::Black, Piece::Pawn)));
        assert!(position.occupied_by_white().is_empty());
    }

    #[test]
    fn test_castling_moves_rook() {
        let mut position = Position::empty();
        position.set_piece(Square::E1, Color::White, Piece::King);
        position.set_piece(Square::H1, Color::White, Piece::Rook);
        position.set_piece(Square::A1, Color::White, Piece::Rook);
        position.castling = CastlingRights::all();

        position.apply_move(Move::king_castle(Square::E1, Square::G1));
        assert_eq!(position.piece_kind_at(Square::G1), Some(Piece::King));
        assert_eq!(position.piece_kind_at(Square::F1), Some(Piece::Rook));
        assert_eq!(position.piece_kind_at(Square::H1), None);
        assert!(!position.castling_rights().has(Color::White, true));
        assert!(!position.castling_rights().has(Color::White, false));
        assert!(position.castling_rights().has(Color::Black, true));

        position.revert_move();
        position.apply_move(Move::queen_castle(Square::E1, Square::C1));
        assert_eq!(position.piece_kind_at(Square::C1), Some(Piece::King));
        assert_eq!(position.piece_kind_at(Square::D1), Some(Piece::Rook));
        assert_eq!(position.piece_kind_at(Square::A1), None);
    }

    #[test]
    fn test_rook_move_strips_one_side() {
        let mut position = Position::new();
        position.clear_square(Square::H2);
        position.apply_move(Move::quiet(Square::H1, Square::H3));
        assert!(!position.castling_rights().has(Color::White, true));
        assert!(position.castling_rights().has(Color::White, false));
    }

    #[test]
    fn test_captured_rook_strips_owner_right() {
        let mut position = Position::empty();
        position.set_piece(Square::B7, Color::White, Piece::Bishop);
        position.set_piece(Square::A8, Color::Black, Piece::Rook);
        position.castling = CastlingRights::all();

        position.apply_move(Move::capture(Square::B7, Square::A8));
        assert!(!position.castling_rights().has(Color::Black, false));
        assert!(position.castling_rights().has(Color::Black, true));
        assert!(position.castling_rights().has(Color::White, true));
        assert!(position.castling_rights().has(Color::White, false));
    }

    #[test]
    fn test_promotion_places_chosen_piece() {
        let mut position = Position::empty();
        position.set_piece(Square::G7, Color::White, Piece::Pawn);
        position.set_piece(Square::H8, Color::Black, Piece::Rook);

        position.apply_move(Move::promotion_capture(
            Square::G7,
            Square::H8,
            PromotionPiece::Knight,
        ));
        assert_eq!(position.piece_at(Square::H8), Some((Color::White, Piece::Knight)));
        assert!(position.pieces(Color::White, Piece::Pawn).is_empty());
        assert!(position.occupied_by_black().is_empty());
    }

    #[test]
    fn test_revert_restores_snapshot() {
        let mut position = Position::new();
        let before = position.snapshot();
        position.apply_move(Move::double_pawn_push(Square::E2, Square::E4));
        assert_eq!(position.history_len(), 1);
        position.revert_move();
        assert_eq!(position.snapshot(), before);
        assert_eq!(position.history_len(), 0);
    }

    #[test]
    fn test_try_revert_on_empty_history() {
        let mut position = Position::new();
        assert_eq!(position.try_revert_move(), Err(HistoryError::Empty));
        assert_eq!(position.snapshot(), Position::new().snapshot());
    }

    #[test]
    #[should_panic(expected = "empty history")]
    fn test_revert_on_empty_history_panics() {
        let mut position = Position::new();
        position.revert_move();
    }
}
