use crate::board::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use crate::board::state::Position;
use crate::board::types::{Color, Piece, Square};

impl Position {
    /// Whether any piece of the given side attacks `sq` with the current occupancy.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by_white: bool) -> bool {
        let attacker = Color::from_white(by_white);
        let occupied = self.occupied();

        // A pawn of `attacker` hits `sq` exactly when a defending pawn on `sq`
        // would hit the attacker's square.
        if !(pawn_attacks(attacker.opponent(), sq) & self.pieces(attacker, Piece::Pawn)).is_empty() {
            return true;
        }
        if !(knight_attacks(sq) & self.pieces(attacker, Piece::Knight)).is_empty() {
            return true;
        }
        if !(king_attacks(sq) & self.pieces(attacker, Piece::King)).is_empty() {
            return true;
        }

        let queens = self.pieces(attacker, Piece::Queen);
        let diagonal = self.pieces(attacker, Piece::Bishop) | queens;
        if !(bishop_attacks(sq, occupied) & diagonal).is_empty() {
            return true;
        }
        let straight = self.pieces(attacker, Piece::Rook) | queens;
        !(rook_attacks(sq, occupied) & straight).is_empty()
    }

    /// Whether the king of the given side is attacked by the other side.
    ///
    /// A board without that king is never in check.
    #[must_use]
    pub fn king_in_check(&self, white: bool) -> bool {
        let color = Color::from_white(white);
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, !white),
            None => false,
        }
    }
}
