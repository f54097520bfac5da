use super::push_piece_moves;
use crate::board::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use crate::board::state::Position;
use crate::board::types::{pop_lsb, Bitboard, MoveList, Piece, Square};

impl Position {
    /// Bishops, then rooks, then queens.
    pub(crate) fn generate_slider_moves(&self, moves: &mut MoveList) {
        self.generate_sliding(Piece::Bishop, bishop_attacks, moves);
        self.generate_sliding(Piece::Rook, rook_attacks, moves);
        self.generate_sliding(Piece::Queen, queen_attacks, moves);
    }

    fn generate_sliding(
        &self,
        piece: Piece,
        attacks: fn(Square, Bitboard) -> Bitboard,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let occupied = self.occupied();
        let own = self.occupied_by(color);
        let enemies = self.occupied_by(color.opponent());

        let mut sliders = self.pieces(color, piece);
        while !sliders.is_empty() {
            let from = pop_lsb(&mut sliders);
            push_piece_moves(from, attacks(from, occupied) & !own, enemies, moves);
        }
    }
}
