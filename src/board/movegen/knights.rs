use super::push_piece_moves;
use crate::board::attack_tables::knight_attacks;
use crate::board::state::Position;
use crate::board::types::{pop_lsb, MoveList, Piece};

impl Position {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move();
        let own = self.occupied_by(color);
        let enemies = self.occupied_by(color.opponent());

        let mut knights = self.pieces(color, Piece::Knight);
        while !knights.is_empty() {
            let from = pop_lsb(&mut knights);
            push_piece_moves(from, knight_attacks(from) & !own, enemies, moves);
        }
    }
}
