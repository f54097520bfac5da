use super::push_piece_moves;
use crate::board::attack_tables::king_attacks;
use crate::board::state::Position;
use crate::board::types::{Color, Move, MoveList, Piece, Square};

/// Squares involved in one castling option, as files on the back rank.
struct CastleLane {
    kingside: bool,
    rook_file: usize,
    /// Files that must be empty (strictly between king and rook)
    between: &'static [usize],
    /// Files the king stands on, crosses, and lands on
    king_path: [usize; 3],
}

const KINGSIDE: CastleLane = CastleLane {
    kingside: true,
    rook_file: 7,
    between: &[5, 6],
    king_path: [4, 5, 6],
};

const QUEENSIDE: CastleLane = CastleLane {
    kingside: false,
    rook_file: 0,
    between: &[1, 2, 3],
    king_path: [4, 3, 2],
};

const KING_HOME_FILE: usize = 4;

impl Position {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move();
        let Some(from) = self.king_square(color) else {
            return;
        };

        let own = self.occupied_by(color);
        let enemies = self.occupied_by(color.opponent());
        push_piece_moves(from, king_attacks(from) & !own, enemies, moves);

        self.generate_castling(color, from, moves);
    }

    fn generate_castling(&self, color: Color, king: Square, moves: &mut MoveList) {
        let rank = color.back_rank();
        if king != Square::from_index(rank * 8 + KING_HOME_FILE) {
            return;
        }

        for lane in [KINGSIDE, QUEENSIDE] {
            if self.can_castle(color, &lane) {
                let to = Square::from_index(rank * 8 + lane.king_path[2]);
                let mv = if lane.kingside {
                    Move::king_castle(king, to)
                } else {
                    Move::queen_castle(king, to)
                };
                moves.push(mv);
            }
        }
    }

    fn can_castle(&self, color: Color, lane: &CastleLane) -> bool {
        if !self.castling.has(color, lane.kingside) {
            return false;
        }

        let rank = color.back_rank();
        let on_rank = |file: usize| Square::from_index(rank * 8 + file);

        if self.piece_at(on_rank(lane.rook_file)) != Some((color, Piece::Rook)) {
            return false;
        }

        let occupied = self.occupied();
        if lane.between.iter().any(|&file| occupied.contains(on_rank(file))) {
            return false;
        }

        let by_white = color == Color::Black;
        !lane
            .king_path
            .iter()
            .any(|&file| self.is_square_attacked(on_rank(file), by_white))
    }
}
