use crate::board::attack_tables::pawn_attacks;
use crate::board::state::Position;
use crate::board::types::{pop_lsb, Bitboard, Color, Move, MoveList, Piece, PromotionPiece, Square};

/// One emission pass over a set of destinations reached by the same index step.
fn emit(targets: Bitboard, step: i8, moves: &mut MoveList, make: impl Fn(Square, Square) -> Move) {
    let mut targets = targets;
    while !targets.is_empty() {
        let to = pop_lsb(&mut targets);
        if let Some(from) = to.offset(-step) {
            moves.push(make(from, to));
        }
    }
}

fn emit_promotions(
    targets: Bitboard,
    step: i8,
    moves: &mut MoveList,
    make: fn(Square, Square, PromotionPiece) -> Move,
) {
    let mut targets = targets;
    while !targets.is_empty() {
        let to = pop_lsb(&mut targets);
        if let Some(from) = to.offset(-step) {
            for piece in PromotionPiece::ALL {
                moves.push(make(from, to, piece));
            }
        }
    }
}

/// Shift every pawn one step forward and optionally one file sideways.
fn advance(pawns: Bitboard, color: Color, file_delta: i8) -> Bitboard {
    let forward = match color {
        Color::White => pawns.shift_north(),
        Color::Black => pawns.shift_south(),
    };
    match file_delta {
        0 => forward,
        -1 => Bitboard(forward.0 >> 1) & Bitboard::NOT_FILE_H,
        _ => Bitboard(forward.0 << 1) & Bitboard::NOT_FILE_A,
    }
}

impl Position {
    /// Pawn candidates in a fixed order: single pushes, double pushes,
    /// captures toward the a-file then the h-file, promotion pushes,
    /// promotion captures (same file order), and finally en passant.
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move();
        let pawns = self.pieces(color, Piece::Pawn);
        if pawns.is_empty() {
            return;
        }

        let empty = !self.occupied();
        let enemies = self.occupied_by(color.opponent());
        let promotion_rank = Bitboard::rank_mask(color.promotion_rank());
        let double_rank = Bitboard::rank_mask(if color == Color::White { 3 } else { 4 });
        let step = color.pawn_step();
        let left_step = step - 1;
        let right_step = step + 1;

        let single = advance(pawns, color, 0) & empty;
        emit(single & !promotion_rank, step, moves, Move::quiet);

        let double = advance(single, color, 0) & empty & double_rank;
        emit(double, 2 * step, moves, Move::double_pawn_push);

        let left = advance(pawns, color, -1) & enemies;
        let right = advance(pawns, color, 1) & enemies;
        emit(left & !promotion_rank, left_step, moves, Move::capture);
        emit(right & !promotion_rank, right_step, moves, Move::capture);

        emit_promotions(single & promotion_rank, step, moves, Move::promotion);
        emit_promotions(left & promotion_rank, left_step, moves, Move::promotion_capture);
        emit_promotions(right & promotion_rank, right_step, moves, Move::promotion_capture);

        if let Some(target) = self.en_passant {
            let mut capturers = pawn_attacks(color.opponent(), target) & pawns;
            while !capturers.is_empty() {
                let from = pop_lsb(&mut capturers);
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}
