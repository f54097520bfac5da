//! Attack tables for move generation.
//!
//! Leapers (knight, king, pawn) use per-square tables built once on first use.
//! Sliders (bishop, rook, queen) are ray-cast against the current occupancy:
//! each ray includes the first occupied square it meets and stops there.

mod tables;

use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use super::types::{Bitboard, Color, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

#[inline]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

/// Squares attacked by a pawn of `color` standing on `sq`
#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][sq.index()])
}

fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[(i8, i8); 4]) -> Bitboard {
    let rank = sq.rank() as i8;
    let file = sq.file() as i8;
    let mut attacks = 0u64;

    for &(dr, df) in directions {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupied.0 & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }

    Bitboard(attacks)
}

#[must_use]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

#[must_use]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

#[must_use]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}
