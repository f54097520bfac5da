//! Precomputed attack tables for leaper pieces (knights, kings, pawns).
//!
//! Each pattern is built by shifting the origin bit and masking off the files a
//! shift could wrap onto, so a jump from the g/h files never lands on a/b.

use once_cell::sync::Lazy;

use super::super::types::Bitboard;

const NOT_A: u64 = Bitboard::NOT_FILE_A.0;
const NOT_H: u64 = Bitboard::NOT_FILE_H.0;
const NOT_AB: u64 = Bitboard::NOT_FILE_AB.0;
const NOT_GH: u64 = Bitboard::NOT_FILE_GH.0;

fn knight_pattern(bit: u64) -> u64 {
    ((bit << 17) & NOT_A)
        | ((bit << 15) & NOT_H)
        | ((bit << 10) & NOT_AB)
        | ((bit << 6) & NOT_GH)
        | ((bit >> 17) & NOT_H)
        | ((bit >> 15) & NOT_A)
        | ((bit >> 10) & NOT_GH)
        | ((bit >> 6) & NOT_AB)
}

fn king_pattern(bit: u64) -> u64 {
    let sideways = ((bit << 1) & NOT_A) | ((bit >> 1) & NOT_H);
    let row = bit | sideways;
    sideways | (row << 8) | (row >> 8)
}

fn white_pawn_pattern(bit: u64) -> u64 {
    ((bit << 9) & NOT_A) | ((bit << 7) & NOT_H)
}

fn black_pawn_pattern(bit: u64) -> u64 {
    ((bit >> 7) & NOT_A) | ((bit >> 9) & NOT_H)
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = knight_pattern(1u64 << sq);
    }
    attacks
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = king_pattern(1u64 << sq);
    }
    attacks
});

/// `PAWN_ATTACKS[color][square]`: squares a pawn of `color` on `square` attacks
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        attacks[0][sq] = white_pawn_pattern(1u64 << sq);
        attacks[1][sq] = black_pawn_pattern(1u64 << sq);
    }
    attacks
});
