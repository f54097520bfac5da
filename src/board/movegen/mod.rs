//! Pseudo-legal and legal move generation.
//!
//! Candidates are produced per piece type (pawns, knights, bishops, rooks,
//! queens, king) and then filtered by playing each one and asking whether the
//! mover's king is left attacked.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Position;
use super::types::{pop_lsb, Bitboard, Color, Move, MoveList, Square};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check but has legal replies
    Check,
    Checkmate {
        winner: Color,
    },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Emit one move per bit in `targets`, tagged as a capture when an enemy
/// piece stands there.
fn push_piece_moves(from: Square, targets: Bitboard, enemies: Bitboard, moves: &mut MoveList) {
    let mut targets = targets;
    while !targets.is_empty() {
        let to = pop_lsb(&mut targets);
        if enemies.contains(to) {
            moves.push(Move::capture(from, to));
        } else {
            moves.push(Move::quiet(from, to));
        }
    }
}

impl Position {
    /// Every move the side to move could make, ignoring king safety.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(&mut moves);
        self.generate_king_moves(&mut moves);
        moves
    }

    /// Moves that do not leave the mover's own king attacked.
    ///
    /// Each candidate is applied and reverted, so the position is borrowed
    /// mutably but ends up unchanged.
    pub fn legal_moves(&mut self) -> MoveList {
        let mover = self.side_to_move();
        let candidates = self.pseudo_legal_moves();
        let mut legal = MoveList::new();
        for mv in candidates {
            self.apply_move(mv);
            if !self.king_in_check(mover == Color::White) {
                legal.push(mv);
            }
            self.revert_move();
        }
        log_trace!(
            "{} legal moves for {} in {}",
            legal.len(),
            mover,
            self.to_fen()
        );
        legal
    }

    /// The side to move's king is attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.king_in_check(self.white_to_move)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }

    pub fn status(&mut self) -> GameStatus {
        let in_check = self.in_check();
        let no_moves = self.legal_moves().is_empty();
        match (in_check, no_moves) {
            (true, true) => GameStatus::Checkmate {
                winner: self.side_to_move().opponent(),
            },
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        }
    }
}
