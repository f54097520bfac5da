//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PromotionPiece;
use crate::board::error::MoveParseError;
use super::square::Square;

/// What a move does to the board, beyond moving a piece from `from` to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    KingCastle,
    QueenCastle,
    Capture,
    EnPassant,
    Promotion,
    PromotionCapture,
}

impl MoveKind {
    const ALL: [MoveKind; 8] = [
        MoveKind::Quiet,
        MoveKind::DoublePawnPush,
        MoveKind::KingCastle,
        MoveKind::QueenCastle,
        MoveKind::Capture,
        MoveKind::EnPassant,
        MoveKind::Promotion,
        MoveKind::PromotionCapture,
    ];

    #[inline]
    const fn bits(self) -> u32 {
        match self {
            MoveKind::Quiet => 0,
            MoveKind::DoublePawnPush => 1,
            MoveKind::KingCastle => 2,
            MoveKind::QueenCastle => 3,
            MoveKind::Capture => 4,
            MoveKind::EnPassant => 5,
            MoveKind::Promotion => 6,
            MoveKind::PromotionCapture => 7,
        }
    }

    /// Captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::PromotionCapture
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::PromotionCapture)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::KingCastle | MoveKind::QueenCastle)
    }
}

const FROM_MASK: u32 = 0x3F;
const TO_SHIFT: u32 = 6;
const KIND_SHIFT: u32 = 12;
const PROMO_SHIFT: u32 = 15;
const HAS_PROMO: u32 = 1 << 17;

/// A single board transition.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-14: move kind
/// - bits 15-16: promotion piece
/// - bit 17:     promotion piece present
///
/// Only promotion kinds carry a promotion piece, so two moves compare equal
/// exactly when from, to, kind and promotion piece all match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Move(u32);

impl Move {
    /// Create a move of a non-promotion kind.
    ///
    /// Promotion kinds must go through [`Move::promotion`] or
    /// [`Move::promotion_capture`]; passing one here yields a queen promotion.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        if kind.is_promotion() {
            return Move::pack(from, to, kind, Some(PromotionPiece::Queen));
        }
        Move::pack(from, to, kind, None)
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::pack(from, to, MoveKind::Quiet, None)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::pack(from, to, MoveKind::Capture, None)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::pack(from, to, MoveKind::DoublePawnPush, None)
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::pack(from, to, MoveKind::EnPassant, None)
    }

    /// Create a kingside castle move (king's from and to squares)
    #[inline]
    #[must_use]
    pub const fn king_castle(from: Square, to: Square) -> Self {
        Move::pack(from, to, MoveKind::KingCastle, None)
    }

    /// Create a queenside castle move (king's from and to squares)
    #[inline]
    #[must_use]
    pub const fn queen_castle(from: Square, to: Square) -> Self {
        Move::pack(from, to, MoveKind::QueenCastle, None)
    }

    /// Create a promotion move (non-capture)
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: PromotionPiece) -> Self {
        Move::pack(from, to, MoveKind::Promotion, Some(piece))
    }

    /// Create a promotion capture move
    #[inline]
    #[must_use]
    pub const fn promotion_capture(from: Square, to: Square, piece: PromotionPiece) -> Self {
        Move::pack(from, to, MoveKind::PromotionCapture, Some(piece))
    }

    #[inline]
    const fn pack(from: Square, to: Square, kind: MoveKind, promo: Option<PromotionPiece>) -> Self {
        let mut bits = from.index() as u32
            | ((to.index() as u32) << TO_SHIFT)
            | (kind.bits() << KIND_SHIFT);
        if let Some(piece) = promo {
            bits |= HAS_PROMO | (piece.bits() << PROMO_SHIFT);
        }
        Move(bits)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & FROM_MASK) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & FROM_MASK) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        MoveKind::ALL[((self.0 >> KIND_SHIFT) & 0b111) as usize]
    }

    /// The chosen promotion piece, present only on promotion kinds
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<PromotionPiece> {
        if self.0 & HAS_PROMO == 0 {
            None
        } else {
            Some(PromotionPiece::from_bits(self.0 >> PROMO_SHIFT))
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.kind().is_capture()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.kind().is_castle()
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind(), MoveKind::DoublePawnPush)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.kind().is_promotion()
    }
}

/// Decodes a packed move, rejecting stray bits and a promotion piece on a
/// non-promotion kind (or a promotion kind without one).
impl TryFrom<u32> for Move {
    type Error = MoveParseError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        let raw = Move(bits);
        let kind = raw.kind();
        let promo = raw.promotion_piece();
        if kind.is_promotion() == promo.is_some() {
            let mv = Move::pack(raw.from(), raw.to(), kind, promo);
            if mv.0 == bits {
                return Ok(mv);
            }
        }
        Err(MoveParseError::InvalidEncoding { bits })
    }
}

impl From<Move> for u32 {
    fn from(mv: Move) -> u32 {
        mv.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {:?}", self.from(), self.to(), self.kind())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

/// Coordinate form: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// List of generated moves, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

impl From<MoveList> for Vec<Move> {
    fn from(list: MoveList) -> Self {
        list.moves
    }
}
