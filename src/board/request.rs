//! Move requests: the raw `(from, to, promotion)` triple a caller hands in,
//! and how it is turned into a concrete [`Move`] against the current board.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{MoveParseError, SquareError};
use super::state::Position;
use super::types::{Move, MoveKind, Piece, PromotionPiece, Square};

/// An unvalidated request to move a piece from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionPiece>,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<PromotionPiece>) -> Self {
        MoveRequest {
            from,
            to,
            promotion,
        }
    }

    /// Build a request from raw 0-63 square indices.
    pub fn from_indices(
        from: usize,
        to: usize,
        promotion: Option<PromotionPiece>,
    ) -> Result<Self, SquareError> {
        Ok(MoveRequest::new(
            Square::try_from(from)?,
            Square::try_from(to)?,
            promotion,
        ))
    }
}

/// Parses coordinate notation: `e2e4`, or `e7e8n` with a promotion letter.
impl FromStr for MoveRequest {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        if !s.is_ascii() {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }
            .into());
        }

        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => Some(
                PromotionPiece::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?,
            ),
        };

        Ok(MoveRequest::new(from, to, promotion))
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        MoveRequest::new(mv.from(), mv.to(), mv.promotion_piece())
    }
}

impl Position {
    /// Decide which kind of move `from -> to` would be on this board.
    ///
    /// Looks only at the pieces involved, not at legality. A pawn reaching the
    /// last rank promotes to `promotion`, or to a queen when no piece is given.
    #[must_use]
    pub fn classify_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Move {
        let color = self.color_at(from).unwrap_or_else(|| self.side_to_move());
        let capture = self.piece_at(to).is_some();

        let kind = match self.piece_kind_at(from) {
            Some(Piece::Pawn) if to.rank() == color.promotion_rank() => {
                let piece = promotion.unwrap_or(PromotionPiece::Queen);
                return if capture {
                    Move::promotion_capture(from, to, piece)
                } else {
                    Move::promotion(from, to, piece)
                };
            }
            Some(Piece::Pawn)
                if from.rank() == color.pawn_start_rank()
                    && from.rank().abs_diff(to.rank()) == 2 =>
            {
                MoveKind::DoublePawnPush
            }
            Some(Piece::Pawn) if from.file() != to.file() && !capture => MoveKind::EnPassant,
            Some(Piece::King) if from.file().abs_diff(to.file()) == 2 => {
                if to.file() > from.file() {
                    MoveKind::KingCastle
                } else {
                    MoveKind::QueenCastle
                }
            }
            _ if capture => MoveKind::Capture,
            _ => MoveKind::Quiet,
        };
        Move::new(from, to, kind)
    }

    /// Play `request` if it names a legal move for the side to move.
    ///
    /// Returns the move that was applied. An illegal request leaves the
    /// position unchanged.
    pub fn play(&mut self, request: MoveRequest) -> Result<Move, MoveParseError> {
        let mv = self.classify_move(request.from, request.to, request.promotion);
        let promotion_mismatch = request.promotion.is_some() && !mv.is_promotion();

        if promotion_mismatch || !self.legal_moves().contains(&mv) {
            log_warn!("rejected {} for {}", request, self.side_to_move());
            return Err(MoveParseError::IllegalMove {
                notation: request.to_string(),
            });
        }

        self.apply_move(mv);
        log_debug!("played {}", mv);
        Ok(mv)
    }

    /// Parse coordinate notation and play it.
    pub fn play_str(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let request: MoveRequest = notation.parse()?;
        self.play(request)
    }
}
