use std::str::FromStr;

use super::error::FenError;
use super::state::Position;
use super::types::{Color, Piece, Square};

impl Position {
    /// Parse a position string (FEN).
    ///
    /// The first four fields are consumed: placement, side to move, castling
    /// rights and en passant square. Move counters, if present, are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file).ok_or(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                position.set_piece(sq, color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        position.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => position.castling.set(Color::White, true),
                'Q' => position.castling.set(Color::White, false),
                'k' => position.castling.set(Color::Black, true),
                'q' => position.castling.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        position.en_passant = match parts[3] {
            "-" => None,
            field => Some(
                Square::from_str(field).map_err(|_| FenError::InvalidEnPassant {
                    found: field.to_string(),
                })?,
            ),
        };

        Ok(position)
    }

    /// Replace this position with the one described by `fen`.
    ///
    /// Undo history is discarded. On error the position is left untouched.
    pub fn load_from_position_string(&mut self, fen: &str) -> Result<(), FenError> {
        match Position::try_from_fen(fen) {
            Ok(loaded) => {
                *self = loaded;
                log_debug!("loaded position {}", fen);
                Ok(())
            }
            Err(err) => {
                log_warn!("rejected position string {:?}: {}", fen, err);
                Err(err)
            }
        }
    }

    /// Position string for the current state. Counters are always `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, self.castling, ep)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
