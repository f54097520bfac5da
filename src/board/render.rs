use std::fmt;

use super::state::Position;
use super::types::Square;

impl Position {
    /// Text grid of the board: 8 lines from rank 8 down to rank 1, each with
    /// 8 space-separated characters. White pieces are uppercase, black
    /// lowercase, and empty squares are `.`.
    #[must_use]
    pub fn board_text(&self) -> String {
        let mut out = String::with_capacity(8 * 16);
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                let c = self
                    .piece_at(sq)
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                if file > 0 {
                    out.push(' ');
                }
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_text())
    }
}
