use super::types::{Bitboard, CastlingRights, Color, Piece, Square};

/// Complete copy of the mutable board fields, pushed before every applied move.
///
/// Two snapshots compare equal exactly when all twelve piece bitboards, the
/// side to move, the castling rights and the en passant square agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) white_to_move: bool,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
}

impl Snapshot {
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        Color::from_white(self.white_to_move)
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }
}

/// A chess position with reversible play.
///
/// Piece placement lives in twelve bitboards indexed `[color][piece]`.
/// Every [`Position::apply_move`] pushes a [`Snapshot`] that
/// [`Position::revert_move`] restores verbatim.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) white_to_move: bool,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) history: Vec<Snapshot>,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// The standard starting position, white to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            position.set_piece(Square::from_index(file), Color::White, *piece);
            position.set_piece(Square::from_index(8 + file), Color::White, Piece::Pawn);
            position.set_piece(Square::from_index(48 + file), Color::Black, Piece::Pawn);
            position.set_piece(Square::from_index(56 + file), Color::Black, *piece);
        }
        position.castling = CastlingRights::all();
        position
    }

    /// A board with no pieces, white to move and no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            white_to_move: true,
            castling: CastlingRights::none(),
            en_passant: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()] |= Bitboard::from_square(sq);
    }

    /// Clear `sq` on every piece board, returning what stood there.
    pub(crate) fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let found = self.piece_at(sq);
        let mask = !Bitboard::from_square(sq);
        for boards in &mut self.pieces {
            for bb in boards.iter_mut() {
                *bb &= mask;
            }
        }
        found
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[must_use]
    pub fn occupied_by_white(&self) -> Bitboard {
        self.occupied_by(Color::White)
    }

    #[must_use]
    pub fn occupied_by_black(&self) -> Bitboard {
        self.occupied_by(Color::Black)
    }

    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by_white() | self.occupied_by_black()
    }

    /// Color and kind of the piece on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces(color, piece).contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Kind of the piece on `sq`; `None` means the square is empty.
    #[must_use]
    pub fn piece_kind_at(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        Color::from_white(self.white_to_move)
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square passed over by the last double pawn push, if the last move was one
    #[inline]
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    /// The king of `color`, or `None` on boards without one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Copy of the current board fields, excluding history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pieces: self.pieces,
            white_to_move: self.white_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// Number of applied moves that can still be reverted
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.pieces = snapshot.pieces;
        self.white_to_move = snapshot.white_to_move;
        self.castling = snapshot.castling;
        self.en_passant = snapshot.en_passant;
    }
}
