//! Chess position representation and legal move generation.
//!
//! Uses twelve bitboards (one per color and piece kind) for placement and a
//! stack of full snapshots for undo. Supports castling, en passant and
//! promotions, and reports check, checkmate and stalemate.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod render;
mod request;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
pub use error::{FenError, HistoryError, MoveParseError, SquareError};
pub use movegen::GameStatus;
pub use request::MoveRequest;
pub use state::{Position, Snapshot};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveKind, MoveList, Piece,
    PromotionPiece, Square,
};

/// Position string for the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
