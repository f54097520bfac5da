//! Core chess types.
//!
//! This module contains the value types used throughout the crate:
//! - `Piece`, `PromotionPiece` and `Color`
//! - `Square` - board square stored as its 0-63 index
//! - `Bitboard` - 64-bit board representation and named masks
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` - the four castling flags

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece, PromotionPiece};
pub use square::Square;

pub(crate) use bitboard::pop_lsb;
