//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let mut position = Position::new();
//! assert_eq!(position.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Color, FenError, GameStatus, Move, MoveKind, MoveList, MoveParseError, MoveRequest, Piece,
    Position, PromotionPiece, Square,
};
