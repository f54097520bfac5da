//! Bitboard chess position with reversible make/unmake and a legal move
//! generator.
//!
//! The [`board`] module holds the position model, attack tables, move
//! generation and perft. [`game`] wraps a position into a turn-checked game
//! session that can be shared between threads.

#[macro_use]
mod logging;

pub mod board;
pub mod game;

pub use board::{
    Color, GameStatus, Move, MoveKind, MoveList, MoveRequest, Piece, Position, PromotionPiece,
    Square,
};
pub use game::{Game, GameError, SharedGame};
