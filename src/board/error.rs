//! Error types for board operations.

use std::fmt;

/// Error type for position-string (FEN) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position string has too few fields (needs 4)
    TooFewParts { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Placement field does not describe exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than 8 files
    BadRankLength { rank: usize, files: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "Position string must have 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "Placement must describe 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}'")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move requests that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// A square in the request is malformed or off the board
    InvalidSquare(SquareError),
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
    /// Packed move bits that no constructor produces
    InvalidEncoding { bits: u32 },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare(err) => write!(f, "Invalid move square: {err}"),
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveParseError::InvalidEncoding { bits } => {
                write!(f, "Invalid packed move {bits:#x}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        MoveParseError::InvalidSquare(err)
    }
}

/// Error returned when undo is requested with no applied move to undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    Empty,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Empty => write!(f, "No applied move to revert"),
        }
    }
}

impl std::error::Error for HistoryError {}
