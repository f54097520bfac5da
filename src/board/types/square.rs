//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as its bitboard index.
///
/// Index layout is `rank * 8 + file`: a1 = 0, b1 = 1, ..., h1 = 7, a2 = 8, ..., h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $idx:expr),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square($idx);)*
        }
    };
}

#[rustfmt::skip]
named_squares! {
    A1 = 0,  B1 = 1,  C1 = 2,  D1 = 3,  E1 = 4,  F1 = 5,  G1 = 6,  H1 = 7,
    A2 = 8,  B2 = 9,  C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl Square {
    /// Create a square from rank and file (both 0-7), with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a 0-63 index, with bounds checking
    #[must_use]
    pub const fn try_from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Create a square from an index known to be below 64.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Square(idx as u8)
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % 8
    }

    /// Single-bit mask for this square
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// The square offset by `delta` index steps, if it stays on the board.
    ///
    /// Does not check for file wraparound; callers step only along ranks.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: i8) -> Option<Self> {
        let idx = self.0 as i16 + delta as i16;
        if idx >= 0 && idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::try_from_index(idx).ok_or(SquareError::IndexOutOfBounds { index: idx })
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Square::try_from(usize::from(idx))
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((rank * 8 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square((rank * 8 + file) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::E2.index(), 12);
        assert_eq!(Square::E4.index(), 28);
        assert_eq!(Square::A8.index(), 56);
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn test_rank_and_file() {
        let sq = Square::new(3, 4).unwrap();
        assert_eq!(sq, Square::E4);
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 4);
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("e3".parse::<Square>().unwrap(), Square::E3);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
        assert_eq!(Square::C6.to_string(), "c6");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_index_rejects_out_of_range() {
        assert_eq!(Square::try_from(63usize), Ok(Square::H8));
        assert_eq!(
            Square::try_from(64usize),
            Err(SquareError::IndexOutOfBounds { index: 64 })
        );
        assert_eq!(Square::try_from(12u8), Ok(Square::E2));
        assert_eq!(
            Square::try_from(200u8),
            Err(SquareError::IndexOutOfBounds { index: 200 })
        );
        assert_eq!(u8::from(Square::H8), 63);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::E2.offset(8), Some(Square::E3));
        assert_eq!(Square::E7.offset(-8), Some(Square::E6));
        assert_eq!(Square::A8.offset(8), None);
        assert_eq!(Square::H1.offset(-8), None);
    }
}
