//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board as an index 0..63 (a1 = 0, b1 = 1, ..., h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Create a square from an index, rejecting anything outside 0..63
    pub fn from_index(idx: usize) -> Result<Self, SquareError> {
        if idx < 64 {
            Ok(Square(idx as u8))
        } else {
            Err(SquareError::IndexOutOfRange { index: idx })
        }
    }

    /// Index already known to be on the board. Out-of-range input wraps.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(idx: usize) -> Self {
        Square((idx & 63) as u8)
    }

    /// Create a square from zero-based file and rank
    #[must_use]
    pub const fn from_coords(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Square from algebraic characters, e.g. `('e', '4')`.
    ///
    /// The index is `8 * (rank - 1) + file`.
    pub fn from_file_rank(file: char, rank: char) -> Result<Self, SquareError> {
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: format!("{file}{rank}"),
            });
        }
        let file_idx = file as usize - 'a' as usize;
        let rank_idx = rank as usize - '1' as usize;
        Ok(Square((rank_idx * 8 + file_idx) as u8))
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0..7, 0 = file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Rank 0..7, 0 = rank 1
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Mirror across the horizontal axis (a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[must_use]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file() as u8)
    }

    #[must_use]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank() as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_file_rank(file, rank),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::from_index(idx)
    }
}
