//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

const PROMO_NONE: u16 = 0;
const PROMO_KNIGHT: u16 = 1;
const PROMO_BISHOP: u16 = 2;
const PROMO_ROOK: u16 = 3;
const PROMO_QUEEN: u16 = 4;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-14: promotion piece (0 = none, 1-4 = knight, bishop, rook, queen)
///
/// Castling is a two-file king move and en passant is a diagonal pawn move
/// onto the en-passant target; neither is flagged.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a move. Promotion to a pawn or king is stored as a queen, so
    /// untrusted input goes through [`crate::board::Position::apply_validated_squares`].
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<Piece>) -> Self {
        let promo = match promotion {
            None => PROMO_NONE,
            Some(Piece::Knight) => PROMO_KNIGHT,
            Some(Piece::Bishop) => PROMO_BISHOP,
            Some(Piece::Rook) => PROMO_ROOK,
            Some(_) => PROMO_QUEEN,
        };
        Move(from.index() as u16 | ((to.index() as u16) << 6) | (promo << 12))
    }

    /// Non-promoting move
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, None)
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::new_unchecked((self.0 & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::new_unchecked(((self.0 >> 6) & 0x3F) as usize)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match (self.0 >> 12) & 0x7 {
            PROMO_KNIGHT => Some(Piece::Knight),
            PROMO_BISHOP => Some(Piece::Bishop),
            PROMO_ROOK => Some(Piece::Rook),
            PROMO_QUEEN => Some(Piece::Queen),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        (self.0 >> 12) & 0x7 != PROMO_NONE
    }

    /// Get the raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Encode as coordinate notation, e.g. `e2e4` or `e7e8q`
    #[must_use]
    pub fn to_notation(self) -> String {
        self.to_string()
    }

    /// Decode coordinate notation. Legality is not checked.
    pub fn from_notation(s: &str) -> Result<Self, MoveParseError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let from: Square = s[0..2]
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: s.to_string(),
            })?;
        let to: Square = s[2..4]
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: s.to_string(),
            })?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c @ ('n' | 'b' | 'r' | 'q')) => Piece::from_char(c),
            Some(c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };
        Ok(Move::new(from, to, promotion))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_notation(s)
    }
}

/// Upper bound on pseudo-legal moves for a side with at most sixteen pieces:
/// fifteen queens of 27 moves each plus a king with castling.
pub(crate) const MAX_MOVES: usize = 512;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Keeps only the moves for which `keep` returns true, preserving order
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    /// Sorts ascending by `key`; unstable, ties break arbitrarily
    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&Move) -> K) {
        self.as_mut_slice().sort_unstable_by_key(key);
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_is_exact_inverse_for_every_move() {
        let promotions = [
            None,
            Some(Piece::Knight),
            Some(Piece::Bishop),
            Some(Piece::Rook),
            Some(Piece::Queen),
        ];
        for from in Square::all() {
            for to in Square::all() {
                for promo in promotions {
                    let mv = Move::new(from, to, promo);
                    assert_eq!(mv.from(), from);
                    assert_eq!(mv.to(), to);
                    assert_eq!(mv.promotion(), promo);
                    let text = mv.to_notation();
                    assert_eq!(text.len(), if promo.is_some() { 5 } else { 4 });
                    assert_eq!(Move::from_notation(&text), Ok(mv), "{text}");
                }
            }
        }
    }

    #[test]
    fn malformed_notation_is_rejected() {
        assert_eq!(
            Move::from_notation("e2e"),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            Move::from_notation("e2e4qq"),
            Err(MoveParseError::InvalidLength { len: 6 })
        );
        assert!(matches!(
            Move::from_notation("z2e4"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            Move::from_notation("e7e8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert!(Move::from_notation("e2é4").is_err());
    }

    #[test]
    fn move_list_retain_and_sort() {
        let mut list = MoveList::new();
        for to in [Square::H1, Square::A1, Square::D8] {
            list.push(Move::quiet(Square::E1, to));
        }
        list.sort_by_key(|mv| mv.to().index());
        assert_eq!(list[0].to(), Square::A1);
        list.retain(|mv| mv.to() != Square::H1);
        assert_eq!(list.len(), 2);
        assert!(!list.contains(Move::quiet(Square::E1, Square::H1)));
    }
}
