//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square as an index 0..63
//! - `Bitboard` - 64-bit square set with bit-scan helpers
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;

pub(crate) use castling::castle_bit;
