//! Error types for board operations.

use std::fmt;

use super::types::{Color, Move, Piece};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly 6 space-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 squares (rank 8 is listed first)
    BadRankLength { rank: usize, squares: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a non-negative integer
    InvalidCounter { field: &'static str, found: String },
    /// Each side needs exactly one king
    MissingKing { color: Color, found: u32 },
    /// More than sixteen pieces for one side
    TooManyPieces { color: Color, found: u32 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN piece placement must have 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}'")
            }
            FenError::MissingKing { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::TooManyPieces { color, found } => {
                write!(f, "{color} has {found} pieces, at most 16 allowed")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move text decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 ASCII characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Square index outside 0..63
    IndexOutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a move was refused by the validated move path.
///
/// The position is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// Source or destination index outside 0..63
    SquareOutOfRange { index: usize },
    /// Promotion to something other than a knight, bishop, rook or queen
    InvalidPromotion { piece: Piece },
    /// Nothing to move on the source square
    NoPieceOnSource { mv: Move },
    /// Not produced by the pseudo-legal generator for the side to move
    NotPseudoLegal { mv: Move },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck { mv: Move },
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::SquareOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            IllegalMoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece:?}")
            }
            IllegalMoveError::NoPieceOnSource { mv } => {
                write!(f, "No piece on source square of move {mv}")
            }
            IllegalMoveError::NotPseudoLegal { mv } => {
                write!(f, "Move {mv} is not a legal piece movement here")
            }
            IllegalMoveError::LeavesKingInCheck { mv } => {
                write!(f, "Move {mv} leaves the king in check")
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Error type for evaluation table loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalTableError {
    /// The table file could not be read
    Io { path: String, message: String },
    /// A field is not an integer
    Parse { line: usize, found: String },
    /// The table has the wrong number of values
    Shape {
        table: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for EvalTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalTableError::Io { path, message } => {
                write!(f, "Cannot read evaluation table '{path}': {message}")
            }
            EvalTableError::Parse { line, found } => {
                write!(f, "Line {line}: '{found}' is not an integer")
            }
            EvalTableError::Shape {
                table,
                expected,
                found,
            } => {
                write!(f, "{table} table needs {expected} values, found {found}")
            }
        }
    }
}

impl std::error::Error for EvalTableError {}
