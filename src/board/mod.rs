//! Chess board representation and game logic.
//!
//! Uses bitboards for move generation and a copy-and-make [`Position`].
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_core::board::{Position, Searcher};
//!
//! let position = Position::new();
//! let moves = position.generate_legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let mut searcher = Searcher::default();
//! searcher.configure(60_000, 0, Some(2));
//! let outcome = searcher.search(&position);
//! assert!(outcome.best_move.is_some());
//! ```

pub mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{EvalTableError, FenError, IllegalMoveError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::Position;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece,
    Square, PROMOTION_PIECES,
};

// Public API - evaluation
pub use eval::{mate_score, EvalTables, Evaluator, DEFAULT_MATERIAL, DEFAULT_SQUARE_TABLES, MATE_SCORE};

// Public API - search functions and configuration
pub use search::{
    ProgressCallback, ProgressRecorder, SearchConfig, SearchMode, SearchOutcome, SearchProgress,
    SearchStats, SearchStatus, Searcher, TimeControl, INFINITY, MAX_ITERATIVE_DEPTH,
};
