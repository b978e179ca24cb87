pub mod board;
pub mod tt;
mod zobrist;

pub use board::{Color, Evaluator, Move, Piece, Position, Searcher, Square};
pub use tt::TranspositionTable;
