//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Perft counts for move generation
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Evaluation tables and scoring
//! - `search.rs` - Negascout, quiescence, repetition and the reference searches
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod eval;
