//! Zobrist keys for position signatures.
//!
//! Only piece placement and side to move are keyed; see `Position::signature`.

use once_cell::sync::Lazy;
use rand::prelude::*;

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece_type][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    pub(crate) white_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 6]; 2];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            white_to_move_key: rng.gen(),
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
