//! Static evaluation: material plus piece-square tables.
//!
//! Scores are white-relative centipawns. Tables start out as the built-in
//! defaults and can be replaced from files at configuration time.

mod load;
mod tables;

pub use tables::{DEFAULT_MATERIAL, DEFAULT_SQUARE_TABLES};

use std::path::Path;

use super::{Color, EvalTableError, Move, Piece, Position, Square};

/// Base of the mate score; the bonus on top shrinks as the game gets longer
pub const MATE_SCORE: i32 = 50_000;

/// Material values and square tables, indexed by [`Piece::index`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalTables {
    pub material: [i32; 6],
    pub square: [[i32; 64]; 6],
}

impl Default for EvalTables {
    fn default() -> Self {
        EvalTables {
            material: DEFAULT_MATERIAL,
            square: DEFAULT_SQUARE_TABLES,
        }
    }
}

/// Magnitude of a mate found at move `fullmove`; earlier mates score higher
#[must_use]
pub fn mate_score(fullmove: u32) -> i32 {
    let bonus = i64::from(MATE_SCORE) * 20 / (i64::from(fullmove) + 20);
    // bonus never exceeds MATE_SCORE
    MATE_SCORE + bonus as i32
}

#[inline]
fn view(color: Color, sq: Square) -> usize {
    match color {
        Color::White => sq.index(),
        Color::Black => sq.flip_vertical().index(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    tables: EvalTables,
}

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tables(tables: EvalTables) -> Self {
        Evaluator { tables }
    }

    pub fn tables(&self) -> &EvalTables {
        &self.tables
    }

    /// Replaces the active tables with ones read from disk.
    ///
    /// On error the current tables are left untouched.
    pub fn load_tables(
        &mut self,
        material_path: impl AsRef<Path>,
        square_table_path: impl AsRef<Path>,
    ) -> Result<(), EvalTableError> {
        self.tables = EvalTables::load(material_path, square_table_path)?;
        Ok(())
    }

    #[inline]
    fn square_value(&self, color: Color, piece: Piece, sq: Square) -> i32 {
        self.tables.square[piece.index()][view(color, sq)]
    }

    #[inline]
    fn material(&self, piece: Piece) -> i32 {
        self.tables.material[piece.index()]
    }

    /// White-relative score of `pos`.
    ///
    /// A checkmated side scores minus [`mate_score`] for the current move
    /// number; stalemate scores zero.
    #[must_use]
    pub fn static_score(&self, pos: &Position) -> i32 {
        if pos.has_no_legal_moves() {
            if pos.is_in_check() {
                return -pos.side_to_move().sign() * mate_score(pos.fullmove_counter());
            }
            return 0;
        }
        self.material_and_squares(pos)
    }

    /// [`static_score`](Self::static_score) from the side to move's view
    #[must_use]
    pub fn relative_score(&self, pos: &Position) -> i32 {
        pos.side_to_move().sign() * self.static_score(pos)
    }

    fn material_and_squares(&self, pos: &Position) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            let mut side = 0;
            for piece in Piece::ALL {
                for sq in pos.pieces(color, piece).iter() {
                    side += self.material(piece) + self.square_value(color, piece, sq);
                }
            }
            score += color.sign() * side;
        }
        score
    }

    /// Ordering key for a move of the side to move; lower is more promising.
    ///
    /// The key is the negated gain estimated from the tables: the mover's
    /// square-table change, plus the captured piece's material and square
    /// value, plus any promotion gain. Castling adds the rook's square
    /// change. Only used to sort moves.
    #[must_use]
    pub fn eval_move_delta(&self, pos: &Position, mv: Move) -> i32 {
        let us = pos.side_to_move();
        let them = us.opponent();
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = pos.piece_of(us, from) else {
            return 0;
        };

        let landing = mv.promotion().unwrap_or(piece);
        let mut gain = self.square_value(us, landing, to) - self.square_value(us, piece, from);
        gain += self.material(landing) - self.material(piece);

        if let Some(captured) = pos.piece_of(them, to) {
            gain += self.material(captured) + self.square_value(them, captured, to);
        } else if piece == Piece::Pawn && from.file() != to.file() {
            gain += self.material(Piece::Pawn);
        }

        if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            let rank = from.rank();
            let (rook_from, rook_to) = if to.file() > from.file() { (7, 5) } else { (0, 3) };
            if let (Some(rook_from), Some(rook_to)) = (
                Square::from_coords(rook_from, rank),
                Square::from_coords(rook_to, rank),
            ) {
                gain += self.square_value(us, Piece::Rook, rook_to)
                    - self.square_value(us, Piece::Rook, rook_from);
            }
        }

        -gain
    }

    /// Plain 1/3/3/5/9 material count, white-relative
    #[must_use]
    pub fn material_balance(pos: &Position) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| {
                let side: i32 = Piece::ALL
                    .iter()
                    .map(|&piece| piece.simple_value() * pos.pieces(color, piece).popcount() as i32)
                    .sum();
                color.sign() * side
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn start_position_is_balanced() {
        let eval = Evaluator::new();
        assert_eq!(eval.static_score(&Position::new()), 0);
        assert_eq!(Evaluator::material_balance(&Position::new()), 0);
    }

    #[test]
    fn mirrored_positions_score_opposite() {
        let eval = Evaluator::new();
        let white = position("4k3/8/8/8/8/8/3N4/4K3 w - - 0 1");
        let black = position("4k3/3n4/8/8/8/8/8/4K3 b - - 0 1");
        let score = eval.static_score(&white);
        assert!(score > 0);
        assert_eq!(eval.static_score(&black), -score);
        assert_eq!(eval.relative_score(&white), eval.relative_score(&black));
    }

    #[test]
    fn checkmate_scores_depend_on_move_number() {
        let eval = Evaluator::new();
        // Back-rank mate, black to move
        let early = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        let late = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 60");
        assert_eq!(eval.static_score(&early), mate_score(1));
        assert_eq!(eval.static_score(&late), mate_score(60));
        assert!(mate_score(1) > mate_score(60));
        assert!(mate_score(60) > MATE_SCORE);
    }

    #[test]
    fn huge_move_numbers_keep_mate_scores_finite() {
        let eval = Evaluator::new();
        let late = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 2147483640");
        assert_eq!(eval.static_score(&late), MATE_SCORE);
        assert_eq!(mate_score(u32::MAX), MATE_SCORE);
        assert_eq!(mate_score(0), 2 * MATE_SCORE);
    }

    #[test]
    fn stalemate_scores_zero() {
        let eval = Evaluator::new();
        let stalemate = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(stalemate.is_stalemate());
        assert_eq!(eval.static_score(&stalemate), 0);
    }

    #[test]
    fn captures_order_before_quiet_moves() {
        let eval = Evaluator::new();
        let pos = position("4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1");
        let capture: Move = "d1d5".parse().unwrap();
        let quiet: Move = "d1d2".parse().unwrap();
        assert!(eval.eval_move_delta(&pos, capture) < eval.eval_move_delta(&pos, quiet));
    }

    #[test]
    fn queen_promotion_beats_knight_promotion() {
        let eval = Evaluator::new();
        let pos = position("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let queen: Move = "a7a8q".parse().unwrap();
        let knight: Move = "a7a8n".parse().unwrap();
        assert!(eval.eval_move_delta(&pos, queen) < eval.eval_move_delta(&pos, knight));
    }

    #[test]
    fn castling_counts_rook_relocation() {
        let eval = Evaluator::new();
        let pos = position("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let castle: Move = "e1g1".parse().unwrap();
        let king_sq = &DEFAULT_SQUARE_TABLES[Piece::King.index()];
        let rook_sq = &DEFAULT_SQUARE_TABLES[Piece::Rook.index()];
        let expected = -((king_sq[6] - king_sq[4]) + (rook_sq[5] - rook_sq[7]));
        assert_eq!(eval.eval_move_delta(&pos, castle), expected);
    }

    #[test]
    fn material_balance_counts_simple_values() {
        let pos = position("4k3/8/8/8/8/8/8/R2QK3 w - - 0 1");
        assert_eq!(Evaluator::material_balance(&pos), 14);
    }
}
