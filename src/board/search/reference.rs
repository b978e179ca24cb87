//! Unpruned min-max and plain alpha-beta.
//!
//! Both return white-relative scores and stop at depth zero or a position
//! without moves, with no quiescence, table or repetition handling. They
//! exist to cross-check negascout.

use super::{Searcher, INFINITY};
use crate::board::{Color, Position};

impl Searcher {
    pub fn search_min_max(&mut self, position: &Position, depth: u32) -> i32 {
        self.stats.nodes += 1;
        let moves = position.generate_legal_moves();
        if depth == 0 || moves.is_empty() {
            return self.evaluator.static_score(position);
        }
        let maximizing = position.side_to_move() == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for &mv in &moves {
            let mut next = *position;
            next.apply_pseudo_legal_move(mv);
            let score = self.search_min_max(&next, depth - 1);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    pub fn search_alpha_beta(&mut self, position: &Position, depth: u32) -> i32 {
        self.alpha_beta(position, depth, -INFINITY, INFINITY)
    }

    fn alpha_beta(&mut self, position: &Position, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        let mut moves = position.generate_legal_moves();
        if depth == 0 || moves.is_empty() {
            return self.evaluator.static_score(position);
        }
        self.order_moves(position, &mut moves);

        if position.side_to_move() == Color::White {
            let mut best = -INFINITY;
            for &mv in &moves {
                let mut next = *position;
                next.apply_pseudo_legal_move(mv);
                best = best.max(self.alpha_beta(&next, depth - 1, alpha, beta));
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for &mv in &moves {
                let mut next = *position;
                next.apply_pseudo_legal_move(mv);
                best = best.min(self.alpha_beta(&next, depth - 1, alpha, beta));
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        }
    }
}
