use super::Searcher;
use crate::board::{Piece, Position};

impl Searcher {
    /// Quiescence search over captures and promotions, fail-hard.
    ///
    /// Gives up on nodes so far below `alpha` that winning a queen would not
    /// recover them.
    pub(super) fn quiescence(&mut self, position: &Position, mut alpha: i32, beta: i32) -> i32 {
        self.stats.qnodes += 1;
        let stand_pat = self.evaluator.relative_score(position);
        if stand_pat >= beta {
            return beta;
        }
        let swing = self.evaluator.tables().material[Piece::Queen.index()];
        if stand_pat < alpha - swing {
            return alpha;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = position.generate_noisy_moves();
        self.order_moves(position, &mut moves);
        for &mv in &moves {
            let mut next = *position;
            next.apply_pseudo_legal_move(mv);
            let score = -self.quiescence(&next, -beta, -alpha);
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}
