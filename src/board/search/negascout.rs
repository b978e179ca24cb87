use crate::tt::BoundType;

use super::{Searcher, INFINITY};
use crate::board::{MoveList, Position};

impl Searcher {
    /// Root value of a negascout search at `depth`, side-relative.
    ///
    /// Also leaves the chosen move in [`Searcher::best_move`]. A root without
    /// legal moves returns its static score and no move.
    pub fn search_negascout(&mut self, position: &Position, depth: u32) -> i32 {
        let moves = position.generate_legal_moves();
        if moves.is_empty() {
            return self.terminal_outcome(position).score;
        }
        self.search_root(position, depth.max(1), moves)
    }

    /// Full-window PVS over the root moves. The root is never probed in the
    /// table and is the only place the best move is recorded.
    pub(super) fn search_root(&mut self, position: &Position, depth: u32, mut moves: MoveList) -> i32 {
        self.order_moves(position, &mut moves);
        let beta = INFINITY;
        let mut alpha = -INFINITY;
        self.best_move = moves.iter().next().copied();

        for (idx, &mv) in moves.iter().enumerate() {
            let mut next = *position;
            next.apply_pseudo_legal_move(mv);
            let score = if idx == 0 {
                -self.negascout(&next, depth - 1, -beta, -alpha, 1)
            } else {
                let probe = -self.negascout(&next, depth - 1, -alpha - 1, -alpha, 1);
                if alpha < probe && probe < beta {
                    -self.negascout(&next, depth - 1, -beta, -alpha, 1)
                } else {
                    probe
                }
            };
            if score > alpha {
                alpha = score;
                self.best_move = Some(mv);
            }
        }

        self.best_score = alpha;
        alpha
    }

    /// Interior negascout node, fail-hard within `(alpha, beta)`
    pub(super) fn negascout(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        ply: u32,
    ) -> i32 {
        self.stats.nodes += 1;
        let key = position.signature();
        if ply > 0 && self.past_positions.contains(&key) {
            return 0;
        }

        if self.config.transposition_table {
            if let Some(entry) = self.tt.probe(key) {
                if entry.depth() >= depth {
                    self.stats.tt_hits += 1;
                    match entry.bound_type() {
                        BoundType::Exact => return entry.score(),
                        BoundType::LowerBound => alpha = alpha.max(entry.score()),
                        BoundType::UpperBound => beta = beta.min(entry.score()),
                    }
                    if alpha >= beta {
                        return entry.score();
                    }
                }
            }
        }

        if depth == 0 {
            return self.leaf(position, alpha, beta);
        }
        let mut moves = position.generate_legal_moves();
        if moves.is_empty() {
            return self.leaf(position, alpha, beta);
        }

        self.order_moves(position, &mut moves);
        let original_alpha = alpha;
        for (idx, &mv) in moves.iter().enumerate() {
            let mut next = *position;
            next.apply_pseudo_legal_move(mv);
            let mut score = if idx == 0 {
                -self.negascout(&next, depth - 1, -beta, -alpha, ply + 1)
            } else {
                -self.negascout(&next, depth - 1, -alpha - 1, -alpha, ply + 1)
            };
            if idx > 0 && alpha < score && score < beta {
                score = -self.negascout(&next, depth - 1, -beta, -alpha, ply + 1);
            }

            if score >= beta {
                self.store(key, depth, beta, BoundType::LowerBound);
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        let bound = if alpha > original_alpha {
            BoundType::Exact
        } else {
            BoundType::UpperBound
        };
        self.store(key, depth, alpha, bound);
        alpha
    }

    /// Horizon and terminal nodes
    fn leaf(&mut self, position: &Position, alpha: i32, beta: i32) -> i32 {
        if self.config.quiescence {
            self.quiescence(position, alpha, beta)
        } else {
            self.evaluator.relative_score(position)
        }
    }

    #[inline]
    fn store(&mut self, key: u64, depth: u32, score: i32, bound: BoundType) {
        if self.config.transposition_table {
            self.tt.store(key, depth, score, bound);
        }
    }
}
