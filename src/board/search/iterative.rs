use std::time::Instant;

use log::debug;

use super::{SearchOutcome, SearchProgress, SearchStatus, Searcher};
use crate::board::{MoveList, Position};

impl Searcher {
    /// Iterative deepening from depth 1.
    ///
    /// A new depth starts only while the elapsed time is under half the
    /// per-move budget; a started depth always runs to completion, so the
    /// result is that of the deepest finished iteration. With a fixed depth
    /// set, deepening stops there and the clock is ignored.
    pub fn search_iter(&mut self, position: &Position) -> SearchOutcome {
        let start = Instant::now();
        self.begin_search();
        let moves = position.generate_legal_moves();
        if moves.is_empty() {
            return self.terminal_outcome(position);
        }

        let fixed = self.clock.fixed_depth;
        let max_depth = fixed.unwrap_or(self.config.max_depth).max(1);
        let budget_ms = self.clock.move_budget_ms(position.fullmove_counter());

        let mut outcome = self.iterate(position, 1, &moves);
        for depth in 2..=max_depth {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            if fixed.is_none() && elapsed_ms.saturating_mul(2) >= budget_ms {
                debug!("stopping after depth {} at {}ms of {}ms", depth - 1, elapsed_ms, budget_ms);
                break;
            }
            outcome = self.iterate(position, depth, &moves);
        }
        outcome
    }

    fn iterate(&mut self, position: &Position, depth: u32, moves: &MoveList) -> SearchOutcome {
        let score = self.search_root(position, depth, moves.clone());
        self.target_depth = depth;
        let progress = SearchProgress {
            depth,
            best_move: self.best_move,
            score,
            nodes: self.stats.nodes,
        };
        debug!(
            "depth {} score {} nodes {} best {}",
            depth,
            score,
            progress.nodes,
            progress.best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string())
        );
        if let Some(callback) = &self.progress {
            callback(&progress);
        }
        SearchOutcome {
            best_move: self.best_move,
            score,
            depth,
            status: SearchStatus::Ongoing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::search::{ProgressRecorder, SearchConfig, SearchMode, Searcher};
    use crate::board::{Evaluator, Position};

    #[test]
    fn reports_every_completed_depth() {
        let recorder = ProgressRecorder::new();
        let config = SearchConfig::default().with_mode(SearchMode::Iterative);
        let mut searcher = Searcher::new(Evaluator::new(), config);
        searcher.set_progress_callback(Some(recorder.callback()));
        searcher.configure(0, 0, Some(3));

        let outcome = searcher.search(&Position::new());
        let reports = recorder.snapshot();
        assert_eq!(
            reports.iter().map(|p| p.depth).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(outcome.depth, 3);
        assert_eq!(reports[2].best_move, outcome.best_move);
        assert!(reports.windows(2).all(|w| w[0].nodes <= w[1].nodes));
    }

    #[test]
    fn empty_clock_still_completes_first_depth() {
        let config = SearchConfig::default().with_mode(SearchMode::Iterative);
        let mut searcher = Searcher::new(Evaluator::new(), config);
        searcher.configure(0, 0, None);
        let outcome = searcher.search(&Position::new());
        assert_eq!(outcome.depth, 1);
        assert!(outcome.best_move.is_some());
    }
}
