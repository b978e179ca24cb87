//! Search module implementing negascout with iterative deepening.
//!
//! Features:
//! - Principal variation search (negascout) with a null-window re-search
//! - Quiescence search over captures and promotions with stand-pat
//! - Move ordering by the evaluator's incremental move estimate
//! - Transposition table owned by the searcher
//! - Repetition draws against a caller-supplied position history
//! - Fixed depth from the clock, or iterative deepening under a time budget
//!
//! Min-max and plain alpha-beta are kept alongside as reference searches.

mod constants;
mod iterative;
mod negascout;
mod progress;
mod quiescence;
mod reference;
mod time;

use std::collections::HashSet;

use log::trace;

use crate::tt::{TranspositionTable, DEFAULT_TT_MB};

use super::{Evaluator, Move, MoveList, Position};

pub use constants::{INFINITY, MAX_ITERATIVE_DEPTH};
pub use progress::{ProgressCallback, ProgressRecorder, SearchProgress};
pub use time::TimeControl;

/// How [`Searcher::search`] picks its depth
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// One search at the depth derived from the clock
    FixedDepth,
    /// Deepen one ply at a time while the time budget allows
    Iterative,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub quiescence: bool,
    pub transposition_table: bool,
    pub tt_mb: usize,
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            mode: SearchMode::FixedDepth,
            quiescence: true,
            transposition_table: true,
            tt_mb: DEFAULT_TT_MB,
            max_depth: MAX_ITERATIVE_DEPTH,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_quiescence(mut self, enabled: bool) -> Self {
        self.quiescence = enabled;
        self
    }

    #[must_use]
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.transposition_table = enabled;
        self
    }

    #[must_use]
    pub fn with_tt_mb(mut self, mb: usize) -> Self {
        self.tt_mb = mb;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth.clamp(1, MAX_ITERATIVE_DEPTH);
        self
    }
}

/// Whether the searched position still has moves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the root has no legal move
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view
    pub score: i32,
    /// Deepest completed depth
    pub depth: u32,
    pub status: SearchStatus,
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
}

pub struct Searcher {
    evaluator: Evaluator,
    config: SearchConfig,
    clock: TimeControl,
    target_depth: u32,
    best_move: Option<Move>,
    best_score: i32,
    past_positions: HashSet<u64>,
    tt: TranspositionTable,
    stats: SearchStats,
    progress: Option<ProgressCallback>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Evaluator::new(), SearchConfig::default())
    }
}

impl Searcher {
    #[must_use]
    pub fn new(evaluator: Evaluator, config: SearchConfig) -> Self {
        let tt_mb = if config.transposition_table { config.tt_mb } else { 0 };
        Searcher {
            evaluator,
            tt: TranspositionTable::new(tt_mb),
            config,
            clock: TimeControl::default(),
            target_depth: 0,
            best_move: None,
            best_score: 0,
            past_positions: HashSet::new(),
            stats: SearchStats::default(),
            progress: None,
        }
    }

    /// Sets the clock for the next search. `fixed_depth` overrides the
    /// clock-derived depth.
    pub fn configure(&mut self, time_left_ms: u64, increment_ms: u64, fixed_depth: Option<u32>) {
        self.clock = TimeControl::new(time_left_ms, increment_ms, fixed_depth);
    }

    pub fn set_progress_callback(&mut self, callback: Option<ProgressCallback>) {
        self.progress = callback;
    }

    /// Replaces the repetition history. Any searched position other than the
    /// root whose signature is in the history scores as a draw.
    ///
    /// Table entries may hold scores computed under the old history, so the
    /// transposition table is cleared whenever the history changes.
    pub fn set_past_positions(&mut self, signatures: impl IntoIterator<Item = u64>) {
        let signatures: HashSet<u64> = signatures.into_iter().collect();
        if signatures != self.past_positions {
            self.past_positions = signatures;
            self.tt.clear();
        }
    }

    pub fn record_position(&mut self, position: &Position) {
        if self.past_positions.insert(position.signature()) {
            self.tt.clear();
        }
    }

    pub fn clear_history(&mut self) {
        if !self.past_positions.is_empty() {
            self.past_positions.clear();
            self.tt.clear();
        }
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn clock(&self) -> TimeControl {
        self.clock
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    pub fn best_score(&self) -> i32 {
        self.best_score
    }

    pub fn target_depth(&self) -> u32 {
        self.target_depth
    }

    /// Derives the target depth from the clock and returns it
    pub fn update_depth(&mut self, position: &Position) -> u32 {
        let fullmove = position.fullmove_counter();
        self.target_depth = self.clock.depth_for(fullmove);
        trace!(
            "depth {} from {}ms left, {}ms increment, budget {}ms",
            self.target_depth,
            self.clock.time_left_ms,
            self.clock.increment_ms,
            self.clock.move_budget_ms(fullmove)
        );
        self.target_depth
    }

    /// Best move and score for the side to move, by the configured mode
    pub fn search(&mut self, position: &Position) -> SearchOutcome {
        match self.config.mode {
            SearchMode::FixedDepth => {
                let depth = self.update_depth(position);
                self.search_depth(position, depth)
            }
            SearchMode::Iterative => self.search_iter(position),
        }
    }

    /// One negascout search at exactly `depth` plies (at least one)
    pub fn search_depth(&mut self, position: &Position, depth: u32) -> SearchOutcome {
        self.begin_search();
        let depth = depth.max(1);
        self.target_depth = depth;
        let moves = position.generate_legal_moves();
        if moves.is_empty() {
            return self.terminal_outcome(position);
        }
        let score = self.search_root(position, depth, moves);
        SearchOutcome {
            best_move: self.best_move,
            score,
            depth,
            status: SearchStatus::Ongoing,
        }
    }

    fn begin_search(&mut self) {
        self.stats = SearchStats::default();
        self.best_move = None;
        self.best_score = 0;
        if self.config.transposition_table {
            self.tt.new_search();
        }
    }

    fn terminal_outcome(&mut self, position: &Position) -> SearchOutcome {
        let score = self.evaluator.relative_score(position);
        self.best_move = None;
        self.best_score = score;
        SearchOutcome {
            best_move: None,
            score,
            depth: 0,
            status: if position.is_in_check() {
                SearchStatus::Checkmate
            } else {
                SearchStatus::Stalemate
            },
        }
    }

    /// Sorts ascending by the evaluator's move estimate
    fn order_moves(&self, position: &Position, moves: &mut MoveList) {
        let evaluator = &self.evaluator;
        moves.sort_by_key(|&mv| evaluator.eval_move_delta(position, mv));
    }
}
