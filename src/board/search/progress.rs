use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::Move;

/// Report emitted after each completed iterative-deepening depth
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchProgress {
    pub depth: u32,
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view
    pub score: i32,
    pub nodes: u64,
}

/// Hook for reporting search progress without reaching into the searcher
pub type ProgressCallback = Arc<dyn Fn(&SearchProgress) + Send + Sync>;

/// Collects progress reports; clones share the same buffer, so a control
/// loop can poll while a search runs on another thread.
#[derive(Clone, Default)]
pub struct ProgressRecorder {
    reports: Arc<Mutex<Vec<SearchProgress>>>,
}

impl ProgressRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that appends every report to this recorder
    #[must_use]
    pub fn callback(&self) -> ProgressCallback {
        let reports = Arc::clone(&self.reports);
        Arc::new(move |progress: &SearchProgress| reports.lock().push(*progress))
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<SearchProgress> {
        self.reports.lock().clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<SearchProgress> {
        self.reports.lock().last().copied()
    }

    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}
