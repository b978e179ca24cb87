use super::constants::{
    DEEP_BUDGET_MS, DEEP_DEPTH, EMERGENCY_DEPTH, EXPECTED_GAME_MOVES, LOW_CLOCK_MS,
    MEDIUM_BUDGET_MS, MEDIUM_DEPTH, MIN_MOVES_TO_GO, NORMAL_DEPTH,
};

/// Clock state handed over by the caller before each search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeControl {
    pub time_left_ms: u64,
    pub increment_ms: u64,
    /// Overrides the clock-derived depth when set
    pub fixed_depth: Option<u32>,
}

impl TimeControl {
    #[must_use]
    pub fn new(time_left_ms: u64, increment_ms: u64, fixed_depth: Option<u32>) -> Self {
        TimeControl {
            time_left_ms,
            increment_ms,
            fixed_depth,
        }
    }

    /// Time allotted to the move being played at `fullmove`
    #[must_use]
    pub fn move_budget_ms(&self, fullmove: u32) -> u64 {
        let moves_to_go = EXPECTED_GAME_MOVES
            .saturating_sub(fullmove)
            .max(MIN_MOVES_TO_GO);
        self.time_left_ms / u64::from(moves_to_go) + self.increment_ms
    }

    /// Fixed search depth for the move being played at `fullmove`
    #[must_use]
    pub fn depth_for(&self, fullmove: u32) -> u32 {
        if let Some(depth) = self.fixed_depth {
            return depth.max(1);
        }
        let budget = self.move_budget_ms(fullmove);
        if budget > DEEP_BUDGET_MS {
            DEEP_DEPTH
        } else if budget > MEDIUM_BUDGET_MS {
            MEDIUM_DEPTH
        } else if self.time_left_ms < LOW_CLOCK_MS {
            EMERGENCY_DEPTH
        } else {
            NORMAL_DEPTH
        }
    }
}
