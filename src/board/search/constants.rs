//! Search constants.

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Larger than any reachable score, mate scores included
pub const INFINITY: i32 = 10_000_000;

// ============================================================================
// DEPTH LIMITS
// ============================================================================

/// Deepest iteration `search_iter` will attempt
pub const MAX_ITERATIVE_DEPTH: u32 = 40;

// ============================================================================
// TIME MANAGEMENT
// ============================================================================
// The clock is split over the moves expected to remain, never fewer than
// MIN_MOVES_TO_GO, and the per-move share picks a fixed depth.

/// Move number by which the game is assumed to be settled
pub const EXPECTED_GAME_MOVES: u32 = 30;

/// Floor on the number of moves the remaining clock is split over
pub const MIN_MOVES_TO_GO: u32 = 10;

/// Per-move share above which the deepest fixed search runs
pub const DEEP_BUDGET_MS: u64 = 30_000;

/// Per-move share above which the medium fixed search runs
pub const MEDIUM_BUDGET_MS: u64 = 5_000;

/// Remaining clock below which only the emergency depth runs
pub const LOW_CLOCK_MS: u64 = 1_000;

pub const DEEP_DEPTH: u32 = 5;
pub const MEDIUM_DEPTH: u32 = 4;
pub const NORMAL_DEPTH: u32 = 3;
pub const EMERGENCY_DEPTH: u32 = 2;
