//! Constants for board dimensions, trial parameters, and the run log.
//!
//! Every value here is a default. The binary exposes the board geometry and
//! trial parameters as command-line flags, so these only apply when a flag
//! is omitted.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default number of rows (h).
pub const DEFAULT_HEIGHT: usize = 3;

/// Default number of columns (v).
pub const DEFAULT_WIDTH: usize = 3;

/// Default run length needed to win (k).
pub const DEFAULT_K: usize = 3;

/// The four line directions scanned from a freshly placed mark.
/// Each `(dr, dc)` is applied to `(row, col)`; the reverse direction is
/// covered by walking the same delta backwards.
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // along a row
    (1, 0),  // along a column
    (1, -1), // anti-diagonal
    (1, 1),  // diagonal
];

// =============================================================================
// Utility Values
// =============================================================================

/// Cached utility of a state won by the first player.
pub const WIN: i32 = 1;

/// Cached utility of a state won by the second player.
pub const LOSS: i32 = -1;

/// Cached utility of an undecided or drawn state.
pub const DRAW: i32 = 0;

// =============================================================================
// Trial Parameters
// =============================================================================

/// Games played per ordering in a `trials` run.
pub const DEFAULT_GAMES: usize = 100;

/// Worker threads used for a `trials` run.
pub const DEFAULT_REPLICAS: usize = 5;

/// Base seed for the random players of a `trials` run.
pub const DEFAULT_SEED: u64 = 42;

// =============================================================================
// Run Log
// =============================================================================

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Label for the tally where the random player moved first.
pub const LABEL_RANDOM_FIRST: &str = "random first";

/// Label for the tally where the search player moved first.
pub const LABEL_MINIMAX_FIRST: &str = "minimax first";

/// How many trailing lines are inspected when looking for the last run number.
pub const TAIL_LINES: usize = 4;
