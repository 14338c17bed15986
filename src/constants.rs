//! Constants for board geometry, game rules, and search parameters.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length. Lines of Action is played on an 8x8 board.
pub const BOARD_SIZE: usize = 8;

/// Total number of squares.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of compass directions a piece can move in.
pub const NUM_DIRS: usize = 8;

/// (column, row) deltas for one step in each compass direction,
/// clockwise from north: N, NE, E, SE, S, SW, W, NW.
/// The opposite of direction `d` is `(d + 4) % NUM_DIRS`.
pub const DIR_DELTAS: [(i8, i8); NUM_DIRS] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
];

// =============================================================================
// Game Rules
// =============================================================================

/// Default number of plies (half-moves) after which an undecided game
/// is a tie. Two plies make one full move.
pub const DEFAULT_MOVE_LIMIT: usize = 60;

// =============================================================================
// Search Parameters
// =============================================================================

/// Fixed game-tree search depth, in plies.
pub const SEARCH_DEPTH: usize = 3;

/// Score magnitude of a decided position (positive for a White win,
/// negative for a Black win). Strictly below `INFTY` so that a real
/// result is never confused with the unsearched sentinel.
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// A magnitude greater than any reachable score.
pub const INFTY: i32 = i32::MAX;
