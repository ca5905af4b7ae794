//! Constants for board dimensions, run lengths, and mark characters.
//!
//! This module contains all the configuration constants for the engine.
//! Everything here is fixed at compile time and read by the other modules;
//! there is no runtime configuration of the board.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board39x67` (default): 39 rows by 67 columns
//! - `board15x15`: 15x15 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                               # 39x67 (default)
//! cargo build --no-default-features --features board15x15   # 15x15
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
#[cfg(feature = "board39x67")]
pub const ROWS: usize = 39;

/// Number of columns on the board.
#[cfg(feature = "board39x67")]
pub const COLS: usize = 67;

#[cfg(feature = "board15x15")]
pub const ROWS: usize = 15;

#[cfg(feature = "board15x15")]
pub const COLS: usize = 15;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board39x67", feature = "board15x15"))]
compile_error!("Cannot enable both 'board39x67' and 'board15x15' features at the same time");

#[cfg(not(any(feature = "board39x67", feature = "board15x15")))]
compile_error!("Must enable exactly one board size feature: 'board39x67' or 'board15x15'");

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = ROWS * COLS;

/// Default point for the very first move of a game, when neither player
/// has a move to play next to.
pub const CENTER: (usize, usize) = (ROWS / 2, COLS / 2);

// =============================================================================
// Runs and Windows
// =============================================================================

/// Number of consecutive same-owner marks needed to win.
pub const WIN_LENGTH: usize = 5;

/// Length of a local window: the reference cell plus `WIN_LENGTH - 1`
/// cells on each side.
pub const WINDOW_LEN: usize = 2 * WIN_LENGTH - 1;

/// Index of the reference cell inside a local window.
pub const CENTER_OFFSET: usize = WIN_LENGTH - 1;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets (row, column) to the eight neighbors of a cell, in the order
/// they are tried when looking for an adjacent move.
/// Order: right, left, down, up, down-right, up-left, up-right, down-left
pub const ADJACENCY: [(isize, isize); 8] = [
    (0, 1),   // right
    (0, -1),  // left
    (1, 0),   // down
    (-1, 0),  // up
    (1, 1),   // down-right
    (-1, -1), // up-left
    (-1, 1),  // up-right
    (1, -1),  // down-left
];

// =============================================================================
// Mark Characters
// =============================================================================

/// Mark of the human player.
pub const HUMAN_MARK: char = 'X';

/// Mark of the computer player.
pub const COMPUTER_MARK: char = 'O';

/// Empty on-board cell, and the open slot inside a generated pattern.
pub const PLACEHOLDER: char = 'Z';

/// Cell beyond the board edge. Never appears in a pattern.
pub const EDGE: char = '*';

/// Empty cell in the printed board.
pub const EMPTY: char = '.';
