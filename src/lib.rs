//! Five-row: a five-in-a-row engine with a pattern-matching opponent.
//!
//! This crate provides the move-selection engine for a two-player
//! five-in-a-row game on a large fixed board: win detection and a tiered,
//! search-free heuristic for the computer's moves at three difficulty
//! levels. User interfaces drive it through [`game::Game`] in-process, or
//! through the text protocol in [`protocol`].
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, run lengths and mark characters
//! - [`board`] - Move store (cells, move counts, last moves)
//! - [`patterns`] - Cached "run with one open slot" patterns
//! - [`window`] - Pattern matching in windows around a move
//! - [`sweep`] - Pattern matching over every line of the board
//! - [`engine`] - Move selection and win detection
//! - [`game`] - Game session used by user interfaces
//! - [`playout`] - Seeded random opponent for demos and tests
//! - [`protocol`] - Line-based text protocol server
//!
//! ## Example
//!
//! ```
//! use five_row::board::Player;
//! use five_row::engine::Difficulty;
//! use five_row::game::Game;
//!
//! // Create a new game
//! let mut game = Game::new(Difficulty::Hard);
//!
//! // Play a human move, then let the computer reply
//! assert!(game.submit_human_move(10, 10));
//! assert!(!game.check_winner(Player::Human));
//! let reply = game.request_computer_move().unwrap();
//! println!("Computer plays {} {}", reply.row, reply.col);
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod game;
pub mod patterns;
pub mod playout;
pub mod protocol;
pub mod sweep;
pub mod window;
