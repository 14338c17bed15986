//! loa-rust: a Lines of Action engine.
//!
//! This crate implements the board game Lines of Action: an 8x8
//! two-color game in which a side wins by gathering all of its pieces
//! into a single 8-directionally connected cluster. A piece moves along
//! a row, column, or diagonal exactly as many squares as there are
//! pieces of either color anywhere on that line, jumping friendly
//! pieces but never enemy ones.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, rules, and search parameters
//! - [`square`] - Coordinates and compass directions
//! - [`piece`] - Piece colors
//! - [`moves`] - Moves and the "c3-f6" notation
//! - [`board`] - Game state, legality, and win detection
//! - [`search`] - Alpha-beta machine player
//! - [`cli`] - Interactive command loop
//!
//! ## Example
//!
//! ```
//! use loa_rust::board::Board;
//! use loa_rust::search::MachinePlayer;
//!
//! // Black moves first on the standard board.
//! let mut board = Board::new();
//! let mut player = MachinePlayer::with_depth(board.turn(), 2);
//!
//! let choice = player.search_for_move(&board).expect("moves available");
//! board.make_move(choice).expect("search picks legal moves");
//! ```

pub mod board;
pub mod cli;
pub mod constants;
pub mod moves;
pub mod piece;
pub mod search;
pub mod square;
