//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited minimax search with alpha-beta
//! pruning to pick a move for either side of any position.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::board::{Board, Player};
//! use connect4_engine::search::Searcher;
//!
//! let mut searcher = Searcher::new(Player::One);
//! let next = searcher.choose_move(&Board::new());
//!
//! assert!(next != Board::new());
//! ```

use static_assertions::*;

pub mod board;

pub mod win;

pub mod evaluate;

pub mod search;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a four-in-a-row must fit on the board in every orientation
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
