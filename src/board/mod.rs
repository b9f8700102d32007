//! Board model and move-selection engine for five-in-a-row.
//!
//! The selector favors immediate wins and forced blocks, then falls back
//! to pattern-based heuristics or a depth-limited negamax search depending
//! on the requested difficulty.
//!
//! # Example
//! ```
//! use gomoku_engine::board::{select_move, Board, Difficulty, Mark};
//!
//! let board = Board::new(15);
//! let mv = select_move(&board, Mark::X, Difficulty::Medium, None);
//! assert_eq!((mv.row, mv.col), (7, 7));
//! ```

mod error;
mod eval;
mod frontier;
mod rules;
mod search;
mod select;
pub mod simple;
mod state;
mod threat;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{BoardError, SelectError};
pub use state::Board;
pub use types::{Difficulty, Mark, Pos, ScoredMove};

// Public API - selection entry point and the stock win oracle
pub use rules::is_winning_line;
pub use select::select_move;

pub(crate) use types::DIRECTIONS;
