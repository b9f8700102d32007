pub mod board;
pub mod tt;
pub mod zobrist;

pub use board::{select_move, Board, Difficulty, Mark, Pos};
pub use tt::TranspositionTable;
