//! Error types for board construction and move selection.

use std::fmt;

use super::Pos;

/// Error type for board construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board has no rows
    Empty,
    /// A row's length does not match the board dimension
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid cell character in a fixture string
    InvalidCell { char: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Empty => write!(f, "Board must have at least one row"),
            BoardError::Ragged {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells, expected {expected} (board must be square)"
                )
            }
            BoardError::InvalidCell { char } => {
                write!(f, "Invalid cell character '{char}', expected 'X', 'O' or '.'")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for move selection failures.
///
/// These never escape [`select_move`](crate::board::select_move); the
/// orchestration layer recovers every variant by falling back to the
/// board-center move and records the failure on the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The supplied board has zero size
    EmptyBoard,
    /// No candidate cell could be produced
    NoCandidates,
    /// A produced move points outside the board or at an occupied cell
    Unplayable { pos: Pos },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::EmptyBoard => write!(f, "Board has no cells"),
            SelectError::NoCandidates => write!(f, "No candidate moves available"),
            SelectError::Unplayable { pos } => {
                write!(f, "Produced move {pos} is not playable")
            }
        }
    }
}

impl std::error::Error for SelectError {}
