//! Win detection.
//!
//! The engine consumes win detection through the [`WinOracle`] seam: a
//! predicate over (board, last-placed coordinate). [`is_winning_line`] is
//! the stock implementation.

use super::state::Scan;
use super::{Board, Pos, DIRECTIONS};

/// The win predicate consumed by the search engine: did the stone placed
/// at the given coordinate complete a winning line?
pub(crate) type WinOracle = fn(&Board, Pos) -> bool;

/// Returns true if the stone at `pos` sits in a run of five or more of
/// its own mark along any of the four directions.
///
/// Only lines through `pos` are inspected, so this must be evaluated
/// immediately after a (real or hypothetical) placement there.
#[must_use]
pub fn is_winning_line(board: &Board, pos: Pos) -> bool {
    let Some(mark) = board.get(pos) else {
        return false;
    };
    let (row, col) = (pos.row as isize, pos.col as isize);

    for (dr, dc) in DIRECTIONS {
        let mut count = 1;

        for i in 1..5 {
            match board.scan(row - dr * i, col - dc * i) {
                Scan::Stone(m) if m == mark => count += 1,
                _ => break,
            }
        }
        for i in 1..5 {
            match board.scan(row + dr * i, col + dc * i) {
                Scan::Stone(m) if m == mark => count += 1,
                _ => break,
            }
        }

        if count >= 5 {
            return true;
        }
    }
    false
}
