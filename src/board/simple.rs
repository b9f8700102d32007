//! Single-pass pattern scorer.
//!
//! A cheaper alternative strategy to the search engine: every frontier
//! cell is scored in one pass over a grouped pattern table, with no
//! hypothetical placement and no lookahead. Its table and conventions
//! are its own, not the search evaluator's: attack is the weighted side
//! and the board edge reads as open.

use once_cell::sync::Lazy;

use super::state::Scan;
use super::frontier::frontier;
use super::{Board, Mark, Pos, DIRECTIONS};

/// Cells scanned on each side of the target
const WINDOW_RADIUS: isize = 4;

/// Grouped patterns, strongest group first. Within a window every matched
/// pattern contributes, so scores accumulate across groups.
const SCORE_GROUPS: [&[(&str, i32)]; 4] = [
    &[("_XXXX", 100_000), ("X_XXX", 100_000), ("XX_XX", 100_000)],
    &[
        ("__XXX", 10_000),
        ("_X_XX", 10_000),
        ("_XX_X", 10_000),
        ("_XXX_", 10_000),
        ("X__XX", 10_000),
        ("X_X_X", 10_000),
    ],
    &[
        ("___XX", 500),
        ("__X_X", 500),
        ("__XX_", 500),
        ("_X__X", 500),
        ("_X_X_", 500),
        ("X___X", 500),
    ],
    &[("X____", 50), ("_X___", 50), ("__X__", 50)],
];

/// `SCORE_GROUPS` flattened with each asymmetric pattern's mirror added
static EXPANDED_PATTERNS: Lazy<Vec<(String, i32)>> = Lazy::new(|| {
    let mut expanded = Vec::new();
    for group in SCORE_GROUPS {
        for &(pattern, score) in group {
            expanded.push((pattern.to_string(), score));
            let mirror: String = pattern.chars().rev().collect();
            if mirror != pattern {
                expanded.push((mirror, score));
            }
        }
    }
    expanded
});

/// Attack and defense components of one cell's score.
#[derive(Clone, Copy, Debug)]
pub struct CellScore {
    /// attack × 1.5 + defense
    pub score: i32,
    pub attack: i32,
    pub defense: i32,
}

/// Render the window through `pos` for `mark`. Off-board cells read as
/// empty in this scorer.
fn line_window(board: &Board, pos: Pos, dir: (isize, isize), mark: Mark) -> String {
    let mut window = String::with_capacity((2 * WINDOW_RADIUS + 1) as usize);
    for i in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let row = pos.row as isize + dir.0 * i;
        let col = pos.col as isize + dir.1 * i;
        window.push(match board.scan(row, col) {
            Scan::Stone(m) if m == mark => 'X',
            Scan::Stone(_) => 'O',
            Scan::Empty | Scan::Off => '_',
        });
    }
    window
}

fn cell_value(board: &Board, pos: Pos, mark: Mark) -> i32 {
    let mut value = 0;
    for dir in DIRECTIONS {
        let window = line_window(board, pos, dir, mark);
        for (pattern, score) in EXPANDED_PATTERNS.iter() {
            if window.contains(pattern.as_str()) {
                value += score;
            }
        }
    }
    value
}

/// Score every frontier cell for `mark` in a single pass.
#[must_use]
pub fn score_cells(board: &Board, mark: Mark) -> Vec<(Pos, CellScore)> {
    let opponent = mark.opponent();
    frontier(board)
        .into_iter()
        .map(|pos| {
            let attack = cell_value(board, pos, mark);
            let defense = cell_value(board, pos, opponent);
            let score = attack + attack / 2 + defense;
            (pos, CellScore {
                score,
                attack,
                defense,
            })
        })
        .collect()
}

/// The highest-scoring frontier cell, ties broken by coordinate.
#[must_use]
pub fn quick_move(board: &Board, mark: Mark) -> Option<Pos> {
    score_cells(board, mark)
        .into_iter()
        .max_by(|(ap, a), (bp, b)| a.score.cmp(&b.score).then(bp.cmp(ap)))
        .map(|(pos, _)| pos)
}
