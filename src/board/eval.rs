//! Pattern-based heuristic evaluation.
//!
//! Scores the strategic value of placing a stone on a cell by scanning the
//! four line directions through it and matching fixed substring patterns
//! against a priority table. Also provides the whole-board static
//! evaluation used at search leaves.

use once_cell::sync::Lazy;

use super::state::Scan;
use super::{Board, Mark, Pos, DIRECTIONS};

/// Cells scanned on each side of the target when rendering a line window.
const WINDOW_RADIUS: isize = 5;

/// Base line patterns over {X: own stone, O: blocker, _: empty} and their
/// priorities. Class ordering is load-bearing: open four > four with one
/// gap > open three > broken three. Exact values are tuning.
const BASE_PATTERNS: [(&str, i32); 6] = [
    ("XXXX", 10_000),
    ("_XXXX", 10_000),
    ("XXXX_", 10_000),
    ("XXX_X", 8_000),
    ("_XXX_", 5_000),
    ("XX_X", 3_000),
];

/// A direction whose window scores above this counts as a threat when
/// totting up the multi-direction bonus.
const THREAT_DIRECTION_FLOOR: i32 = 1_000;

/// Bonus for threatening in two directions at once
const DOUBLE_THREAT_BONUS: i32 = 2_000;

/// Additional bonus for threatening in three or more
const TRIPLE_THREAT_BONUS: i32 = 5_000;

/// `BASE_PATTERNS` plus the reversed mirror of each asymmetric pattern.
/// Windows are rendered in a fixed scan direction, so a shape and its
/// mirror are distinct strings that must both be present.
static LINE_PATTERNS: Lazy<Vec<(String, i32)>> = Lazy::new(|| {
    let mut expanded: Vec<(String, i32)> = Vec::new();
    for (pattern, priority) in BASE_PATTERNS {
        if !expanded.iter().any(|(p, _)| p == pattern) {
            expanded.push((pattern.to_string(), priority));
        }
        let mirror: String = pattern.chars().rev().collect();
        if mirror != pattern && !expanded.iter().any(|(p, _)| p == &mirror) {
            expanded.push((mirror, priority));
        }
    }
    expanded
});

/// Render the fixed-width window through `pos` along `dir`, from the
/// perspective of `mark`: own stone 'X', opponent 'O', empty '_'.
/// Out-of-bounds cells render as 'O' (a board edge blocks like a stone).
fn line_window(board: &Board, pos: Pos, dir: (isize, isize), mark: Mark) -> String {
    let mut window = String::with_capacity((2 * WINDOW_RADIUS + 1) as usize);
    for i in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let row = pos.row as isize + dir.0 * i;
        let col = pos.col as isize + dir.1 * i;
        window.push(match board.scan(row, col) {
            Scan::Stone(m) if m == mark => 'X',
            Scan::Stone(_) | Scan::Off => 'O',
            Scan::Empty => '_',
        });
    }
    window
}

/// Sum of the priorities of every table pattern the window contains.
fn window_priority(window: &str) -> i32 {
    LINE_PATTERNS
        .iter()
        .filter(|(pattern, _)| window.contains(pattern.as_str()))
        .map(|(_, priority)| priority)
        .sum()
}

/// Attack value of placing `mark` at `pos`: per-direction pattern scores
/// for the hypothetical stone, plus the multi-direction threat bonus.
pub(crate) fn attack_score(board: &mut Board, pos: Pos, mark: Mark) -> i32 {
    board.with_stone(pos, mark, |b| {
        let mut total = 0;
        let mut threat_dirs = 0;
        for dir in DIRECTIONS {
            let priority = window_priority(&line_window(b, pos, dir, mark));
            total += priority;
            if priority > THREAT_DIRECTION_FLOOR {
                threat_dirs += 1;
            }
        }
        if threat_dirs >= 2 {
            total += DOUBLE_THREAT_BONUS;
        }
        if threat_dirs >= 3 {
            total += TRIPLE_THREAT_BONUS;
        }
        total
    })
}

/// Defense value of `pos`: what the opponent would gain by playing there,
/// scored by placing a hypothetical opponent stone.
pub(crate) fn defense_score(board: &mut Board, pos: Pos, opponent: Mark) -> i32 {
    board.with_stone(pos, opponent, |b| {
        DIRECTIONS
            .iter()
            .map(|&dir| window_priority(&line_window(b, pos, dir, opponent)))
            .sum()
    })
}

/// Composite move score: attack + defense × 1.5. Defense is weighted
/// higher to bias the engine toward blocking.
pub(crate) fn composite_score(board: &mut Board, pos: Pos, mark: Mark) -> i32 {
    let attack = attack_score(board, pos, mark);
    let defense = defense_score(board, pos, mark.opponent());
    attack + defense + defense / 2
}

/// Strength of the run through one stone along one direction: consecutive
/// stones counted both ways (empty cells reset the run, blockers and the
/// board edge stop the walk), graded by how many ends stay open.
fn run_strength(board: &Board, pos: Pos, dir: (isize, isize), mark: Mark) -> i32 {
    let (dr, dc) = dir;
    let (row, col) = (pos.row as isize, pos.col as isize);

    let mut max_run = 0;
    let mut run = 0;
    for i in 0..6 {
        match board.scan(row + dr * i, col + dc * i) {
            Scan::Stone(m) if m == mark => {
                run += 1;
                max_run = max_run.max(run);
            }
            Scan::Empty => run = 0,
            _ => break,
        }
    }
    run = 0;
    for i in 1..6 {
        match board.scan(row - dr * i, col - dc * i) {
            Scan::Stone(m) if m == mark => {
                run += 1;
                max_run = max_run.max(run);
            }
            Scan::Empty => run = 0,
            _ => break,
        }
    }

    let mut open_ends = 0;
    if board.scan(row - dr, col - dc) == Scan::Empty {
        open_ends += 1;
    }
    if board.scan(row + dr, col + dc) == Scan::Empty {
        open_ends += 1;
    }

    match (max_run, open_ends) {
        (5.., _) => 1_000_000,
        (4, 2..) => 50_000,
        (4, 1) => 10_000,
        (4, _) => 1_000,
        (3, 2..) => 5_000,
        (3, 1) => 500,
        (3, _) => 50,
        (2, 2..) => 100,
        (2, 1) => 10,
        (2, _) => 2,
        (1, 2..) => 5,
        _ => 1,
    }
}

/// Whole-board heuristic for one mark: run strengths of every stone in all
/// four directions, divided by 4 since each line is seen once per
/// direction from each of its stones.
pub(crate) fn static_eval(board: &Board, mark: Mark) -> i32 {
    let mut total = 0;
    for (pos, stone) in board.occupied() {
        if stone != mark {
            continue;
        }
        for dir in DIRECTIONS {
            total += run_strength(board, pos, dir, mark);
        }
    }
    total / 4
}
