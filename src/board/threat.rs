//! Detection of dangerous opponent line shapes.
//!
//! Scans every opponent stone along the four directions looking for open
//! or nearly-complete runs, and reports the empty cells whose occupation
//! would neutralize them, ranked by severity.

use std::collections::HashSet;

use super::{Board, Mark, Pos, ScoredMove, DIRECTIONS};

/// How far a line is followed on each side of the anchoring stone
const LINE_REACH: isize = 9;

/// At most this many blocking cells are reported
const MAX_BLOCKS: usize = 5;

/// A dangerous shape: the rendered window, its severity, and the window
/// offsets of the cell(s) that block it.
struct ThreatShape {
    window: &'static str,
    priority: i32,
    blocks: &'static [usize],
}

/// Five-cell shapes, mirrors included since windows are read in scan order.
const FIVE_SHAPES: [ThreatShape; 7] = [
    ThreatShape { window: "_XXXX", priority: 1_000, blocks: &[0] },
    ThreatShape { window: "XXXX_", priority: 1_000, blocks: &[4] },
    ThreatShape { window: "XXX_X", priority: 900, blocks: &[3] },
    ThreatShape { window: "X_XXX", priority: 900, blocks: &[1] },
    // An open three can be met at either end
    ThreatShape { window: "_XXX_", priority: 800, blocks: &[0, 4] },
    ThreatShape { window: "XX_X_", priority: 600, blocks: &[2] },
    ThreatShape { window: "_X_XX", priority: 600, blocks: &[2] },
];

/// Four-cell shapes matched at the tail of a line, where no five-cell
/// window fits.
const FOUR_SHAPES: [ThreatShape; 2] = [
    ThreatShape { window: "_XXX", priority: 400, blocks: &[0] },
    ThreatShape { window: "XXX_", priority: 400, blocks: &[3] },
];

/// All blocking cells for the opponent's dangerous shapes, sorted by
/// priority descending, deduplicated by coordinate (highest priority
/// kept), capped at [`MAX_BLOCKS`]. Never contains an occupied cell.
pub(crate) fn dangerous_blocks(board: &Board, opponent: Mark) -> Vec<ScoredMove> {
    let mut found: Vec<ScoredMove> = Vec::new();

    for (pos, mark) in board.occupied() {
        if mark != opponent {
            continue;
        }
        for dir in DIRECTIONS {
            let line = threat_line(board, pos, dir, opponent);
            scan_line(&line, &mut found);
        }
    }

    found.sort_by(|a, b| b.score.cmp(&a.score).then(a.pos.cmp(&b.pos)));
    let mut seen = HashSet::new();
    found.retain(|m| seen.insert(m.pos));
    found.truncate(MAX_BLOCKS);
    found
}

/// The contiguous in-bounds line through `origin` along `dir`, rendered
/// per cell from the opponent's perspective ('X' opponent stone, 'O'
/// defender stone, '_' empty) and paired with its coordinate.
fn threat_line(
    board: &Board,
    origin: Pos,
    dir: (isize, isize),
    opponent: Mark,
) -> Vec<(char, Pos)> {
    let render = |pos: Pos| -> (char, Pos) {
        let ch = match board.get(pos) {
            Some(m) if m == opponent => 'X',
            Some(_) => 'O',
            None => '_',
        };
        (ch, pos)
    };

    let mut back = Vec::new();
    for i in 1..=LINE_REACH {
        match board.neighbor(origin, -dir.0 * i, -dir.1 * i) {
            Some(pos) => back.push(pos),
            None => break,
        }
    }

    let mut line = Vec::with_capacity(2 * LINE_REACH as usize + 1);
    line.extend(back.into_iter().rev().map(render));
    line.push(render(origin));
    for i in 1..=LINE_REACH {
        match board.neighbor(origin, dir.0 * i, dir.1 * i) {
            Some(pos) => line.push(render(pos)),
            None => break,
        }
    }
    line
}

/// Slide windows along a rendered line and collect blocking cells for
/// every matched shape. Only empty cells are ever offered as blocks.
fn scan_line(line: &[(char, Pos)], found: &mut Vec<ScoredMove>) {
    let len = line.len();
    if len < 4 {
        return;
    }
    let chars: String = line.iter().map(|(c, _)| *c).collect();

    for i in 0..=len - 4 {
        let (window, shapes): (&str, &[ThreatShape]) = if len - i >= 5 {
            (&chars[i..i + 5], &FIVE_SHAPES)
        } else {
            (&chars[i..i + 4], &FOUR_SHAPES)
        };

        for shape in shapes {
            if shape.window != window {
                continue;
            }
            for &offset in shape.blocks {
                let (ch, pos) = line[i + offset];
                if ch == '_' {
                    found.push(ScoredMove {
                        pos,
                        score: shape.priority,
                    });
                }
            }
        }
    }
}
