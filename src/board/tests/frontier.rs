//! Candidate generation tests.

use std::collections::HashSet;

use crate::board::frontier::frontier;
use crate::board::{Board, Pos};

#[test]
fn test_blank_board_yields_center_only() {
    let board = Board::new(15);
    assert_eq!(frontier(&board), vec![Pos::new(7, 7)]);
}

#[test]
fn test_interior_stone_yields_eight_neighbors() {
    let board = Board::from_marks(&[
        ".....",
        ".....",
        "..X..",
        ".....",
        ".....",
    ])
    .unwrap();

    let cells: HashSet<Pos> = frontier(&board).into_iter().collect();
    assert_eq!(cells.len(), 8);
    for dr in -1i32..=1 {
        for dc in -1i32..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let pos = Pos::new((2 + dr) as usize, (2 + dc) as usize);
            assert!(cells.contains(&pos), "missing neighbor {pos}");
        }
    }
}

#[test]
fn test_corner_stone_is_clipped() {
    let board = Board::from_marks(&["X..", "...", "..."]).unwrap();
    let cells = frontier(&board);
    assert_eq!(cells.len(), 3);
}

#[test]
fn test_adjacent_stones_deduplicate() {
    let board = Board::from_marks(&[
        ".....",
        ".....",
        ".XO..",
        ".....",
        ".....",
    ])
    .unwrap();

    let cells = frontier(&board);
    let unique: HashSet<Pos> = cells.iter().copied().collect();
    assert_eq!(cells.len(), unique.len(), "frontier must not repeat cells");
    // Two adjacent stones share two vertical neighbors on each side
    assert_eq!(cells.len(), 10);
}

#[test]
fn test_frontier_never_returns_occupied_cells() {
    let board = Board::from_marks(&[
        "XO...",
        "OX...",
        ".....",
        ".....",
        ".....",
    ])
    .unwrap();

    for pos in frontier(&board) {
        assert_eq!(board.get(pos), None, "occupied cell {pos} in frontier");
    }
}
