//! Board construction and scoped placement tests.

use crate::board::{Board, BoardError, Mark, Pos};

#[test]
fn test_from_marks_places_stones() {
    let board = Board::from_marks(&[
        ".....",
        ".X...",
        "..O..",
        ".....",
        ".....",
    ])
    .unwrap();

    assert_eq!(board.size(), 5);
    assert_eq!(board.stones(), 2);
    assert_eq!(board.get(Pos::new(1, 1)), Some(Mark::X));
    assert_eq!(board.get(Pos::new(2, 2)), Some(Mark::O));
    assert_eq!(board.get(Pos::new(0, 0)), None);
}

#[test]
fn test_from_marks_rejects_ragged_rows() {
    let err = Board::from_marks(&["...", "..", "..."]).unwrap_err();
    assert_eq!(
        err,
        BoardError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_from_marks_rejects_invalid_cell() {
    let err = Board::from_marks(&["..", ".z"]).unwrap_err();
    assert_eq!(err, BoardError::InvalidCell { char: 'z' });
}

#[test]
fn test_from_rows_rejects_empty() {
    let err = Board::from_rows(&[]).unwrap_err();
    assert_eq!(err, BoardError::Empty);
}

#[test]
fn test_from_rows_places_stones() {
    let rows = vec![
        vec![None, Some(Mark::X)],
        vec![Some(Mark::O), None],
    ];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.get(Pos::new(0, 1)), Some(Mark::X));
    assert_eq!(board.get(Pos::new(1, 0)), Some(Mark::O));
}

#[test]
fn test_center() {
    assert_eq!(Board::new(15).center(), Pos::new(7, 7));
    assert_eq!(Board::new(8).center(), Pos::new(4, 4));
}

#[test]
fn test_place_and_lift_restore() {
    let mut board = Board::new(5);
    let before = board.to_string();

    board.place(Pos::new(2, 2), Mark::X);
    assert_eq!(board.stones(), 1);
    assert_eq!(board.get(Pos::new(2, 2)), Some(Mark::X));

    board.lift(Pos::new(2, 2));
    assert_eq!(board.stones(), 0);
    assert_eq!(board.to_string(), before);
}

#[test]
fn test_with_stone_removes_on_exit() {
    let mut board = Board::new(5);
    let seen = board.with_stone(Pos::new(1, 3), Mark::O, |b| b.get(Pos::new(1, 3)));
    assert_eq!(seen, Some(Mark::O));
    assert_eq!(board.get(Pos::new(1, 3)), None);
    assert!(board.is_blank());
}

#[test]
fn test_is_full() {
    let board = Board::from_marks(&["XO", "OX"]).unwrap();
    assert!(board.is_full());
    let board = Board::from_marks(&["XO", "O."]).unwrap();
    assert!(!board.is_full());
}

#[test]
fn test_get_out_of_bounds_is_none() {
    let board = Board::from_marks(&["XX", "XX"]).unwrap();
    assert_eq!(board.get(Pos::new(2, 0)), None);
    assert_eq!(board.get(Pos::new(0, 5)), None);
}

#[test]
fn test_display_renders_grid() {
    let board = Board::from_marks(&["X.", ".O"]).unwrap();
    let shown = board.to_string();
    assert!(shown.contains('X'));
    assert!(shown.contains('O'));
    assert_eq!(shown.lines().count(), 2);
}
