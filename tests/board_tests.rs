//! Board tests

use plugin_tetris::core::{Board, Piece};
use plugin_tetris::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, cell: Cell) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, cell);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 220);
    assert!(board.cells().iter().all(|c| c.is_empty()));
    assert_eq!(board.occupied().count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert_eq!(board.get(9, 21), Some(Cell::Empty));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Cell::T));
    assert_eq!(board.get(5, 10), Some(Cell::T));
    assert!(!board.is_free(5, 10));

    assert!(!board.set(10, 0, Cell::T));
    assert!(!board.set(-1, 0, Cell::T));
}

#[test]
fn test_valid_position_walls_and_floor() {
    let board = Board::new();
    let line = Piece::new(PieceKind::Line);

    // Cells at x-2..=x+1.
    assert!(board.is_valid_position(&line, 2, 0));
    assert!(!board.is_valid_position(&line, 1, 0));
    assert!(board.is_valid_position(&line, 8, 21));
    assert!(!board.is_valid_position(&line, 9, 21));
    assert!(!board.is_valid_position(&line, 5, 22));

    // Cells above the top edge are out of bounds too.
    let t = Piece::new(PieceKind::T);
    assert!(!board.is_valid_position(&t, 5, -1));
}

#[test]
fn test_valid_position_overlap() {
    let mut board = Board::new();
    board.set(5, 21, Cell::Z);
    let square = Piece::new(PieceKind::Square);

    // Square covers (x, y) .. (x+1, y+1).
    assert!(!board.is_valid_position(&square, 4, 20));
    assert!(board.is_valid_position(&square, 6, 20));
}

#[test]
fn test_lock_writes_piece_kind() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::MirroredL);
    board.lock(&piece, 4, 20);

    let mut locked: Vec<_> = board.occupied().map(|(x, y, _)| (x, y)).collect();
    locked.sort();
    let mut expected: Vec<_> = piece.cells_at(4, 20).collect();
    expected.sort();
    assert_eq!(locked, expected);
    assert!(board.occupied().all(|(_, _, c)| c == Cell::MirroredL));
}

#[test]
fn test_lock_skips_cells_above_board() {
    let mut board = Board::new();
    let line = Piece::new(PieceKind::Line).rotated();
    // Vertical line spans y-2..=y+1; with y = 0 two cells are off the top.
    board.lock(&line, 3, 0);
    assert_eq!(board.occupied().count(), 2);
}

#[test]
fn test_clear_single_row() {
    let mut board = Board::new();
    fill_row(&mut board, 21, Cell::Line);
    board.set(0, 20, Cell::T);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(0, 21), Some(Cell::T));
    assert!(board.is_row_empty(20));
    assert_eq!(board.occupied().count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 21, Cell::Z);
    board.set(1, 20, Cell::S);
    fill_row(&mut board, 19, Cell::Z);
    board.set(2, 18, Cell::T);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(1, 21), Some(Cell::S));
    assert_eq!(board.get(2, 20), Some(Cell::T));
    assert_eq!(board.occupied().count(), 2);
    assert!(!board.is_row_full(21));
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 18..22 {
        fill_row(&mut board, y, Cell::Line);
    }
    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.occupied().count(), 0);
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 21, Cell::L);
    }
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}
