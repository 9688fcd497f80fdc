//! Board tests - occupancy, commit and row clearing through the public API

use stack_tetris::core::{Board, Piece, ShapeTable};
use stack_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn piece_at(kind: PieceKind, position: (i8, i8)) -> Piece {
    Piece::new(kind, ShapeTable::standard().rotations(kind), position)
}

fn fill_row_except(board: &mut Board, y: i8, gap: Option<i8>) {
    for x in 0..BOARD_WIDTH as i8 {
        if Some(x) != gap {
            board.set(x, y, Some(PieceKind::T));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y), "({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_outside_reads_as_occupied() {
    let board = Board::new();
    for (x, y) in [(-1, 0), (10, 0), (0, -1), (0, 19), (-5, -5), (100, 100)] {
        assert!(board.is_occupied(x, y), "({}, {}) should be a wall", x, y);
        assert_eq!(board.get(x, y), None);
    }
}

#[test]
fn test_set_out_of_bounds_is_rejected() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_commit_adds_exactly_four_cells() {
    let mut board = Board::new();
    let piece = piece_at(PieceKind::T, (0, -1));
    let written = board.commit(&piece);

    assert_eq!(written.len(), 4);
    assert_eq!(board.occupied_count(), 4);
    for (x, y) in piece.cells() {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::T)));
    }
}

#[test]
fn test_clear_no_rows() {
    let mut board = Board::new();
    fill_row_except(&mut board, 0, Some(3));
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_row_shifts_down() {
    let mut board = Board::new();
    fill_row_except(&mut board, 0, None);
    board.set(2, 1, Some(PieceKind::S));
    board.set(7, 5, Some(PieceKind::Z));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(2, 0), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 4), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(7, 5), Some(None));
}

#[test]
fn test_clear_two_separated_rows() {
    let mut board = Board::new();
    fill_row_except(&mut board, 2, None);
    fill_row_except(&mut board, 4, None);
    board.set(0, 3, Some(PieceKind::J));
    board.set(0, 5, Some(PieceKind::L));

    let cleared = board.take_full_rows();
    // Row 4 has dropped to 3 by the time it is removed.
    assert_eq!(cleared.as_slice(), &[2, 3]);
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 3), Some(Some(PieceKind::L)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_vertical_i_completes_row() {
    let mut board = Board::new();
    fill_row_except(&mut board, 0, Some(5));

    // Vertical I covers column x + 1, rows y..y + 4.
    let mut piece = piece_at(PieceKind::I, (4, 15));
    let dropped = piece.hard_drop(&board);
    assert_eq!(dropped, 15);
    assert_eq!(piece.position(), (4, 0));

    board.commit(&piece);
    let cleared = board.take_full_rows();
    assert_eq!(cleared.as_slice(), &[0]);

    // Remaining three blocks of the I slid down one row.
    assert_eq!(board.occupied_count(), 3);
    for y in 0..3 {
        assert_eq!(board.get(5, y), Some(Some(PieceKind::I)));
    }
    assert!(!board.is_row_full(0));
}

#[test]
fn test_no_full_row_survives_a_clear() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        let gap = if y % 3 == 0 { None } else { Some(y % BOARD_WIDTH as i8) };
        fill_row_except(&mut board, y, gap);
    }
    let cleared = board.clear_full_rows();
    assert_eq!(cleared, 7);
    for y in 0..BOARD_HEIGHT as i8 {
        assert!(!board.is_row_full(y));
    }
    assert_eq!(board.occupied_count(), 12 * 9);
}
