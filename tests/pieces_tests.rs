//! Piece and shape table tests

use stack_tetris::core::{Board, Piece, ShapeTable};
use stack_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_POSITION};

fn spawn(table: &ShapeTable, kind: PieceKind) -> Piece {
    Piece::new(kind, table.rotations(kind), SPAWN_POSITION)
}

#[test]
fn test_state_counts() {
    let table = ShapeTable::standard();
    let expected = [
        (PieceKind::I, 2),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
        (PieceKind::O, 1),
        (PieceKind::S, 2),
        (PieceKind::T, 4),
        (PieceKind::Z, 2),
    ];
    for (kind, count) in expected {
        assert_eq!(table.state_count(kind), count, "{:?}", kind);
    }
}

#[test]
fn test_every_state_has_four_blocks() {
    let table = ShapeTable::standard();
    for kind in PieceKind::ALL {
        for state in table.rotations(kind).iter() {
            assert_eq!(state.mask().count(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_rotating_state_count_times_is_identity() {
    let table = ShapeTable::standard();
    for kind in PieceKind::ALL {
        let mut piece = spawn(&table, kind);
        let start = piece.clone();
        for _ in 0..piece.state_count() {
            piece.rotate();
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_every_kind_fits_at_spawn_on_empty_board() {
    let table = ShapeTable::standard();
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = spawn(&table, kind);
        assert!(piece.can_translate(&board, 0, 0), "{:?}", kind);
        assert!(piece.can_translate(&board, 0, -1), "{:?}", kind);
    }
}

#[test]
fn test_hard_drop_postconditions() {
    let table = ShapeTable::standard();
    let mut board = Board::new();
    board.set(3, 4, Some(PieceKind::Z));
    board.set(6, 2, Some(PieceKind::Z));

    for kind in PieceKind::ALL {
        let mut piece = spawn(&table, kind);
        let (x, y) = piece.position();
        let dropped = piece.hard_drop(&board);

        assert!(dropped >= 0);
        assert_eq!(piece.position(), (x, y - dropped));
        assert!(piece.can_translate(&board, 0, 0), "{:?}", kind);
        assert!(!piece.can_translate(&board, 0, -1), "{:?}", kind);
    }
}

#[test]
fn test_i_piece_drops_to_floor() {
    let table = ShapeTable::standard();
    let board = Board::new();
    let mut piece = spawn(&table, PieceKind::I);
    piece.hard_drop(&board);

    let min_y = piece.cells().map(|(_, y)| y).min().unwrap();
    assert_eq!(min_y, 0);
}

#[test]
fn test_cannot_leave_board_sideways() {
    let table = ShapeTable::standard();
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = spawn(&table, kind);
        while piece.can_translate(&board, -1, 0) {
            piece.translate(-1, 0);
        }
        assert_eq!(piece.cells().map(|(x, _)| x).min(), Some(0), "{:?}", kind);

        while piece.can_translate(&board, 1, 0) {
            piece.translate(1, 0);
        }
        assert_eq!(
            piece.cells().map(|(x, _)| x).max(),
            Some(BOARD_WIDTH as i8 - 1),
            "{:?}",
            kind
        );
    }
}

#[test]
fn test_rotation_blocked_by_ceiling_is_refused() {
    let table = ShapeTable::standard();
    let board = Board::new();
    // Horizontal I lies on box row 1; near the top, the vertical state pokes out.
    let mut piece = spawn(&table, PieceKind::I);
    piece.rotate();
    piece.translate(0, BOARD_HEIGHT as i8 - 2 - SPAWN_POSITION.1);
    assert!(piece.can_translate(&board, 0, 0));
    assert!(!piece.can_rotate(&board));
}
