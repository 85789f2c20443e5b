//! Piece tests - spawn, rotation and the fall-to-floor walk

use blockfall::core::{collides, matrix_of, Field, Piece};
use blockfall::types::{Color, ShapeKind, COLUMNS, ROWS};

#[test]
fn test_spawn_positions() {
    let expected = [
        (ShapeKind::I, 4),
        (ShapeKind::T, 5),
        (ShapeKind::O, 5),
        (ShapeKind::S, 5),
        (ShapeKind::Z, 5),
        (ShapeKind::L, 5),
        (ShapeKind::J, 5),
    ];
    for (kind, x) in expected {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.x, x, "{kind:?}");
        assert_eq!(piece.y, 0, "{kind:?}");
        assert_eq!(piece.matrix, matrix_of(kind));
    }
}

#[test]
fn test_four_rotations_restore_matrix() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::spawn(kind);
        let start = piece;
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece, start, "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions_and_keeps_anchor() {
    let mut piece = Piece::spawn(ShapeKind::L);
    assert_eq!((piece.matrix.rows(), piece.matrix.cols()), (2, 3));

    piece.rotate();
    assert_eq!((piece.matrix.rows(), piece.matrix.cols()), (3, 2));
    assert_eq!((piece.x, piece.y), (5, 0));
    // L turned clockwise: {1,1},{1,0},{1,0}
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(0, 5), (0, 6), (1, 5), (2, 5)]);

    piece.rotate_back();
    assert_eq!(piece, Piece::spawn(ShapeKind::L));
}

#[test]
fn test_every_kind_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(Piece::spawn(kind).cells().count(), 4, "{kind:?}");
    }
}

#[test]
fn test_o_piece_falls_to_floor_and_merges() {
    let field_before = Field::new();
    let mut field = field_before.clone();
    let mut piece = Piece::spawn(ShapeKind::O);
    assert_eq!((piece.x, piece.y), (5, 0));

    let mut steps = 0;
    loop {
        piece.translate(0, 1);
        if collides(&piece, &field) {
            piece.translate(0, -1);
            break;
        }
        steps += 1;
    }
    assert_eq!(steps, 20);
    assert_eq!(piece.y, 20);

    field.merge(&piece);
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let filled = (row == 20 || row == 21) && (col == 5 || col == 6);
            let expected = if filled { Some(Color::Yellow) } else { None };
            assert_eq!(field.cell_at(row, col), expected, "cell ({row}, {col})");
        }
    }
    assert_eq!(field.clear_full_rows(), 0);
    assert_ne!(field, field_before);
}

#[test]
fn test_piece_above_top_does_not_collide() {
    let field = Field::new();
    let mut piece = Piece::spawn(ShapeKind::I);
    piece.rotate();
    piece.y = -3;
    assert!(!collides(&piece, &field));
}
