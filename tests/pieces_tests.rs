//! Pieces module tests - matrix rotation and kick resolution

use blockfall::core::pieces::shape_offsets;
use blockfall::core::{rotate_cw, try_rotate, Piece, Playfield};
use blockfall::types::{PieceKind, ShapeMatrix, GRID_WIDTH, KICK_OFFSETS, SPAWN_X, SPAWN_Y};

fn offsets(shape: &ShapeMatrix) -> Vec<(i8, i8)> {
    shape_offsets(shape).collect()
}

// ============== Shape Tests ==============

#[test]
fn test_canonical_shapes() {
    assert_eq!(offsets(&PieceKind::I.shape()), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(offsets(&PieceKind::O.shape()), [(1, 1), (2, 1), (1, 2), (2, 2)]);
    assert_eq!(offsets(&PieceKind::T.shape()), [(1, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(offsets(&PieceKind::S.shape()), [(1, 1), (2, 1), (0, 2), (1, 2)]);
    assert_eq!(offsets(&PieceKind::Z.shape()), [(0, 1), (1, 1), (1, 2), (2, 2)]);
    assert_eq!(offsets(&PieceKind::J.shape()), [(0, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(offsets(&PieceKind::L.shape()), [(2, 1), (0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_spawn_position() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.x, GRID_WIDTH as i8 / 2 - 2);
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_keeps_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = kind.shape();
        for _ in 0..4 {
            shape = rotate_cw(&shape);
            assert_eq!(offsets(&shape).len(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_s_rotation() {
    let east = rotate_cw(&PieceKind::S.shape());
    assert_eq!(offsets(&east), [(1, 0), (1, 1), (2, 1), (2, 2)]);
}

#[test]
fn test_rotation_is_not_a_table_lookup() {
    // Rotating a non-canonical matrix works the same way.
    let mut shape = [[false; 4]; 4];
    shape[0][0] = true;
    shape[0][1] = true;
    let rotated = rotate_cw(&shape);
    assert_eq!(offsets(&rotated), [(3, 0), (3, 1)]);
}

// ============== Kick Tests ==============

#[test]
fn test_kick_offsets_order() {
    assert_eq!(KICK_OFFSETS, [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)]);
}

#[test]
fn test_try_rotate_against_right_wall() {
    let field = Playfield::new();
    // Vertical I flush against the right wall (cells in column 14).
    let piece = Piece {
        kind: PieceKind::I,
        shape: rotate_cw(&PieceKind::I.shape()),
        x: GRID_WIDTH as i8 - 3,
        y: 5,
    };
    assert!(!field.collides(&piece, 0, 0));

    // Rotated row covers columns 12..=15; (-1, 0) is the first kick that fits.
    let result = try_rotate(&piece, |p, dx, dy| field.collides(p, dx, dy));
    match result {
        Some((rotated, offset)) => {
            assert_eq!(offset, (-1, 0));
            assert!(rotated.cells().all(|(x, _)| x < GRID_WIDTH as i8));
        }
        None => panic!("expected a kick to the left"),
    }
}

#[test]
fn test_try_rotate_blocked_everywhere_returns_none() {
    let mut field = Playfield::new();
    for y in 0..20 {
        for x in 0..GRID_WIDTH as i8 {
            if !((6..=8).contains(&x) && (5..=6).contains(&y)) {
                field.set(x, y, Some(PieceKind::Z.color()));
            }
        }
    }
    // A 3-long bar has no room to stand up inside a 3x2 pocket.
    let mut piece = Piece::new(PieceKind::I);
    piece.x = 5;
    piece.y = 5;
    piece.shape = [[false; 4]; 4];
    piece.shape[1] = [false, true, true, true];
    assert!(!field.collides(&piece, 0, 0));

    let rotated = try_rotate(&piece, |p, dx, dy| field.collides(p, dx, dy));
    assert!(rotated.is_none());
}
