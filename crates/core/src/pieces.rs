//! Pieces module - tetromino instances and matrix rotation
//!
//! Every piece carries its own 4x4 occupancy matrix. Rotation is computed from the
//! current matrix (never looked up from pre-rotated tables) and collisions are
//! resolved with one shared, ordered list of kick offsets.

use crate::types::{Color, PieceKind, ShapeMatrix, KICK_OFFSETS, SHAPE_SIZE, SPAWN_X, SPAWN_Y};

/// A tetromino instance: variant, current matrix and grid position.
///
/// `(x, y)` anchors the matrix's top-left corner in playfield coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in its canonical orientation at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Occupied cells relative to the matrix origin, as (col, row)
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        shape_offsets(&self.shape)
    }

    /// Occupied cells in absolute playfield coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece with its matrix rotated clockwise, position unchanged
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate_cw(&self.shape),
            ..*self
        }
    }
}

/// Occupied (col, row) pairs of a matrix, row-major
pub fn shape_offsets(shape: &ShapeMatrix) -> impl Iterator<Item = (i8, i8)> + '_ {
    shape.iter().enumerate().flat_map(|(row, cols)| {
        cols.iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(col, _)| (col as i8, row as i8))
    })
}

/// Rotate a matrix 90 degrees clockwise: source (row, col) lands on (col, 3 - row).
pub fn rotate_cw(shape: &ShapeMatrix) -> ShapeMatrix {
    let mut out = [[false; SHAPE_SIZE]; SHAPE_SIZE];
    for (row, cols) in shape.iter().enumerate() {
        for (col, &filled) in cols.iter().enumerate() {
            out[col][SHAPE_SIZE - 1 - row] = filled;
        }
    }
    out
}

/// Try to rotate a piece clockwise, kicking it if the rotated shape collides.
///
/// `collides(piece, dx, dy)` reports whether `piece` shifted by (dx, dy) overlaps
/// anything. The unshifted rotation is tried first, then every entry of
/// [`KICK_OFFSETS`] in order.
/// Returns Some(rotated_piece, applied_offset) if successful, None if every candidate fails
pub fn try_rotate(
    piece: &Piece,
    collides: impl Fn(&Piece, i8, i8) -> bool,
) -> Option<(Piece, (i8, i8))> {
    let rotated = piece.rotated();

    std::iter::once((0, 0))
        .chain(KICK_OFFSETS)
        .find(|&(dx, dy)| !collides(&rotated, dx, dy))
        .map(|(dx, dy)| (rotated.shifted(dx, dy), (dx, dy)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &ShapeMatrix) -> [&'static str; 4] {
        let mut rows = ["....", "....", "....", "...."];
        let lookup = [
            "....", "...#", "..#.", "..##", ".#..", ".#.#", ".##.", ".###", "#...", "#..#",
            "#.#.", "#.##", "##..", "##.#", "###.", "####",
        ];
        for (r, cols) in shape.iter().enumerate() {
            let bits = cols
                .iter()
                .fold(0usize, |acc, &c| (acc << 1) | usize::from(c));
            rows[r] = lookup[bits];
        }
        rows
    }

    #[test]
    fn test_piece_new_at_spawn() {
        let piece = Piece::new(PieceKind::S);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.shape, PieceKind::S.shape());
        assert_eq!(piece.color(), PieceKind::S.color());
    }

    #[test]
    fn test_offsets_row_major() {
        let piece = Piece::new(PieceKind::T);
        let offsets: Vec<_> = piece.offsets().collect();
        assert_eq!(offsets, vec![(1, 1), (0, 2), (1, 2), (2, 2)]);

        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells[0], (SPAWN_X + 1, SPAWN_Y + 1));
    }

    #[test]
    fn test_rotate_cw_t() {
        let rotated = rotate_cw(&PieceKind::T.shape());
        assert_eq!(render(&rotated), [".#..", ".##.", ".#..", "...."]);
    }

    #[test]
    fn test_rotate_cw_i_turns_vertical() {
        let rotated = rotate_cw(&PieceKind::I.shape());
        assert_eq!(render(&rotated), ["..#.", "..#.", "..#.", "..#."]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let mut shape = kind.shape();
            for _ in 0..4 {
                shape = rotate_cw(&shape);
            }
            assert_eq!(shape, kind.shape(), "{:?}", kind);
        }
    }

    #[test]
    fn test_o_rotation_keeps_its_cells() {
        let shape = PieceKind::O.shape();
        assert_eq!(rotate_cw(&shape), shape);
    }

    #[test]
    fn test_try_rotate_prefers_unshifted() {
        let piece = Piece::new(PieceKind::J);
        let (rotated, offset) = try_rotate(&piece, |_, _, _| false).unwrap();
        assert_eq!(offset, (0, 0));
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
        assert_eq!(rotated.shape, rotate_cw(&piece.shape));
    }

    #[test]
    fn test_try_rotate_walks_kicks_in_order() {
        let piece = Piece::new(PieceKind::L);
        let tried = std::cell::RefCell::new(Vec::new());

        let result = try_rotate(&piece, |_, dx, dy| {
            tried.borrow_mut().push((dx, dy));
            (dx, dy) != (-1, -1)
        });

        let (rotated, offset) = result.unwrap();
        assert_eq!(offset, (-1, -1));
        assert_eq!((rotated.x, rotated.y), (piece.x - 1, piece.y - 1));
        assert_eq!(
            tried.into_inner(),
            vec![(0, 0), (-1, 0), (1, 0), (0, -1), (-1, -1)]
        );
    }

    #[test]
    fn test_try_rotate_fails_when_everything_collides() {
        let piece = Piece::new(PieceKind::Z);
        assert!(try_rotate(&piece, |_, _, _| true).is_none());
    }
}
