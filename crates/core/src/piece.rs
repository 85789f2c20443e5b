//! Piece module - the falling, player-controlled unit
//!
//! A piece carries its current rotation matrix, its color and a top-left
//! anchor in field coordinates. Movement never checks legality: callers test
//! the result with [`crate::collision::collides`] and revert.

use crate::shapes::{shape_of, Matrix};
use crate::types::{Color, ShapeKind, COLUMNS};

/// Active or next falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: Color,
    /// Column of the matrix's left edge (may go negative during a rejected move)
    pub x: i8,
    /// Row of the matrix's top edge
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` centered horizontally on the top row
    pub fn spawn(kind: ShapeKind) -> Self {
        let (matrix, color) = shape_of(kind);
        let x = (COLUMNS / 2) as i8 - (matrix.cols() / 2) as i8;
        Self {
            kind,
            matrix,
            color,
            x,
            y: 0,
        }
    }

    /// Shift the anchor by (dx, dy)
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate the matrix 90° clockwise in place; the anchor stays put
    pub fn rotate(&mut self) {
        self.matrix = self.matrix.rotate_cw();
    }

    /// Undo one [`Piece::rotate`]
    pub fn rotate_back(&mut self) {
        self.matrix = self.matrix.rotate_ccw();
    }

    /// Field coordinates (row, col) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(i, j)| (self.y + i as i8, self.x + j as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_piece() {
        // x = 12/2 - width/2
        assert_eq!(Piece::spawn(ShapeKind::I).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::O).x, 5);
        assert_eq!(Piece::spawn(ShapeKind::T).x, 5);
        for kind in ShapeKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn test_spawn_uses_catalog_color() {
        assert_eq!(Piece::spawn(ShapeKind::Z).color, Color::Red);
        assert_eq!(Piece::spawn(ShapeKind::L).color, Color::Orange);
    }

    #[test]
    fn test_translate() {
        let mut piece = Piece::spawn(ShapeKind::S);
        piece.translate(-2, 3);
        assert_eq!((piece.x, piece.y), (3, 3));
        piece.translate(2, -3);
        assert_eq!(piece, Piece::spawn(ShapeKind::S));
    }

    #[test]
    fn test_rotate_keeps_anchor() {
        let mut piece = Piece::spawn(ShapeKind::I);
        piece.rotate();
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!((piece.matrix.rows(), piece.matrix.cols()), (4, 1));
    }

    #[test]
    fn test_rotate_back_restores_piece() {
        for kind in ShapeKind::ALL {
            let before = Piece::spawn(kind);
            let mut piece = before;
            piece.rotate();
            piece.rotate_back();
            assert_eq!(piece, before);
        }
    }

    #[test]
    fn test_four_rotations_cycle() {
        for kind in ShapeKind::ALL {
            let before = Piece::spawn(kind);
            let mut piece = before;
            for _ in 0..4 {
                piece.rotate();
            }
            assert_eq!(piece, before, "{:?}", kind);
        }
    }

    #[test]
    fn test_cells_are_in_field_coordinates() {
        let mut piece = Piece::spawn(ShapeKind::O);
        piece.translate(0, 3);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 5), (3, 6), (4, 5), (4, 6)]);
    }
}
