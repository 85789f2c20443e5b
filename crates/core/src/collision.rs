//! Collision checking between a piece and the field.

use crate::field::Field;
use crate::piece::Piece;
use crate::types::{COLUMNS, ROWS};

/// Does `piece` overlap the field's walls, floor or settled blocks?
///
/// Only the left, right and bottom boundaries are tested. Cells above row 0
/// never collide: pieces spawn on row 0 and never move up.
pub fn collides(piece: &Piece, field: &Field) -> bool {
    piece.cells().any(|(row, col)| {
        row >= ROWS as i8 || col < 0 || col >= COLUMNS as i8 || field.is_occupied(row, col)
    })
}
