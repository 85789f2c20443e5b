//! Field module - the grid of settled blocks
//!
//! The field is a 12x22 grid where each cell is empty or holds the color of
//! the piece that filled it. Uses a flat array for cache locality and to keep
//! merges and line clears allocation-free.
//! Coordinates: (row, col) where row ranges 0..21 (top to bottom) and col
//! ranges 0..11 (left to right).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, COLUMNS, ROWS};

/// Total number of cells on the field
const FIELD_SIZE: usize = COLUMNS * ROWS;

/// Row indices reported by [`Field::full_rows`]
pub type FullRows = ArrayVec<usize, ROWS>;

/// The playing field - 12 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Flat array of cells, row-major order (row * COLUMNS + col)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < ROWS && col < COLUMNS,
            "field cell ({row}, {col}) out of range"
        );
        row * COLUMNS + col
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    /// Content of cell (row, col)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the field.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// Overwrite cell (row, col)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the field.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::index(row, col)] = cell;
    }

    /// Is the signed coordinate inside the field and filled?
    ///
    /// Out-of-range coordinates report `false`; bounds are the collision
    /// checker's concern.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        if row < 0 || col < 0 || row as usize >= ROWS || col as usize >= COLUMNS {
            return false;
        }
        self.cells[row as usize * COLUMNS + col as usize].is_some()
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = Self::index(row, 0);
        &self.cells[start..start + COLUMNS]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, bottom to top
    pub fn full_rows(&self) -> FullRows {
        (0..ROWS).rev().filter(|&row| self.is_row_full(row)).collect()
    }

    /// Commit every occupied cell of `piece` to the field in the piece's color
    ///
    /// The piece must be collision-free against this field; nothing is
    /// validated here.
    ///
    /// # Panics
    ///
    /// Panics if an occupied cell of the piece lies outside the field.
    pub fn merge(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            assert!(row >= 0 && col >= 0, "merge at ({row}, {col}) out of range");
            self.set(row as usize, col as usize, Some(piece.color));
        }
    }

    /// Remove every full row and return how many were removed
    ///
    /// Rows are scanned bottom to top. Remaining rows keep their relative
    /// order and slide down; empty rows fill the top so the height stays
    /// `ROWS`. Uses a two-pointer pass with `copy_within`, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * COLUMNS;
                    self.cells
                        .copy_within(src..src + COLUMNS, write_row * COLUMNS);
                }
            }
        }

        self.cells[..write_row * COLUMNS].fill(None);
        cleared
    }

    /// Empty every cell; dimensions are unchanged
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the field into a 2D grid (for renderers)
    pub fn write_grid(&self, out: &mut [[Cell; COLUMNS]; ROWS]) {
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row(row));
        }
    }

    /// Count of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ShapeKind};

    fn fill_row(field: &mut Field, row: usize, color: Color) {
        for col in 0..COLUMNS {
            field.set(row, col, Some(color));
        }
    }

    #[test]
    fn test_index_calculation() {
        assert_eq!(Field::index(0, 0), 0);
        assert_eq!(Field::index(0, 11), 11);
        assert_eq!(Field::index(1, 0), 12);
        assert_eq!(Field::index(21, 11), FIELD_SIZE - 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cell_at_row_out_of_range_panics() {
        Field::new().cell_at(ROWS, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cell_at_col_out_of_range_panics() {
        Field::new().cell_at(0, COLUMNS);
    }

    #[test]
    fn test_is_occupied_is_false_outside() {
        let mut field = Field::new();
        fill_row(&mut field, 0, Color::Red);
        assert!(field.is_occupied(0, 3));
        assert!(!field.is_occupied(-1, 3));
        assert!(!field.is_occupied(0, -1));
        assert!(!field.is_occupied(0, COLUMNS as i8));
        assert!(!field.is_occupied(ROWS as i8, 0));
    }

    #[test]
    fn test_full_rows_bottom_to_top() {
        let mut field = Field::new();
        fill_row(&mut field, 3, Color::Red);
        fill_row(&mut field, 20, Color::Green);
        assert_eq!(field.full_rows().as_slice(), &[20, 3]);
    }

    #[test]
    fn test_clear_non_adjacent_rows_keeps_order() {
        let mut field = Field::new();
        field.set(17, 0, Some(Color::Purple));
        fill_row(&mut field, 18, Color::Red);
        field.set(19, 1, Some(Color::Yellow));
        fill_row(&mut field, 20, Color::Red);
        field.set(21, 2, Some(Color::Orange));

        assert_eq!(field.clear_full_rows(), 2);

        assert_eq!(field.cell_at(21, 2), Some(Color::Orange));
        assert_eq!(field.cell_at(20, 1), Some(Color::Yellow));
        assert_eq!(field.cell_at(19, 0), Some(Color::Purple));
        assert_eq!(field.filled_count(), 3);
    }

    #[test]
    fn test_merge_writes_piece_color() {
        let mut field = Field::new();
        let mut piece = Piece::spawn(ShapeKind::T);
        piece.translate(0, 5);
        field.merge(&piece);

        assert_eq!(field.cell_at(5, 6), Some(Color::Purple));
        assert_eq!(field.cell_at(6, 5), Some(Color::Purple));
        assert_eq!(field.cell_at(6, 6), Some(Color::Purple));
        assert_eq!(field.cell_at(6, 7), Some(Color::Purple));
        assert_eq!(field.cell_at(5, 5), None);
        assert_eq!(field.filled_count(), 4);
    }

    #[test]
    fn test_write_grid_matches_cells() {
        let mut field = Field::new();
        field.set(4, 7, Some(Color::Green));
        let mut grid = [[None; COLUMNS]; ROWS];
        field.write_grid(&mut grid);
        assert_eq!(grid[4][7], Some(Color::Green));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
