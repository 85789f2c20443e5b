//! Shapes module - piece matrices and the shape catalog
//!
//! Every kind is a small binary matrix in the piece's local frame plus a
//! display color. Orientations are not tabulated: they are produced by
//! rotating the base matrix geometrically, see [`Matrix::rotate_cw`].

use crate::types::{Color, ShapeKind};

/// Largest extent of any catalog matrix (the I piece is 1x4)
pub const MAX_EXTENT: usize = 4;

/// Binary occupancy matrix of a piece, at most 4x4.
///
/// Stored in a fixed 4x4 array so pieces stay `Copy` and rotation never
/// allocates. Cells outside `rows x cols` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_EXTENT]; MAX_EXTENT],
}

impl Matrix {
    /// Build a matrix from the top-left `rows x cols` block of `bits`.
    const fn new(rows: u8, cols: u8, bits: [[u8; MAX_EXTENT]; MAX_EXTENT]) -> Self {
        let mut out = [[false; MAX_EXTENT]; MAX_EXTENT];
        let mut i = 0;
        while i < rows as usize {
            let mut j = 0;
            while j < cols as usize {
                out[i][j] = bits[i][j] != 0;
                j += 1;
            }
            i += 1;
        }
        Self {
            rows,
            cols,
            bits: out,
        }
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Is cell (row, col) occupied? Out-of-extent cells are empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Iterate the occupied cells as (row, col) pairs, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |i| (0..self.cols()).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.bits[i][j])
    }

    /// Rotate 90° clockwise: new(i, j) = old(rows - 1 - j, i)
    ///
    /// Equivalent to reversing the row order and transposing. The result has
    /// the dimensions swapped.
    pub fn rotate_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_EXTENT]; MAX_EXTENT];
        for (i, row) in bits.iter_mut().enumerate().take(cols) {
            for (j, bit) in row.iter_mut().enumerate().take(rows) {
                *bit = self.bits[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Rotate 90° counter-clockwise: new(i, j) = old(j, cols - 1 - i)
    ///
    /// Exact inverse of [`Matrix::rotate_cw`].
    pub fn rotate_ccw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_EXTENT]; MAX_EXTENT];
        for (i, row) in bits.iter_mut().enumerate().take(cols) {
            for (j, bit) in row.iter_mut().enumerate().take(rows) {
                *bit = self.bits[j][cols - 1 - i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

const I_MATRIX: Matrix = Matrix::new(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const T_MATRIX: Matrix = Matrix::new(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const O_MATRIX: Matrix = Matrix::new(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const S_MATRIX: Matrix = Matrix::new(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_MATRIX: Matrix = Matrix::new(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const L_MATRIX: Matrix = Matrix::new(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const J_MATRIX: Matrix = Matrix::new(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Look up the base matrix and display color of a kind
pub fn shape_of(kind: ShapeKind) -> (Matrix, Color) {
    match kind {
        ShapeKind::I => (I_MATRIX, Color::LightBlue),
        ShapeKind::T => (T_MATRIX, Color::Purple),
        ShapeKind::O => (O_MATRIX, Color::Yellow),
        ShapeKind::S => (S_MATRIX, Color::Green),
        ShapeKind::Z => (Z_MATRIX, Color::Red),
        ShapeKind::L => (L_MATRIX, Color::Orange),
        ShapeKind::J => (J_MATRIX, Color::DarkBlue),
    }
}

/// Base matrix of a kind
pub fn matrix_of(kind: ShapeKind) -> Matrix {
    shape_of(kind).0
}

/// Display color of a kind
pub fn color_of(kind: ShapeKind) -> Color {
    shape_of(kind).1
}
