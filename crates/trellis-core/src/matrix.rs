//! Dense integer matrix
//!
//! Backs adjacency-matrix export and the structural predicates over it
//! (triangular, diagonal, symmetrical). Rows and columns are fixed at
//! construction; cells default to zero.

use std::fmt;

use serde::Serialize;

/// A dense `rows x cols` matrix of unsigned integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<Vec<u32>>,
}

impl Matrix {
    /// Create a zeroed matrix with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            values: vec![vec![0; cols]; rows],
        }
    }

    /// Create a zeroed square matrix of order `n`.
    pub fn square(n: usize) -> Self {
        Matrix::new(n, n)
    }

    /// Create the identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Matrix::square(n);
        for i in 0..n {
            matrix.values[i][i] = 1;
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.values[row][col]
    }

    /// Write the cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.values[row][col] = value;
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Square with every cell below the main diagonal zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square() && (0..self.rows).all(|r| (0..r).all(|c| self.values[r][c] == 0))
    }

    /// Square with every cell above the main diagonal zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|r| (r + 1..self.cols).all(|c| self.values[r][c] == 0))
    }

    /// Square with every cell off the main diagonal zero.
    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    /// Square and equal to its own transpose.
    pub fn is_symmetrical(&self) -> bool {
        self.is_square() && *self == self.transpose()
    }

    /// The transposed matrix (`cols x rows`).
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::new(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.values[c][r] = self.values[r][c];
            }
        }
        out
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.values.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(u32::to_string).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let matrix = Matrix::new(2, 3);
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.get(1, 2), 0);
    }

    #[test]
    fn test_identity_is_diagonal_and_symmetrical() {
        let identity = Matrix::identity(3);
        assert_eq!(identity.get(0, 0), 1);
        assert_eq!(identity.get(0, 1), 0);
        assert!(identity.is_diagonal());
        assert!(identity.is_symmetrical());
        assert!(identity.is_upper_triangular());
        assert!(identity.is_lower_triangular());
    }

    #[test]
    fn test_triangular_predicates() {
        let mut matrix = Matrix::square(3);
        matrix.set(0, 2, 7);
        assert!(matrix.is_upper_triangular());
        assert!(!matrix.is_lower_triangular());

        matrix.set(2, 0, 7);
        assert!(!matrix.is_upper_triangular());
        assert!(!matrix.is_lower_triangular());
    }

    #[test]
    fn test_non_square_is_never_triangular() {
        let matrix = Matrix::new(2, 3);
        assert!(!matrix.is_square());
        assert!(!matrix.is_upper_triangular());
        assert!(!matrix.is_lower_triangular());
        assert!(!matrix.is_symmetrical());
    }

    #[test]
    fn test_transpose() {
        let mut matrix = Matrix::new(2, 3);
        matrix.set(0, 1, 5);
        matrix.set(1, 2, 9);

        let transposed = matrix.transpose();
        assert_eq!(transposed.rows(), 3);
        assert_eq!(transposed.cols(), 2);
        assert_eq!(transposed.get(1, 0), 5);
        assert_eq!(transposed.get(2, 1), 9);
    }

    #[test]
    fn test_symmetrical_matrix() {
        let mut matrix = Matrix::square(2);
        matrix.set(0, 1, 4);
        assert!(!matrix.is_symmetrical());

        matrix.set(1, 0, 4);
        assert!(matrix.is_symmetrical());
    }

    #[test]
    fn test_display_grid() {
        let mut matrix = Matrix::square(2);
        matrix.set(0, 1, 1);
        assert_eq!(matrix.to_string(), "0 1\n0 0");
    }
}
