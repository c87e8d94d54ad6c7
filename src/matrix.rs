//! Column-major matrix type for component time courses and spectra.
//!
//! [`Matrix`] carries dimensions alongside a flat column-major `Vec<f64>`,
//! so element `(row, col)` lives at index `row + col * nrows`. Rows are time
//! points (or frequency bins), columns are components or motion parameters;
//! with this layout every component's series is a contiguous slice.
//!
//! The decomposition and motion-estimation collaborators exchange these
//! matrices as whitespace-separated text tables (one row per line), which
//! [`Matrix::from_text`] and [`read_matrix`] parse.

use crate::error::{AromaError, Result};
use std::path::Path;

/// Dimension-tracked column-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Create from flat column-major data with dimension validation.
    pub fn from_column_major(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(AromaError::DimensionMismatch {
                len: data.len(),
                nrows,
                ncols,
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create from row slices (the natural order of the text interchange
    /// format). All rows must have equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let nrows = rows.len();
        if nrows == 0 {
            return Err(AromaError::EmptyInput("matrix rows"));
        }
        let ncols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(AromaError::MalformedTable {
                    line: i + 1,
                    reason: format!("expected {} values, got {}", ncols, row.len()),
                });
            }
        }
        let mut data = vec![0.0; nrows * ncols];
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                data[i + j * nrows] = v;
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Parse a whitespace-separated numeric table. Blank lines are skipped;
    /// ragged or non-numeric rows are errors.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row: Result<Vec<f64>> = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<f64>().map_err(|e| AromaError::MalformedTable {
                        line: lineno + 1,
                        reason: format!("{tok:?}: {e}"),
                    })
                })
                .collect();
            rows.push(row?);
        }
        Self::from_rows(&rows)
    }

    /// Create a zero-filled matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Dimensions as `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contiguous column slice (zero-copy).
    ///
    /// # Panics
    /// Panics if `col >= ncols`.
    #[inline]
    pub fn column(&self, col: usize) -> &[f64] {
        let start = col * self.nrows;
        &self.data[start..start + self.nrows]
    }

    /// Flat slice of the underlying column-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// New matrix keeping only the given rows, in the given order.
    ///
    /// # Panics
    /// Panics if any row index is out of bounds.
    pub fn select_rows(&self, rows: &[usize]) -> Matrix {
        let k = rows.len();
        let mut data = vec![0.0; k * self.ncols];
        for j in 0..self.ncols {
            let col = self.column(j);
            for (new_i, &old_i) in rows.iter().enumerate() {
                data[new_i + j * k] = col[old_i];
            }
        }
        Matrix {
            data,
            nrows: k,
            ncols: self.ncols,
        }
    }

    /// Element-wise transformed copy.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[row + col * self.nrows]
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matrix({}x{})", self.nrows, self.ncols)
    }
}

/// Read a whitespace-separated numeric table from a file
/// (e.g. `melodic_mix`, `melodic_FTmix`, or a realignment `.par` file).
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)?;
    Matrix::from_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_3x2() -> Matrix {
        // rows: [1, 4], [2, 5], [3, 6]
        Matrix::from_column_major(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap()
    }

    #[test]
    fn test_from_column_major_valid() {
        let mat = sample_3x2();
        assert_eq!(mat.shape(), (3, 2));
        assert_eq!(mat[(0, 0)], 1.0);
        assert_eq!(mat[(2, 1)], 6.0);
    }

    #[test]
    fn test_from_column_major_invalid() {
        assert!(matches!(
            Matrix::from_column_major(vec![1.0, 2.0], 3, 2),
            Err(AromaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_from_rows() {
        let mat = Matrix::from_rows(&[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap();
        assert_eq!(mat, sample_3x2());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, AromaError::MalformedTable { line: 2, .. }));
    }

    #[test]
    fn test_from_text() {
        let mat = Matrix::from_text("1 4\n2 5\n\n3 6\n").unwrap();
        assert_eq!(mat, sample_3x2());
    }

    #[test]
    fn test_from_text_bad_token() {
        let err = Matrix::from_text("1 2\n3 abc\n").unwrap_err();
        assert!(matches!(err, AromaError::MalformedTable { line: 2, .. }));
    }

    #[test]
    fn test_from_text_empty() {
        assert!(matches!(
            Matrix::from_text("\n\n"),
            Err(AromaError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_column_contiguous() {
        let mat = sample_3x2();
        assert_eq!(mat.column(0), &[1.0, 2.0, 3.0]);
        assert_eq!(mat.column(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_select_rows() {
        let mat = sample_3x2();
        let sub = mat.select_rows(&[2, 0]);
        assert_eq!(sub.shape(), (2, 2));
        assert_eq!(sub[(0, 0)], 3.0);
        assert_eq!(sub[(1, 0)], 1.0);
        assert_eq!(sub[(0, 1)], 6.0);
    }

    #[test]
    fn test_map_squares() {
        let sq = sample_3x2().map(|v| v * v);
        assert_eq!(sq[(2, 1)], 36.0);
    }

    #[test]
    fn test_read_matrix_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.txt");
        std::fs::write(&path, "0.5 -1.0\n1.5 2.0\n").unwrap();
        let mat = read_matrix(&path).unwrap();
        assert_eq!(mat.shape(), (2, 2));
        assert_eq!(mat[(0, 1)], -1.0);
    }

    #[test]
    fn test_column_major_layout_matches_manual() {
        let n = 5;
        let m = 4;
        let data: Vec<f64> = (0..n * m).map(|x| x as f64).collect();
        let mat = Matrix::from_column_major(data.clone(), n, m).unwrap();
        for j in 0..m {
            for i in 0..n {
                assert_eq!(mat[(i, j)], data[i + j * n]);
            }
        }
    }
}
