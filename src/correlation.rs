//! Cross-correlation between two sets of time series.
//!
//! Only the block between the first matrix's columns and the second's is
//! computed; the auto-correlation blocks internal to each input are never
//! needed by the features and are skipped.

use crate::error::{AromaError, Result};
use crate::matrix::Matrix;

/// Sum-of-squares threshold below which a column is treated as constant.
const VARIANCE_EPS: f64 = 1e-12;

/// Centered columns together with their Euclidean norms.
fn centered_columns(m: &Matrix, which: &'static str) -> Result<(Vec<Vec<f64>>, Vec<f64>)> {
    let t = m.nrows() as f64;
    let mut cols = Vec::with_capacity(m.ncols());
    let mut norms = Vec::with_capacity(m.ncols());
    for j in 0..m.ncols() {
        let col = m.column(j);
        let mean = col.iter().sum::<f64>() / t;
        let centered: Vec<f64> = col.iter().map(|&v| v - mean).collect();
        let ss: f64 = centered.iter().map(|&v| v * v).sum();
        if ss <= VARIANCE_EPS {
            // Inputs are assumed to have non-zero variance; a flat column
            // makes Pearson correlation undefined and is a fatal input error.
            return Err(AromaError::ZeroVariance { which, column: j });
        }
        cols.push(centered);
        norms.push(ss.sqrt());
    }
    Ok((cols, norms))
}

/// Pearson cross-correlation matrix between the columns of `a` (T x P) and
/// the columns of `b` (T x Q), as a P x Q matrix.
///
/// Rows are observations aligned in time, so both inputs must have the same
/// row count (and at least two rows).
pub fn cross_correlation(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.nrows() != b.nrows() {
        return Err(AromaError::RowCountMismatch {
            left: a.nrows(),
            right: b.nrows(),
        });
    }
    if a.nrows() < 2 {
        return Err(AromaError::TooFewTimePoints {
            min: 2,
            actual: a.nrows(),
        });
    }

    let (ca, na) = centered_columns(a, "left")?;
    let (cb, nb) = centered_columns(b, "right")?;

    let p = a.ncols();
    let q = b.ncols();
    let mut data = vec![0.0; p * q];
    for (jq, (col_b, norm_b)) in cb.iter().zip(&nb).enumerate() {
        for (jp, (col_a, norm_a)) in ca.iter().zip(&na).enumerate() {
            let dot: f64 = col_a.iter().zip(col_b).map(|(&x, &y)| x * y).sum();
            data[jp + jq * p] = dot / (norm_a * norm_b);
        }
    }
    Matrix::from_column_major(data, p, q)
}
