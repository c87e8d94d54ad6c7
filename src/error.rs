//! Error types for feature extraction and classification.

use thiserror::Error;

/// Main error type for the crate.
///
/// Malformed or mismatched inputs are reported through these variants and
/// are never silently repaired. Degenerate-data conditions with a defined
/// saturation policy (see [`crate::spatial`]) are not errors.
#[derive(Error, Debug)]
pub enum AromaError {
    /// Flat data length does not match the requested dimensions.
    #[error("data length {len} does not match {nrows}x{ncols} matrix")]
    DimensionMismatch {
        len: usize,
        nrows: usize,
        ncols: usize,
    },

    /// Two row-aligned inputs have different numbers of rows.
    #[error("row count mismatch: {left} rows vs {right} rows")]
    RowCountMismatch { left: usize, right: usize },

    /// Realignment parameters must have exactly six columns.
    #[error("expected 6 realignment parameter columns, got {actual}")]
    MotionParamColumns { actual: usize },

    /// Too few time points for a meaningful 90% subsample.
    #[error("too few time points: need at least {min}, got {actual}")]
    TooFewTimePoints { min: usize, actual: usize },

    /// A column has (near-)zero variance, so its correlation is undefined.
    #[error("zero-variance column {column} in {which} matrix: correlation undefined")]
    ZeroVariance { which: &'static str, column: usize },

    /// A component carries no spectral power above the retained band.
    #[error("component {component} has zero total spectral power")]
    ZeroPower { component: usize },

    /// Repetition time outside the supported range.
    #[error("repetition time {0} s out of range (must be strictly between 0.5 and 10)")]
    InvalidRepetitionTime(f64),

    /// Mask grid geometry differs from the component map grid.
    #[error("grid mismatch: maps are {expected:?}, mask is {actual:?}")]
    GridMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },

    /// An input that must be non-empty is empty.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A motion component index is outside the component set.
    #[error("component index {index} out of range for {ncomponents} components")]
    IndexOutOfRange { index: usize, ncomponents: usize },

    /// A numeric text table could not be parsed.
    #[error("malformed table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    /// Other input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Underlying I/O failure while reading or writing artifacts.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, AromaError>;

impl AromaError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
