/// All errors returned by `linmat-core`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A row or column count of zero was requested at construction, or the
    /// element count does not fit in memory.
    #[error("invalid dimension {rows}x{columns}: rows and columns must be positive and their product addressable")]
    InvalidDimension { rows: usize, columns: usize },

    /// A nested literal is malformed or a reshape target has the wrong size.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An element index lies outside the matrix.
    #[error("index ({row}, {column}) out of range for {rows}x{columns} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Operand shapes do not match the required layout. `expected` is the
    /// shape the right-hand operand would need, `got` is its actual shape.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A square-only operation was applied to a rectangular matrix.
    #[error("matrix is not square: {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    /// Minor or cofactor requested on a matrix smaller than 1x1.
    #[error("matrix is too small: {rows}x{columns}")]
    TooSmall { rows: usize, columns: usize },

    /// Backward elimination was given a matrix that is not in step form.
    #[error("matrix is not in step form (violation at row {row})")]
    NotStepForm { row: usize },

    /// Matrix is singular and cannot be inverted.
    #[error("singular matrix")]
    SingularMatrix,

    /// An element could not be represented in the target element type.
    #[error("element at ({row}, {column}) is not representable in the target type")]
    InvalidConversion { row: usize, column: usize },
}

/// Convenience alias used throughout `linmat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
