//! Error types for the linalg crate.

use thiserror::Error;

/// Errors produced by matrix primitives and layout conversion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// The backing buffer for a matrix could not be reserved.
    #[error("allocation of {elements} matrix elements failed")]
    Allocation {
        /// Number of elements the failed reservation asked for.
        elements: usize,
    },

    /// A flat input buffer has the wrong length for the declared dimension.
    #[error("expected a flat buffer of {expected} values, got {got}")]
    SizeMismatch {
        /// Required buffer length.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Operand shapes are inconsistent, or a dimension is not positive.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    Dimension {
        /// Dimension required by the operation.
        expected: usize,
        /// Dimension actually supplied.
        got: usize,
    },
}

/// Result type for linalg operations.
pub type LinalgResult<T> = Result<T, LinalgError>;
