//! Error types for the eigen crate.

use hermod_linalg::LinalgError;
use thiserror::Error;

/// Errors produced by Hermitian eigen-decomposition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EigenError {
    /// The matrix dimension is not positive.
    #[error("matrix dimension must be positive, got {got}")]
    Dimension {
        /// The offending dimension.
        got: usize,
    },

    /// The QL iteration exhausted its sweep budget on one eigenvalue.
    ///
    /// Propagated as-is; there is no automatic retry and no partial result.
    #[error("QL iteration for eigenvalue {index} did not converge within {sweeps} sweeps")]
    Convergence {
        /// Index of the eigenvalue being isolated when the budget ran out.
        index: usize,
        /// The exhausted sweep budget.
        sweeps: usize,
    },

    /// A computation was requested before its required input was loaded.
    #[error("no matrix loaded; load one before computing")]
    NotReady,

    /// A matrix primitive failed underneath (allocation, flat-buffer size).
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type for eigen operations.
pub type EigenResult<T> = Result<T, EigenError>;
