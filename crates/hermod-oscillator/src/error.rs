//! Error types for the oscillator crate.

use hermod_linalg::LinalgError;
use thiserror::Error;

/// Errors produced by Fourier-basis and Hamiltonian construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OscillatorError {
    /// The requested dimension is not positive.
    #[error("dimension must be positive, got {got}")]
    Dimension {
        /// The offending dimension.
        got: usize,
    },

    /// A matrix primitive failed underneath.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type for oscillator operations.
pub type OscillatorResult<T> = Result<T, OscillatorError>;
