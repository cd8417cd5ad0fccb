//! The result of a Hermitian eigen-decomposition.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use hermod_linalg::ComplexMatrix;

use crate::error::EigenResult;

/// Eigenvalues and eigenvectors of a Hermitian matrix.
///
/// Invariants upheld by every solver in this crate:
///
/// - `eigenvalues` is ascending (ties in arbitrary relative order);
/// - eigenvector `k` is column `k` of `eigenvectors` and has unit
///   Euclidean norm;
/// - the columns are mutually orthonormal up to floating-point roundoff.
///
/// The value is transient: produced fresh per decomposition, never
/// retained by a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigenDecomposition {
    pub(crate) eigenvalues: Vec<f64>,
    pub(crate) eigenvectors: ComplexMatrix,
}

impl EigenDecomposition {
    /// Problem dimension `n`.
    pub fn dim(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Eigenvalues in ascending order.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Eigenvectors as matrix columns, index-aligned with the eigenvalues.
    pub fn eigenvectors(&self) -> &ComplexMatrix {
        &self.eigenvectors
    }

    /// Eigenvector `k` as an owned vector.
    ///
    /// # Panics
    /// When `k >= dim()`.
    pub fn eigenvector(&self, k: usize) -> Vec<Complex64> {
        self.eigenvectors.column(k)
    }

    /// Rebuild `V · diag(λ) · V†` — equal to the decomposed matrix within
    /// numerical tolerance. Mostly useful for verification.
    pub fn reconstruct(&self) -> EigenResult<ComplexMatrix> {
        let vh = self.eigenvectors.conjugate_transpose()?;
        let scaled = vh.scale_rows(&self.eigenvalues)?;
        Ok(self.eigenvectors.matmul(&scaled)?)
    }
}
