//! Stateful host boundary for the eigensolver path.
//!
//! A session owns one dimension and at most one stored matrix, loaded from
//! the flat row-major wire form. Computing never mutates the session; the
//! stored matrix persists until overwritten, invalidated by a resize, or
//! the session is dropped.

use serde::{Deserialize, Serialize};

use hermod_linalg::{ComplexMatrix, MatrixLayout, from_interleaved, to_interleaved};

use crate::error::{EigenError, EigenResult};
use crate::solver::{HermitianEigensolver, TridiagonalQl};

/// Wire-form result of a session computation.
///
/// `eigenvectors` is column-major interleaved: eigenvector `k` occupies
/// the `2·n` reals starting at `2·k·n`, each element a consecutive
/// `(re, im)` pair, index-aligned with `eigenvalues[k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenOutput {
    /// Eigenvalues in ascending order, length `n`.
    pub eigenvalues: Vec<f64>,
    /// Eigenvector columns, `2·n·n` interleaved reals.
    pub eigenvectors: Vec<f64>,
}

/// Per-instance eigensolver state: one dimension, at most one matrix.
#[derive(Debug, Clone)]
pub struct EigenSession<S: HermitianEigensolver = TridiagonalQl> {
    dim: usize,
    matrix: Option<ComplexMatrix>,
    solver: S,
}

impl Default for EigenSession<TridiagonalQl> {
    /// The host-facing default: a 3×3 instance with no matrix loaded.
    fn default() -> Self {
        Self {
            dim: 3,
            matrix: None,
            solver: TridiagonalQl::default(),
        }
    }
}

impl EigenSession<TridiagonalQl> {
    /// Session with the default solver.
    pub fn new(dim: usize) -> EigenResult<Self> {
        Self::with_solver(dim, TridiagonalQl::default())
    }
}

impl<S: HermitianEigensolver> EigenSession<S> {
    /// Session backed by a specific solver implementation.
    pub fn with_solver(dim: usize, solver: S) -> EigenResult<Self> {
        if dim == 0 {
            return Err(EigenError::Dimension { got: 0 });
        }
        Ok(Self {
            dim,
            matrix: None,
            solver,
        })
    }

    /// Current dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// True when a matrix is loaded and [`compute`](Self::compute) can run.
    pub fn is_ready(&self) -> bool {
        self.matrix.is_some()
    }

    /// Reset the dimension, invalidating any stored matrix — even when the
    /// new value equals the old one. Fails with [`EigenError::Dimension`]
    /// for `n = 0`, leaving the session untouched.
    pub fn set_dimension(&mut self, dim: usize) -> EigenResult<()> {
        if dim == 0 {
            return Err(EigenError::Dimension { got: 0 });
        }
        self.dim = dim;
        self.matrix = None;
        Ok(())
    }

    /// Store a matrix from its wire form: `2·n·n` reals, row-major, each
    /// element a consecutive `(re, im)` pair.
    ///
    /// Fails with a `SizeMismatch` (via [`EigenError::Linalg`]) when the
    /// length is wrong; a previously stored matrix is replaced only on
    /// success.
    ///
    /// The input is **not** checked for Hermitian symmetry: the solver
    /// reads the upper triangle only, so a non-Hermitian load decomposes
    /// the Hermitian matrix implied by that triangle. Call
    /// [`ComplexMatrix::is_hermitian`] on the parsed matrix first if the
    /// caller needs the stronger guarantee.
    pub fn load_matrix(&mut self, values: &[f64]) -> EigenResult<()> {
        let matrix = from_interleaved(values, self.dim)?;
        self.matrix = Some(matrix);
        Ok(())
    }

    /// Decompose the stored matrix.
    ///
    /// Fails with [`EigenError::NotReady`] when no matrix has been loaded
    /// since construction or the last resize. Pure with respect to the
    /// session: the stored matrix is left in place for further calls.
    pub fn compute(&self) -> EigenResult<EigenOutput> {
        let matrix = self.matrix.as_ref().ok_or(EigenError::NotReady)?;
        let decomposition = self.solver.decompose(matrix)?;
        Ok(EigenOutput {
            eigenvalues: decomposition.eigenvalues().to_vec(),
            eigenvectors: to_interleaved(decomposition.eigenvectors(), MatrixLayout::ColumnMajor),
        })
    }
}
