//! The eigensolver seam and its tridiagonal-QL implementation.

use num_complex::Complex64;
use tracing::debug;

use hermod_linalg::ComplexMatrix;

use crate::decomposition::EigenDecomposition;
use crate::error::{EigenError, EigenResult};
use crate::{ql, tridiagonal};

/// Full eigen-decomposition of a Hermitian complex matrix.
///
/// Implementations read the **upper triangle only** (the lower triangle is
/// never cross-validated) and must return eigenvalues in ascending order
/// with unit-norm eigenvector columns index-aligned to them. Any
/// numerically stable scheme satisfying that contract can stand in for the
/// default [`TridiagonalQl`].
pub trait HermitianEigensolver {
    /// Decompose `matrix`. Pure: no state is retained between calls.
    fn decompose(&self, matrix: &ComplexMatrix) -> EigenResult<EigenDecomposition>;
}

/// Householder tridiagonalization followed by implicit-shift QL.
///
/// The workhorse solver: O(n³) reduction to real symmetric tridiagonal
/// form with an accumulated unitary similarity, then QL with a Wilkinson
/// shift on the tridiagonal pair while the accumulated columns rotate
/// toward the eigenvectors.
///
/// # Example
///
/// ```rust
/// use hermod_eigen::{HermitianEigensolver, TridiagonalQl};
/// use hermod_linalg::ComplexMatrix;
/// use num_complex::Complex64;
///
/// // [[2, i], [−i, 2]] has eigenvalues 1 and 3.
/// let a = ComplexMatrix::from_rows(
///     vec![
///         Complex64::new(2.0, 0.0),
///         Complex64::new(0.0, 1.0),
///         Complex64::new(0.0, -1.0),
///         Complex64::new(2.0, 0.0),
///     ],
///     2,
/// )?;
/// let eig = TridiagonalQl::default().decompose(&a)?;
/// assert!((eig.eigenvalues()[0] - 1.0).abs() < 1e-10);
/// assert!((eig.eigenvalues()[1] - 3.0).abs() < 1e-10);
/// # Ok::<(), hermod_eigen::EigenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TridiagonalQl {
    max_sweeps: usize,
}

/// The classic per-eigenvalue sweep budget; QL converges cubically, so a
/// well-conditioned matrix needs a small fraction of this.
const DEFAULT_MAX_SWEEPS: usize = 30;

impl Default for TridiagonalQl {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl TridiagonalQl {
    /// Solver with the default sweep budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-eigenvalue sweep budget.
    #[must_use]
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }
}

impl HermitianEigensolver for TridiagonalQl {
    fn decompose(&self, matrix: &ComplexMatrix) -> EigenResult<EigenDecomposition> {
        let n = matrix.dim();
        if n == 0 {
            return Err(EigenError::Dimension { got: 0 });
        }
        debug!(n, "decomposing Hermitian matrix");

        // Mirror the trusted upper triangle into a full working matrix;
        // diagonal imaginary parts are dropped.
        let mut work = ComplexMatrix::zeros(n)?;
        for i in 0..n {
            work.set(i, i, Complex64::new(matrix.get(i, i).re, 0.0));
            for j in i + 1..n {
                let z = matrix.get(i, j);
                work.set(i, j, z);
                work.set(j, i, z.conj());
            }
        }

        let mut tri = tridiagonal::reduce(work)?;
        ql::diagonalize(&mut tri.diag, &mut tri.off, &mut tri.transform, self.max_sweeps)?;

        // Ascending eigenvalue order, eigenvector columns permuted in step.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| tri.diag[a].total_cmp(&tri.diag[b]));

        let mut eigenvalues = Vec::with_capacity(n);
        let mut eigenvectors = ComplexMatrix::zeros(n)?;
        for (dst, &src) in order.iter().enumerate() {
            eigenvalues.push(tri.diag[src]);
            let column = tri.transform.column(src);
            // Columns of a unitary accumulation are unit up to roundoff;
            // renormalise so the contract holds exactly per column.
            let norm = column.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
            let inv = if norm > 0.0 { 1.0 / norm } else { 1.0 };
            for (row, z) in column.iter().enumerate() {
                eigenvectors.set(row, dst, *z * inv);
            }
        }
        debug!(n, "decomposition complete");

        Ok(EigenDecomposition {
            eigenvalues,
            eigenvectors,
        })
    }
}
