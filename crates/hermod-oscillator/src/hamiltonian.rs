//! Harmonic-oscillator Hamiltonian construction.
//!
//! The model Hamiltonian is `H = 0.5·(P² + Q²)` on an `n`-point grid:
//!
//! - `P = F · diag(0, 1, …, n−1) · F†` — the momentum operator, diagonal in
//!   frequency space and transformed back through the Fourier basis.
//! - `Q = diag(a·(−(n−1)/2 + i))` — a symmetric grid of position
//!   eigenvalues centered at zero with spacing `a`.
//!
//! `P` is Hermitian because the unitary transform is applied to a real
//! diagonal, so `P²` is Hermitian and `H` is Hermitian up to the final
//! rounding pass.

use num_complex::Complex64;
use tracing::debug;

use hermod_linalg::ComplexMatrix;

use crate::error::{OscillatorError, OscillatorResult};
use crate::fourier::FourierBasis;

/// Decimal digits kept by [`HamiltonianBuilder::build`], so repeated runs
/// compare bit-identically downstream.
const ROUNDING_PLACES: u32 = 5;

/// Builds the discretized harmonic-oscillator Hamiltonian for a dimension
/// and potential scale.
///
/// # Example
///
/// ```rust
/// use hermod_oscillator::HamiltonianBuilder;
///
/// let h = HamiltonianBuilder::new(2, 1.0)?.build()?;
/// assert!((h.get(0, 0).re - 0.375).abs() < 1e-12);
/// assert!((h.get(0, 1).re - (-0.25)).abs() < 1e-12);
/// # Ok::<(), hermod_oscillator::OscillatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HamiltonianBuilder {
    dim: usize,
    potential: f64,
}

impl HamiltonianBuilder {
    /// Create a builder for an `n`-point grid with potential scale `a`.
    ///
    /// Any finite `a` is accepted; `a = 0` degenerates the position term to
    /// zero. Fails with [`OscillatorError::Dimension`] for `n = 0`.
    pub fn new(dim: usize, potential: f64) -> OscillatorResult<Self> {
        if dim == 0 {
            return Err(OscillatorError::Dimension { got: 0 });
        }
        Ok(Self { dim, potential })
    }

    /// Grid dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Potential scale `a`.
    pub fn potential(&self) -> f64 {
        self.potential
    }

    /// Build the Hamiltonian.
    ///
    /// Every real and imaginary component of the result is rounded to five
    /// decimal digits — a deliberate precision limit so independently
    /// produced matrices compare reproducibly.
    pub fn build(&self) -> OscillatorResult<ComplexMatrix> {
        let n = self.dim;
        debug!(n, a = self.potential, "building oscillator Hamiltonian");

        let basis = FourierBasis::new(n)?;
        let p2 = momentum_squared(basis.forward(), basis.inverse())?;

        // Position eigenvalues on a symmetric grid: a·(−(n−1)/2 + i).
        let centre = (n as f64 - 1.0) / 2.0;
        let mut h = ComplexMatrix::zeros(n)?;
        for i in 0..n {
            let q = self.potential * (i as f64 - centre);
            for j in 0..n {
                let mut value = 0.5 * p2.get(i, j);
                if i == j {
                    value += Complex64::new(0.5 * q * q, 0.0);
                }
                h.set(i, j, value);
            }
        }
        h.round_entries(ROUNDING_PLACES);
        Ok(h)
    }

    /// Build the Hamiltonian with the earlier formulation still referenced
    /// by long-lived host patches.
    ///
    /// Differs from [`build`](Self::build) in three pinned ways: the
    /// conjugation order of the momentum transform is swapped
    /// (`P = F† · diag · F`), the position grid scales only its centering
    /// offset (`Q[i] = −(n−1)·a/2 + i`, unit spacing regardless of `a`),
    /// and no rounding pass is applied. For `a = 1` the two variants agree
    /// up to rounding.
    pub fn build_legacy(&self) -> OscillatorResult<ComplexMatrix> {
        let n = self.dim;
        debug!(n, a = self.potential, "building oscillator Hamiltonian (legacy)");

        let basis = FourierBasis::new(n)?;
        // Swapped order relative to build(): P = F† · diag · F.
        let p2 = momentum_squared(basis.inverse(), basis.forward())?;

        let offset = (n as f64 - 1.0) * self.potential / 2.0;
        let mut h = ComplexMatrix::zeros(n)?;
        for i in 0..n {
            let q = i as f64 - offset;
            for j in 0..n {
                let mut value = 0.5 * p2.get(i, j);
                if i == j {
                    value += Complex64::new(0.5 * q * q, 0.0);
                }
                h.set(i, j, value);
            }
        }
        Ok(h)
    }
}

/// `(L · diag(0..n) · R)²` — the squared momentum operator for a
/// left/right transform pair.
fn momentum_squared(left: &ComplexMatrix, right: &ComplexMatrix) -> OscillatorResult<ComplexMatrix> {
    let n = left.dim();
    let impulse: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let scaled = right.scale_rows(&impulse)?;
    let p = left.matmul(&scaled)?;
    Ok(p.matmul(&p)?)
}
