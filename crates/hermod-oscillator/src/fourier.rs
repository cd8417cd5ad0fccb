//! The unitary discrete-Fourier basis.
//!
//! `F[k][l] = (1/√n) · exp(i·2π·k·l/n)` — the symmetric normalisation, so
//! `F` is unitary and its inverse is simply the conjugate transpose. The
//! momentum operator of the oscillator model is diagonal in this basis.

use std::f64::consts::PI;

use num_complex::Complex64;

use hermod_linalg::ComplexMatrix;

use crate::error::{OscillatorError, OscillatorResult};

/// The discrete-Fourier matrix of a given dimension, with its inverse.
///
/// Purely formulaic and deterministic to floating-point precision; no
/// iteration is involved. Both matrices are built once at construction.
#[derive(Debug, Clone)]
pub struct FourierBasis {
    dim: usize,
    forward: ComplexMatrix,
    inverse: ComplexMatrix,
}

impl FourierBasis {
    /// Build the `n × n` Fourier matrix and its conjugate transpose.
    ///
    /// Fails with [`OscillatorError::Dimension`] for `n = 0` and propagates
    /// allocation failures.
    pub fn new(dim: usize) -> OscillatorResult<Self> {
        if dim == 0 {
            return Err(OscillatorError::Dimension { got: 0 });
        }
        let norm = 1.0 / (dim as f64).sqrt();
        let mut forward = ComplexMatrix::zeros(dim)?;
        for k in 0..dim {
            for l in 0..dim {
                let angle = 2.0 * PI * (k as f64) * (l as f64) / dim as f64;
                forward.set(k, l, Complex64::from_polar(norm, angle));
            }
        }
        // F is unitary, so F⁻¹ = F†.
        let inverse = forward.conjugate_transpose()?;
        Ok(Self {
            dim,
            forward,
            inverse,
        })
    }

    /// Basis dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The forward transform `F`.
    pub fn forward(&self) -> &ComplexMatrix {
        &self.forward
    }

    /// The inverse transform `F† = F⁻¹`.
    pub fn inverse(&self) -> &ComplexMatrix {
        &self.inverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimension() {
        assert!(matches!(
            FourierBasis::new(0),
            Err(OscillatorError::Dimension { got: 0 })
        ));
    }

    #[test]
    fn two_by_two_is_scaled_hadamard() {
        let basis = FourierBasis::new(2).unwrap();
        let s = 1.0 / 2.0_f64.sqrt();
        let f = basis.forward();
        assert!((f.get(0, 0) - Complex64::new(s, 0.0)).norm() < 1e-12);
        assert!((f.get(0, 1) - Complex64::new(s, 0.0)).norm() < 1e-12);
        assert!((f.get(1, 0) - Complex64::new(s, 0.0)).norm() < 1e-12);
        assert!((f.get(1, 1) - Complex64::new(-s, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn forward_times_inverse_is_identity() {
        for n in 1..=8 {
            let basis = FourierBasis::new(n).unwrap();
            let product = basis.forward().matmul(basis.inverse()).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let want = if i == j { 1.0 } else { 0.0 };
                    let diff = (product.get(i, j) - Complex64::new(want, 0.0)).norm();
                    assert!(diff < 1e-9, "n={n}, entry ({i},{j}) off by {diff}");
                }
            }
        }
    }
}
