//! Dense square complex matrices.
//!
//! A [`ComplexMatrix`] owns exactly one contiguous row-major buffer: element
//! `(i, j)` lives at index `i * dim + j`, so the row stride equals the
//! dimension. Keeping the storage in a single allocation (instead of a
//! pointer-per-row scheme) means a constructor either returns a fully
//! usable matrix or fails as a whole — there is no partially allocated
//! state to clean up.
//!
//! All operations here are pure: they read their operands and return fresh
//! values. Shape errors are reported through [`LinalgError`], allocation
//! failures through [`LinalgError::Allocation`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, LinalgResult};
use crate::round::round_to_places;

/// A square `dim × dim` complex matrix in contiguous row-major storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexMatrix {
    /// Row-major elements; `data[i * dim + j]` is entry `(i, j)`.
    data: Vec<Complex64>,
    /// Matrix dimension (also the row stride).
    dim: usize,
}

/// Reserve a zeroed buffer of `elements` complex numbers.
///
/// Goes through `try_reserve_exact` so exhaustion surfaces as an error
/// instead of aborting the process.
fn try_buffer(elements: usize) -> LinalgResult<Vec<Complex64>> {
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| LinalgError::Allocation { elements })?;
    data.resize(elements, Complex64::new(0.0, 0.0));
    Ok(data)
}

impl ComplexMatrix {
    /// Create a zero-initialized `dim × dim` matrix.
    pub fn zeros(dim: usize) -> LinalgResult<Self> {
        let elements = dim.saturating_mul(dim);
        Ok(Self {
            data: try_buffer(elements)?,
            dim,
        })
    }

    /// Create the `dim × dim` identity matrix.
    pub fn identity(dim: usize) -> LinalgResult<Self> {
        let mut m = Self::zeros(dim)?;
        for i in 0..dim {
            m.data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Ok(m)
    }

    /// Build a matrix from row-major elements.
    ///
    /// Fails with [`LinalgError::SizeMismatch`] when `data.len() != dim²`.
    pub fn from_rows(data: Vec<Complex64>, dim: usize) -> LinalgResult<Self> {
        let expected = dim.saturating_mul(dim);
        if data.len() != expected {
            return Err(LinalgError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, dim })
    }

    /// Matrix dimension (rows == columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry `(row, col)`.
    ///
    /// # Panics
    /// On out-of-bounds indices; index arithmetic is the caller's bug, not
    /// a recoverable input error.
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col]
    }

    /// Overwrite entry `(row, col)`.
    ///
    /// # Panics
    /// On out-of-bounds indices.
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col] = value;
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Column `col` as an owned vector.
    ///
    /// # Panics
    /// When `col >= dim`.
    pub fn column(&self, col: usize) -> Vec<Complex64> {
        assert!(col < self.dim, "column index out of bounds");
        (0..self.dim).map(|i| self.data[i * self.dim + col]).collect()
    }

    /// Conjugate transpose: `B[i][j] = conj(A[j][i])`.
    pub fn conjugate_transpose(&self) -> LinalgResult<Self> {
        let n = self.dim;
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                out.data[i * n + j] = self.data[j * n + i].conj();
            }
        }
        Ok(out)
    }

    /// Left-multiply by a real diagonal: `R[i][j] = diag[i] · A[i][j]`.
    ///
    /// This is row scaling — the dense realisation of `diag(d) · A`.
    pub fn scale_rows(&self, diag: &[f64]) -> LinalgResult<Self> {
        if diag.len() != self.dim {
            return Err(LinalgError::Dimension {
                expected: self.dim,
                got: diag.len(),
            });
        }
        let n = self.dim;
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                out.data[i * n + j] = diag[i] * self.data[i * n + j];
            }
        }
        Ok(out)
    }

    /// Dense product `self · rhs` via the standard triple loop, O(n³).
    pub fn matmul(&self, rhs: &Self) -> LinalgResult<Self> {
        if rhs.dim != self.dim {
            return Err(LinalgError::Dimension {
                expected: self.dim,
                got: rhs.dim,
            });
        }
        let n = self.dim;
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..n {
                    sum += self.data[i * n + k] * rhs.data[k * n + j];
                }
                out.data[i * n + j] = sum;
            }
        }
        Ok(out)
    }

    /// True when `A ≈ A†` entry-wise within `tolerance`.
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        let n = self.dim;
        for i in 0..n {
            for j in 0..=i {
                let diff = self.data[i * n + j] - self.data[j * n + i].conj();
                if diff.norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Round every real and imaginary component to `places` decimal digits
    /// in place. Ties round half away from zero (see [`round_to_places`]).
    pub fn round_entries(&mut self, places: u32) {
        for z in &mut self.data {
            *z = Complex64::new(round_to_places(z.re, places), round_to_places(z.im, places));
        }
    }
}
