//! Flat-buffer encoding and layout conversion.
//!
//! The host boundary exchanges matrices as flat sequences of `2·n·n` reals:
//! each complex element contributes a consecutive `(re, im)` pair, and the
//! elements are ordered according to a [`MatrixLayout`]. Input always
//! arrives row-major; eigenvector output leaves column-major so that each
//! eigenvector occupies `2·n` consecutive reals. Both directions live here
//! as one tested utility instead of index arithmetic scattered over call
//! sites.

use num_complex::Complex64;

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::ComplexMatrix;

/// Element ordering of a flat matrix encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixLayout {
    /// Element `(i, j)` at flat position `i·n + j`.
    RowMajor,
    /// Element `(i, j)` at flat position `j·n + i`.
    ColumnMajor,
}

/// Encode a matrix as `2·n·n` interleaved reals in the given layout.
///
/// Flat position `p` of an element yields reals at `2p` (real part) and
/// `2p + 1` (imaginary part).
pub fn to_interleaved(matrix: &ComplexMatrix, layout: MatrixLayout) -> Vec<f64> {
    let n = matrix.dim();
    let mut out = vec![0.0; 2 * n * n];
    for i in 0..n {
        for j in 0..n {
            let p = match layout {
                MatrixLayout::RowMajor => i * n + j,
                MatrixLayout::ColumnMajor => j * n + i,
            };
            let z = matrix.get(i, j);
            out[2 * p] = z.re;
            out[2 * p + 1] = z.im;
        }
    }
    out
}

/// Decode a row-major interleaved buffer into a `dim × dim` matrix.
///
/// Fails with [`LinalgError::SizeMismatch`] when `values.len() != 2·dim²`;
/// nothing is allocated in that case.
pub fn from_interleaved(values: &[f64], dim: usize) -> LinalgResult<ComplexMatrix> {
    let expected = 2 * dim * dim;
    if values.len() != expected {
        return Err(LinalgError::SizeMismatch {
            expected,
            got: values.len(),
        });
    }
    let mut m = ComplexMatrix::zeros(dim)?;
    for i in 0..dim {
        for j in 0..dim {
            let p = i * dim + j;
            m.set(i, j, Complex64::new(values[2 * p], values[2 * p + 1]));
        }
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    /// Asymmetric 2×2 fixture: row-major and column-major encodings differ.
    fn fixture() -> ComplexMatrix {
        ComplexMatrix::from_rows(
            vec![c(1.0, 2.0), c(3.0, 4.0), c(5.0, 6.0), c(7.0, 8.0)],
            2,
        )
        .unwrap()
    }

    #[test]
    fn row_major_ordering() {
        let flat = to_interleaved(&fixture(), MatrixLayout::RowMajor);
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn column_major_ordering() {
        let flat = to_interleaved(&fixture(), MatrixLayout::ColumnMajor);
        // Columns (1+2i, 5+6i) then (3+4i, 7+8i).
        assert_eq!(flat, vec![1.0, 2.0, 5.0, 6.0, 3.0, 4.0, 7.0, 8.0]);
    }

    #[test]
    fn parse_then_encode_round_trips() {
        let flat = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let m = from_interleaved(&flat, 2).unwrap();
        assert_eq!(m, fixture());
        assert_eq!(to_interleaved(&m, MatrixLayout::RowMajor), flat);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = from_interleaved(&[0.0; 10], 3).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::SizeMismatch {
                expected: 18,
                got: 10
            }
        ));
    }
}
