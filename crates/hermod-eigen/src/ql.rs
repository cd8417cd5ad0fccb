//! Implicit-shift QL iteration on a real symmetric tridiagonal matrix.
//!
//! The classic tql2 scheme: for each eigenvalue index, chase a sequence of
//! plane rotations down the unreduced block with a Wilkinson-style shift
//! taken from the leading 2×2, until the coupling sub-diagonal entry is
//! negligible relative to its diagonal neighbours. The rotations are real;
//! they are applied directly to the columns of the (complex) accumulated
//! similarity, so the columns converge to the eigenvectors of the original
//! Hermitian matrix without a separate back-transform pass.

use hermod_linalg::ComplexMatrix;

use crate::error::{EigenError, EigenResult};

/// `r` carrying the sign of `g` (Fortran `SIGN(r, g)`).
fn sign(r: f64, g: f64) -> f64 {
    if g >= 0.0 { r.abs() } else { -r.abs() }
}

/// Diagonalize `(diag, off)` in place, rotating `transform`'s columns in
/// step.
///
/// `off[k]` couples rows `k` and `k+1`; `off[diag.len()−1]` is workspace.
/// On success `diag` holds the (unsorted) eigenvalues and column `k` of
/// `transform` the matching eigenvector. Fails with
/// [`EigenError::Convergence`] when one eigenvalue is not isolated within
/// `max_sweeps` rotation sweeps.
pub(crate) fn diagonalize(
    diag: &mut [f64],
    off: &mut [f64],
    transform: &mut ComplexMatrix,
    max_sweeps: usize,
) -> EigenResult<()> {
    let n = diag.len();
    debug_assert_eq!(off.len(), n);

    for l in 0..n {
        let mut sweeps = 0;
        loop {
            // Locate the first negligible coupling at or after l.
            let mut m = l;
            while m + 1 < n {
                let dd = diag[m].abs() + diag[m + 1].abs();
                if off[m].abs() <= f64::EPSILON * dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break; // eigenvalue l is isolated
            }
            if sweeps >= max_sweeps {
                return Err(EigenError::Convergence {
                    index: l,
                    sweeps,
                });
            }
            sweeps += 1;

            // Shift from the leading 2×2 of the unreduced block.
            let mut g = (diag[l + 1] - diag[l]) / (2.0 * off[l]);
            let mut r = g.hypot(1.0);
            g = diag[m] - diag[l] + off[l] / (g + sign(r, g));

            let mut s = 1.0;
            let mut c = 1.0;
            let mut p = 0.0;
            let mut underflow = false;

            // Chase the bulge from m−1 down to l.
            for i in (l..m).rev() {
                let f = s * off[i];
                let b = c * off[i];
                r = f.hypot(g);
                off[i + 1] = r;
                if r == 0.0 {
                    // Lost the rotation to underflow; drop the shift
                    // applied so far and restart the sweep scan.
                    diag[i + 1] -= p;
                    off[m] = 0.0;
                    underflow = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = diag[i + 1] - p;
                r = (diag[i] - g) * s + 2.0 * c * b;
                p = s * r;
                diag[i + 1] = g + p;
                g = c * r - b;

                // Rotate eigenvector columns i and i+1.
                for row in 0..n {
                    let zi = transform.get(row, i);
                    let zj = transform.get(row, i + 1);
                    transform.set(row, i + 1, s * zi + c * zj);
                    transform.set(row, i, c * zi - s * zj);
                }
            }
            if underflow {
                continue;
            }
            diag[l] -= p;
            off[l] = g;
            off[m] = 0.0;
        }
    }
    Ok(())
}
