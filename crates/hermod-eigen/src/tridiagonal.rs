//! Householder reduction of a Hermitian matrix to real symmetric
//! tridiagonal form.
//!
//! Each step reflects the column below the current diagonal entry onto a
//! single sub-diagonal element with a unitary Householder similarity
//! `H = I − 2vv†`, applied as a rank-2 update of the trailing block. The
//! product of the reflectors is accumulated so that `A = Q·T·Q†` holds
//! exactly (to roundoff). A final diagonal phase pass absorbs the complex
//! phases of the sub-diagonal into `Q`, leaving `T` real symmetric with a
//! non-negative sub-diagonal — the form the QL iteration consumes.

use num_complex::Complex64;

use hermod_linalg::ComplexMatrix;

use crate::error::EigenResult;

/// A real symmetric tridiagonal matrix plus the unitary similarity that
/// produced it: `input = transform · T · transform†`.
pub(crate) struct Tridiagonal {
    /// Main diagonal, length `n`.
    pub diag: Vec<f64>,
    /// Sub-diagonal: `off[k]` couples rows `k` and `k+1`. Length `n`, with
    /// `off[n−1]` a zero workspace slot for the QL sweep.
    pub off: Vec<f64>,
    /// Accumulated unitary transform.
    pub transform: ComplexMatrix,
}

/// Reduce a full Hermitian matrix (both triangles populated) to real
/// symmetric tridiagonal form.
pub(crate) fn reduce(mut a: ComplexMatrix) -> EigenResult<Tridiagonal> {
    let n = a.dim();
    let mut q = ComplexMatrix::identity(n)?;
    // Complex sub-diagonal before phase absorption.
    let mut sub = vec![Complex64::new(0.0, 0.0); n.saturating_sub(1)];

    for k in 0..n.saturating_sub(1) {
        let m = n - k - 1;
        let mut v: Vec<Complex64> = (0..m).map(|t| a.get(k + 1 + t, k)).collect();
        let xnorm = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        if xnorm == 0.0 {
            // Column already tridiagonal; sub[k] stays zero.
            continue;
        }

        // beta = −phase(α)·‖x‖ keeps v[0] = α − beta free of cancellation
        // and makes v†x real, so H·x = beta·e₁ exactly.
        let alpha = v[0];
        let phase = if alpha.norm() == 0.0 {
            Complex64::new(1.0, 0.0)
        } else {
            alpha / alpha.norm()
        };
        let beta = -phase * xnorm;
        v[0] -= beta;
        let vnorm = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        for z in &mut v {
            *z /= vnorm;
        }

        // Rank-2 update of the trailing block B ← B − 2vw† − 2wv† with
        // p = B·v and w = p − (v†p)·v, which equals H·B·H for Hermitian B.
        let mut p = vec![Complex64::new(0.0, 0.0); m];
        for r in 0..m {
            let mut sum = Complex64::new(0.0, 0.0);
            for c in 0..m {
                sum += a.get(k + 1 + r, k + 1 + c) * v[c];
            }
            p[r] = sum;
        }
        let vp: Complex64 = v.iter().zip(&p).map(|(vi, pi)| vi.conj() * pi).sum();
        // v†Bv is real for Hermitian B; dropping the roundoff imaginary
        // part keeps the updated block exactly Hermitian.
        let vp = vp.re;
        let w: Vec<Complex64> = (0..m).map(|t| p[t] - vp * v[t]).collect();
        for r in 0..m {
            for c in 0..m {
                let delta = 2.0 * (v[r] * w[c].conj() + w[r] * v[c].conj());
                let value = a.get(k + 1 + r, k + 1 + c) - delta;
                a.set(k + 1 + r, k + 1 + c, value);
            }
        }

        // The reflected column collapses onto the sub-diagonal.
        a.set(k + 1, k, beta);
        a.set(k, k + 1, beta.conj());
        for r in k + 2..n {
            a.set(r, k, Complex64::new(0.0, 0.0));
            a.set(k, r, Complex64::new(0.0, 0.0));
        }
        sub[k] = beta;

        // Q ← Q·H on columns k+1‥n.
        for row in 0..n {
            let mut s = Complex64::new(0.0, 0.0);
            for t in 0..m {
                s += q.get(row, k + 1 + t) * v[t];
            }
            let s2 = 2.0 * s;
            for t in 0..m {
                let value = q.get(row, k + 1 + t) - s2 * v[t].conj();
                q.set(row, k + 1 + t, value);
            }
        }
    }

    // Absorb sub-diagonal phases into Q: with θ₀ = 1 and
    // θ_{k+1} = sub[k]·θ_k / |sub[k]|, the similarity by diag(θ) turns
    // every sub-diagonal entry into its modulus.
    let mut diag = vec![0.0; n];
    for (i, d) in diag.iter_mut().enumerate() {
        *d = a.get(i, i).re;
    }
    let mut off = vec![0.0; n];
    let mut theta = Complex64::new(1.0, 0.0);
    for k in 0..n.saturating_sub(1) {
        let e = sub[k];
        let magnitude = e.norm();
        off[k] = magnitude;
        if magnitude > 0.0 {
            theta = e * theta / magnitude;
        }
        for row in 0..n {
            let value = q.get(row, k + 1) * theta;
            q.set(row, k + 1, value);
        }
    }

    Ok(Tridiagonal {
        diag,
        off,
        transform: q,
    })
}
