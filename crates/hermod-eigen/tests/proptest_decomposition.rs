//! Property-based tests for the decomposition invariants.
//!
//! Over random Hermitian matrices: eigenvalues come back ascending, the
//! eigenvector columns are orthonormal, and `V · diag(λ) · V†` rebuilds
//! the input.

use hermod_eigen::{HermitianEigensolver, TridiagonalQl};
use hermod_linalg::ComplexMatrix;
use num_complex::Complex64;
use proptest::prelude::*;

/// Random Hermitian matrix: real diagonal, arbitrary upper triangle
/// mirrored conjugate into the lower one.
fn arb_hermitian() -> impl Strategy<Value = ComplexMatrix> {
    (1_usize..=6).prop_flat_map(|n| {
        prop::collection::vec(-10.0_f64..10.0, 2 * n * n).prop_map(move |raw| {
            let mut m = ComplexMatrix::zeros(n).expect("small test allocation");
            for i in 0..n {
                let p = 2 * (i * n + i);
                m.set(i, i, Complex64::new(raw[p], 0.0));
                for j in i + 1..n {
                    let p = 2 * (i * n + j);
                    let z = Complex64::new(raw[p], raw[p + 1]);
                    m.set(i, j, z);
                    m.set(j, i, z.conj());
                }
            }
            m
        })
    })
}

proptest! {
    #[test]
    fn decomposition_invariants_hold(a in arb_hermitian()) {
        let n = a.dim();
        let eig = TridiagonalQl::default().decompose(&a).unwrap();

        // Ascending eigenvalues.
        for w in eig.eigenvalues().windows(2) {
            prop_assert!(w[0] <= w[1], "eigenvalues out of order: {:?}", eig.eigenvalues());
        }

        // Orthonormal eigenvector columns: V†V ≈ I.
        let v = eig.eigenvectors();
        let gram = v.conjugate_transpose().unwrap().matmul(v).unwrap();
        for i in 0..n {
            for j in 0..n {
                let want = if i == j { 1.0 } else { 0.0 };
                let diff = (gram.get(i, j) - Complex64::new(want, 0.0)).norm();
                prop_assert!(diff < 1e-8, "gram ({i},{j}) off by {diff}");
            }
        }

        // Reconstruction law, scaled by the magnitude of the input.
        let scale = 1.0 + a.as_slice().iter().map(|z| z.norm()).fold(0.0, f64::max);
        let back = eig.reconstruct().unwrap();
        for i in 0..n {
            for j in 0..n {
                let diff = (back.get(i, j) - a.get(i, j)).norm();
                prop_assert!(diff < 1e-8 * scale, "entry ({i},{j}) off by {diff}");
            }
        }
    }
}
