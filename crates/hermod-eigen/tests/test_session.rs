//! Tests for the session state machine and its wire contract.

use hermod_eigen::{EigenError, EigenSession};
use hermod_linalg::LinalgError;

const TOL: f64 = 1e-12;

// Row-major interleaved wire form of diag(2, 1).
const DIAG_2_1: [f64; 8] = [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0];

#[test]
fn default_session_is_three_by_three() {
    let session = EigenSession::default();
    assert_eq!(session.dim(), 3);
    assert!(!session.is_ready());
}

#[test]
fn compute_without_matrix_is_not_ready() {
    let session = EigenSession::new(2).unwrap();
    assert!(matches!(session.compute(), Err(EigenError::NotReady)));
}

#[test]
fn zero_dimension_is_rejected() {
    assert!(matches!(
        EigenSession::new(0),
        Err(EigenError::Dimension { got: 0 })
    ));
}

#[test]
fn wrong_length_load_keeps_prior_matrix() {
    let mut session = EigenSession::new(2).unwrap();
    session.load_matrix(&DIAG_2_1).unwrap();

    // n = 2 expects 8 values; 5 must be rejected...
    let err = session.load_matrix(&[0.0; 5]).unwrap_err();
    assert!(matches!(
        err,
        EigenError::Linalg(LinalgError::SizeMismatch {
            expected: 8,
            got: 5
        })
    ));

    // ...and the previously stored matrix still decomposes.
    let out = session.compute().unwrap();
    assert!((out.eigenvalues[0] - 1.0).abs() < TOL);
    assert!((out.eigenvalues[1] - 2.0).abs() < TOL);
}

#[test]
fn set_dimension_invalidates_even_when_unchanged() {
    let mut session = EigenSession::new(2).unwrap();
    session.load_matrix(&DIAG_2_1).unwrap();
    assert!(session.is_ready());

    session.set_dimension(2).unwrap();
    assert!(!session.is_ready());
    assert!(matches!(session.compute(), Err(EigenError::NotReady)));
}

#[test]
fn set_dimension_rejects_zero_and_keeps_state() {
    let mut session = EigenSession::new(2).unwrap();
    session.load_matrix(&DIAG_2_1).unwrap();

    assert!(session.set_dimension(0).is_err());
    assert_eq!(session.dim(), 2);
    assert!(session.is_ready());
}

#[test]
fn output_is_column_major_interleaved() {
    let mut session = EigenSession::new(2).unwrap();
    session.load_matrix(&DIAG_2_1).unwrap();
    let out = session.compute().unwrap();

    // Ascending order flips the basis: λ₀ = 1 pairs with e₁, λ₁ = 2 with
    // e₀. Column-major: eigenvector k occupies reals [4k, 4k+4).
    assert_eq!(out.eigenvalues.len(), 2);
    assert_eq!(out.eigenvectors.len(), 8);
    let expect = [0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    for (got, want) in out.eigenvectors.iter().zip(expect.iter()) {
        assert!((got - want).abs() < TOL, "got {got}, want {want}");
    }
}

#[test]
fn non_hermitian_load_uses_upper_triangle() {
    // Documented behavior: the lower triangle is ignored, so this input
    // decomposes as [[1, 2], [2, 1]] → eigenvalues −1 and 3.
    let mut session = EigenSession::new(2).unwrap();
    session
        .load_matrix(&[1.0, 0.0, 2.0, 0.0, 999.0, 0.0, 1.0, 0.0])
        .unwrap();
    let out = session.compute().unwrap();
    assert!((out.eigenvalues[0] + 1.0).abs() < TOL);
    assert!((out.eigenvalues[1] - 3.0).abs() < TOL);
}

#[test]
fn compute_leaves_the_stored_matrix_in_place() {
    let mut session = EigenSession::new(2).unwrap();
    session.load_matrix(&DIAG_2_1).unwrap();
    let first = session.compute().unwrap();
    let second = session.compute().unwrap();
    assert_eq!(first, second);
}
