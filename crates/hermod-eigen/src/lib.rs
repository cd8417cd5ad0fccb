//! `hermod-eigen` — dense Hermitian eigen-decomposition.
//!
//! Computes all eigenvalues and eigenvectors of a complex Hermitian matrix
//! in double precision:
//!
//! - **Householder tridiagonalization** — unitary similarity transforms
//!   reduce the matrix to real symmetric tridiagonal form, accumulating
//!   the transform.
//! - **Implicit-shift QL** — Wilkinson-shifted plane rotations isolate the
//!   eigenvalues of the tridiagonal form while the accumulated columns
//!   rotate into the eigenvectors.
//!
//! The decomposition sits behind the [`HermitianEigensolver`] trait so an
//! equivalent implementation can be substituted; callers rely only on the
//! ascending-eigenvalue / index-aligned-eigenvector contract.
//!
//! # Quick start
//!
//! ```rust
//! use hermod_eigen::{HermitianEigensolver, TridiagonalQl};
//! use hermod_linalg::ComplexMatrix;
//!
//! let identity = ComplexMatrix::identity(4)?;
//! let eig = TridiagonalQl::default().decompose(&identity)?;
//! assert!(eig.eigenvalues().iter().all(|l| (l - 1.0).abs() < 1e-12));
//! # Ok::<(), hermod_eigen::EigenError>(())
//! ```

pub mod decomposition;
pub mod error;
mod ql;
pub mod session;
pub mod solver;
mod tridiagonal;

pub use decomposition::EigenDecomposition;
pub use error::{EigenError, EigenResult};
pub use session::{EigenOutput, EigenSession};
pub use solver::{HermitianEigensolver, TridiagonalQl};
