//! `hermod-linalg` — dense complex-matrix primitives.
//!
//! The foundation of the Hermod workspace: a square [`ComplexMatrix`] over
//! one contiguous row-major buffer, the handful of operations the operator
//! builders and the eigensolver are written in terms of (conjugate
//! transpose, diagonal row scaling, dense multiply), the flat interleaved
//! wire encoding used at the host boundary, and the fixed-decimal rounding
//! helper.
//!
//! # Quick start
//!
//! ```rust
//! use hermod_linalg::{ComplexMatrix, MatrixLayout, to_interleaved};
//! use num_complex::Complex64;
//!
//! let f = ComplexMatrix::from_rows(
//!     vec![
//!         Complex64::new(1.0, 0.0),
//!         Complex64::new(0.0, 1.0),
//!         Complex64::new(0.0, -1.0),
//!         Complex64::new(1.0, 0.0),
//!     ],
//!     2,
//! )?;
//! assert!(f.is_hermitian(1e-12));
//! assert_eq!(to_interleaved(&f, MatrixLayout::RowMajor).len(), 8);
//! # Ok::<(), hermod_linalg::LinalgError>(())
//! ```

pub mod error;
pub mod layout;
pub mod matrix;
pub mod round;

pub use error::{LinalgError, LinalgResult};
pub use layout::{MatrixLayout, from_interleaved, to_interleaved};
pub use matrix::ComplexMatrix;
pub use round::round_to_places;
