//! `hermod-oscillator` — discretized harmonic-oscillator Hamiltonian.
//!
//! Builds `H = 0.5·(P² + Q²)` on an `n`-point grid, where the momentum
//! operator is assembled in the unitary discrete-Fourier basis
//! ([`FourierBasis`]) and the position operator is a symmetric diagonal
//! grid scaled by the potential parameter `a`. The result is Hermitian up
//! to a five-decimal rounding pass and feeds directly into
//! `hermod-eigen`'s Hermitian eigensolver.
//!
//! # Quick start
//!
//! ```rust
//! use hermod_oscillator::HamiltonianBuilder;
//!
//! let h = HamiltonianBuilder::new(8, 1.0)?.build()?;
//! assert_eq!(h.dim(), 8);
//! assert!(h.is_hermitian(1e-4));
//! # Ok::<(), hermod_oscillator::OscillatorError>(())
//! ```

pub mod error;
pub mod fourier;
pub mod hamiltonian;
pub mod session;

pub use error::{OscillatorError, OscillatorResult};
pub use fourier::FourierBasis;
pub use hamiltonian::HamiltonianBuilder;
pub use session::OscillatorSession;
