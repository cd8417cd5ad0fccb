//! Stateful host boundary for the oscillator path.
//!
//! A session owns the `(n, a)` pair a host configures between computations
//! and renders results in the flat wire shape hosts consume: `2·n·n` reals,
//! row-major, each element as a consecutive `(re, im)` pair. There is no
//! stored matrix on this path — `compute` is a pure function of `(n, a)`.

use serde::{Deserialize, Serialize};

use hermod_linalg::{MatrixLayout, to_interleaved};

use crate::error::{OscillatorError, OscillatorResult};
use crate::hamiltonian::HamiltonianBuilder;

/// Per-instance oscillator state: one dimension, one potential scale.
///
/// Replaces the process-wide object registry of message-passing hosts with
/// an explicit value; drive one session per host object and serialize
/// concurrent access externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OscillatorSession {
    dim: usize,
    potential: f64,
}

impl Default for OscillatorSession {
    /// The host-facing defaults: an 8-point grid with unit potential scale.
    fn default() -> Self {
        Self {
            dim: 8,
            potential: 1.0,
        }
    }
}

impl OscillatorSession {
    /// Create a session with an explicit dimension and potential scale.
    pub fn new(dim: usize, potential: f64) -> OscillatorResult<Self> {
        if dim == 0 {
            return Err(OscillatorError::Dimension { got: 0 });
        }
        Ok(Self { dim, potential })
    }

    /// Current grid dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Current potential scale.
    pub fn potential(&self) -> f64 {
        self.potential
    }

    /// Reset the grid dimension. Fails with [`OscillatorError::Dimension`]
    /// for `n = 0`; the potential scale is unaffected.
    pub fn set_dimension(&mut self, dim: usize) -> OscillatorResult<()> {
        if dim == 0 {
            return Err(OscillatorError::Dimension { got: 0 });
        }
        self.dim = dim;
        Ok(())
    }

    /// Replace the potential scale.
    pub fn set_potential(&mut self, potential: f64) {
        self.potential = potential;
    }

    /// Compute the Hamiltonian and return it in wire form: `2·n·n` reals,
    /// row-major, interleaved `(re, im)`.
    pub fn compute(&self) -> OscillatorResult<Vec<f64>> {
        let h = HamiltonianBuilder::new(self.dim, self.potential)?.build()?;
        Ok(to_interleaved(&h, MatrixLayout::RowMajor))
    }

    /// Same wire shape as [`compute`](Self::compute), built with the legacy
    /// formulation (see [`HamiltonianBuilder::build_legacy`]).
    pub fn compute_legacy(&self) -> OscillatorResult<Vec<f64>> {
        let h = HamiltonianBuilder::new(self.dim, self.potential)?.build_legacy()?;
        Ok(to_interleaved(&h, MatrixLayout::RowMajor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_host_object() {
        let session = OscillatorSession::default();
        assert_eq!(session.dim(), 8);
        assert_eq!(session.potential(), 1.0);
    }

    #[test]
    fn compute_emits_wire_shape() {
        let session = OscillatorSession::default();
        let flat = session.compute().unwrap();
        assert_eq!(flat.len(), 2 * 8 * 8);
    }

    #[test]
    fn set_dimension_rejects_zero() {
        let mut session = OscillatorSession::default();
        assert!(session.set_dimension(0).is_err());
        assert_eq!(session.dim(), 8);
    }

    #[test]
    fn reconfigured_session_computes_new_shape() {
        let mut session = OscillatorSession::default();
        session.set_dimension(3).unwrap();
        session.set_potential(2.0);
        let flat = session.compute().unwrap();
        assert_eq!(flat.len(), 18);
    }
}
