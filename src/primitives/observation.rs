//! Observed data points for Gaussian process conditioning.
//!
//! ## Purpose
//!
//! This module defines the `Observation` carrier: a single `(x, y)` pair
//! with its own noise standard deviation. Observations are owned by the
//! caller and passed by slice on every call; the engine never retains them.
//!
//! ## Design notes
//!
//! * **Per-point noise**: Each observation carries its own `noise_std`
//!   rather than sharing a global constant, so heterogeneous measurement
//!   quality is expressible.
//! * **Copy semantics**: The type is a small POD; slices of observations
//!   are cheap to build and pass around.
//!
//! ## Invariants
//!
//! * Construction performs no validation; finiteness and sign checks happen
//!   at the engine boundary before any computation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Observation Type
// ============================================================================

/// A single noisy observation `(x, y)` with its own noise level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<T> {
    /// Input coordinate.
    pub x: T,

    /// Observed value at `x`.
    pub y: T,

    /// Standard deviation of the measurement noise on `y`.
    pub noise_std: T,
}

impl<T: Float> Observation<T> {
    /// Create an observation with an explicit noise standard deviation.
    pub fn new(x: T, y: T, noise_std: T) -> Self {
        Self { x, y, noise_std }
    }

    /// Create a noise-free observation.
    ///
    /// Exact observations make the kernel matrix singular when two of them
    /// share an `x` coordinate; the solver regularizes that case with a
    /// minimal diagonal jitter.
    pub fn exact(x: T, y: T) -> Self {
        Self::new(x, y, T::zero())
    }

    /// Noise variance, `noise_std²`.
    #[inline]
    pub fn noise_variance(&self) -> T {
        self.noise_std * self.noise_std
    }
}
