//! Squared-exponential (RBF) covariance function.
//!
//! ## Purpose
//!
//! This module implements the radial basis function kernel that defines the
//! Gaussian process prior:
//!
//! ```text
//! k(x1, x2) = variance_scale · exp(−(x1 − x2)² / (2 · length_scale²))
//! ```
//!
//! ## Design notes
//!
//! * **Two hyperparameters**: `length_scale` controls how quickly
//!   correlation decays with distance; `variance_scale` sets the marginal
//!   variance (the kernel value at zero lag).
//! * **Stateless evaluation**: The kernel is a value type; matrix assembly
//!   lives in [`crate::math::covariance`].
//!
//! ## Key concepts
//!
//! * **Symmetry**: `k(a, b) = k(b, a)` for all inputs.
//! * **Self-value**: `k(x, x) = variance_scale` for every `x`.
//! * **Monotone decay**: strictly decreasing in `|x1 − x2|`, strictly
//!   positive everywhere.
//!
//! ## Invariants
//!
//! * Hyperparameters are validated at the engine boundary; this module
//!   assumes `length_scale > 0` and `variance_scale > 0`.
//!
//! ## Non-goals
//!
//! * No other kernel families (Matérn, periodic, linear) are provided.
//! * No multi-dimensional inputs; the engine is strictly 1-D.

// External dependencies
use num_traits::Float;

// ============================================================================
// RBF Kernel
// ============================================================================

/// Squared-exponential covariance function over 1-D inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RbfKernel<T> {
    /// Correlation length; larger values give smoother functions.
    pub length_scale: T,

    /// Marginal variance; the kernel value at zero lag.
    pub variance_scale: T,
}

impl<T: Float> RbfKernel<T> {
    /// Create a kernel from its two hyperparameters.
    pub fn new(length_scale: T, variance_scale: T) -> Self {
        Self {
            length_scale,
            variance_scale,
        }
    }

    /// Evaluate `k(x1, x2)`.
    #[inline]
    pub fn evaluate(&self, x1: T, x2: T) -> T {
        let diff = x1 - x2;
        let two = T::one() + T::one();
        let denom = two * self.length_scale * self.length_scale;
        self.variance_scale * (-(diff * diff) / denom).exp()
    }
}
