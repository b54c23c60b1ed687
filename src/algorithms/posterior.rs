//! Closed-form Gaussian process posterior.
//!
//! ## Purpose
//!
//! This module conditions the GP prior on a set of noisy observations and
//! produces the posterior predictive distribution over the evaluation grid:
//!
//! ```text
//! mean = K* · K⁻¹ · y
//! cov  = K** − K* · K⁻¹ · K*ᵗ
//! ```
//!
//! ## Design notes
//!
//! * **Solve, not invert**: `K⁻¹` is never materialized. One Cholesky
//!   factorization of `K` solves the combined right-hand side `[y | K*ᵗ]`,
//!   yielding both `K⁻¹·y` and `K⁻¹·K*ᵗ` with better conditioning than an
//!   explicit inverse.
//! * **Jitter on failure**: The exact system is attempted first. If `K` is
//!   not positive definite (duplicate x values with zero noise), the solve
//!   is retried once with a scaled diagonal jitter; a second failure is
//!   reported as [`GpError::NumericInstability`].
//! * **Clamped deviations**: The covariance diagonal is clamped at zero
//!   before the square root. Cancellation in `K** − K*·K⁻¹·K*ᵗ` can leave
//!   tiny negative variances, and NaN must never reach the output curves.
//!
//! ## Key concepts
//!
//! * **Prior short-circuit**: With no observations the posterior is the
//!   prior itself: zero mean and `K**` covariance, so every grid point has
//!   variance `variance_scale`.
//!
//! ## Invariants
//!
//! * `mean`, `std_dev`, and each covariance row have exactly one entry per
//!   grid point.
//! * `std_dev` is non-negative and finite for every valid input.
//!
//! ## Non-goals
//!
//! * No hyperparameter estimation; the kernel arrives fully parameterized.
//! * No incremental updates; every call conditions from scratch.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::covariance::{
    add_jitter, cross_covariance, diagonal_max, grid_covariance, observation_covariance,
};
use crate::math::kernel::RbfKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::GpError;
use crate::primitives::observation::Observation;

// ============================================================================
// Posterior Type
// ============================================================================

/// Posterior predictive distribution over the evaluation grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Posterior<T> {
    /// Posterior mean at each grid point.
    pub mean: Vec<T>,

    /// Posterior covariance, flattened row-major (grid × grid).
    pub cov: Vec<T>,

    /// Clamped standard deviation at each grid point,
    /// `sqrt(max(cov[i][i], 0))`.
    pub std_dev: Vec<T>,
}

impl<T: FloatLinalg> Posterior<T> {
    /// Relative diagonal jitter applied when the exact solve fails.
    const SOLVE_JITTER_REL: f64 = 1e-8;

    // ========================================================================
    // Prior
    // ========================================================================

    /// Posterior with no observations: the prior itself.
    ///
    /// Mean is identically zero and the covariance is `K**`, so the
    /// standard deviation is `sqrt(variance_scale)` at every grid point.
    pub fn prior(kernel: &RbfKernel<T>, grid: &[T]) -> Self {
        let m = grid.len();
        let cov = grid_covariance(kernel, grid);
        let mean = vec![T::zero(); m];
        let std_dev = Self::clamped_deviations(&cov, m);

        Self { mean, cov, std_dev }
    }

    // ========================================================================
    // Conditioning
    // ========================================================================

    /// Condition the prior on a non-empty observation set.
    ///
    /// The caller dispatches the empty case to [`Posterior::prior`];
    /// observations are assumed validated (finite, non-negative noise).
    pub fn condition(
        kernel: &RbfKernel<T>,
        grid: &[T],
        observations: &[Observation<T>],
    ) -> Result<Self, GpError> {
        let n = observations.len();
        let m = grid.len();

        let k = observation_covariance(kernel, observations);
        let kstar = cross_covariance(kernel, grid, observations);
        let kss = grid_covariance(kernel, grid);

        // Combined right-hand side [y | K*ᵗ], column-major n×(1+m). The
        // row-major m×n layout of K* is exactly the column-major layout of
        // its transpose, so the buffer is appended as-is.
        let mut rhs = Vec::with_capacity(n * (1 + m));
        rhs.extend(observations.iter().map(|obs| obs.y));
        rhs.extend_from_slice(&kstar);

        let solution = match T::solve_spd(&k, &rhs, n, 1 + m) {
            Some(solution) => solution,
            None => {
                let jitter = T::from(Self::SOLVE_JITTER_REL).unwrap() * diagonal_max(&k, n);
                let mut regularized = k;
                add_jitter(&mut regularized, n, jitter);
                T::solve_spd(&regularized, &rhs, n, 1 + m).ok_or(GpError::NumericInstability)?
            }
        };

        // Column 0 is alpha = K⁻¹·y; columns 1..=m hold V = K⁻¹·K*ᵗ.
        let alpha = &solution[..n];
        let mut mean = Vec::with_capacity(m);
        for i in 0..m {
            let row = &kstar[i * n..(i + 1) * n];
            mean.push(Self::dot(row, alpha));
        }

        let mut cov = kss;
        for i in 0..m {
            let row = &kstar[i * n..(i + 1) * n];
            for j in 0..m {
                let v_col = &solution[n * (1 + j)..n * (2 + j)];
                cov[i * m + j] = cov[i * m + j] - Self::dot(row, v_col);
            }
        }

        let std_dev = Self::clamped_deviations(&cov, m);

        Ok(Self { mean, cov, std_dev })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Standard deviations from a covariance diagonal, clamped at zero.
    fn clamped_deviations(cov: &[T], size: usize) -> Vec<T> {
        (0..size)
            .map(|i| cov[i * size + i].max(T::zero()).sqrt())
            .collect()
    }

    #[inline]
    fn dot(a: &[T], b: &[T]) -> T {
        a.iter()
            .zip(b.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }
}
