//! Kernel matrix assembly.
//!
//! ## Purpose
//!
//! This module builds the three covariance matrices of the GP closed form
//! from a kernel, the evaluation grid, and the observation set:
//!
//! * `K` (n×n) between observations, with each observation's own noise
//!   variance added on the diagonal, and only there;
//! * `K*` (m×n) between grid points and observations;
//! * `K**` (m×m) between grid points.
//!
//! ## Design notes
//!
//! * **Flat buffers**: Matrices are flattened row-major `Vec<T>` with
//!   explicit dimensions, matching the crate's linear algebra layer. For
//!   the symmetric matrices `K` and `K**` the row-major and column-major
//!   layouts coincide.
//! * **Regularization helpers**: `add_jitter` and `symmetrize` implement
//!   the diagonal-jitter and symmetry repairs the solve and sampling stages
//!   rely on.
//!
//! ## Invariants
//!
//! * `K` and `K**` are symmetric by construction.
//! * Noise enters `K` only on the diagonal; `K*` and `K**` are noise-free.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::RbfKernel;
use crate::primitives::observation::Observation;

// ============================================================================
// Matrix Builders
// ============================================================================

/// Build `K` (n×n, row-major): `K[i][j] = k(X[i], X[j]) + δ_ij · noise_i²`.
pub fn observation_covariance<T: Float>(
    kernel: &RbfKernel<T>,
    observations: &[Observation<T>],
) -> Vec<T> {
    let n = observations.len();
    let mut matrix = Vec::with_capacity(n * n);

    for (i, obs_i) in observations.iter().enumerate() {
        for (j, obs_j) in observations.iter().enumerate() {
            let mut value = kernel.evaluate(obs_i.x, obs_j.x);
            if i == j {
                value = value + obs_i.noise_variance();
            }
            matrix.push(value);
        }
    }

    matrix
}

/// Build `K*` (m×n, row-major): `K*[i][j] = k(grid[i], X[j])`.
pub fn cross_covariance<T: Float>(
    kernel: &RbfKernel<T>,
    grid: &[T],
    observations: &[Observation<T>],
) -> Vec<T> {
    let mut matrix = Vec::with_capacity(grid.len() * observations.len());

    for &g in grid {
        for obs in observations {
            matrix.push(kernel.evaluate(g, obs.x));
        }
    }

    matrix
}

/// Build `K**` (m×m, row-major): `K**[i][j] = k(grid[i], grid[j])`.
pub fn grid_covariance<T: Float>(kernel: &RbfKernel<T>, grid: &[T]) -> Vec<T> {
    let mut matrix = Vec::with_capacity(grid.len() * grid.len());

    for &gi in grid {
        for &gj in grid {
            matrix.push(kernel.evaluate(gi, gj));
        }
    }

    matrix
}

// ============================================================================
// Regularization Helpers
// ============================================================================

/// Add `jitter` to every diagonal entry of a flattened `size`×`size` matrix.
pub fn add_jitter<T: Float>(matrix: &mut [T], size: usize, jitter: T) {
    for i in 0..size {
        matrix[i * size + i] = matrix[i * size + i] + jitter;
    }
}

/// Restore exact symmetry by averaging each entry with its transpose.
///
/// Floating-point cancellation in `K** − K*·K⁻¹·K*ᵗ` can leave the
/// posterior covariance asymmetric at round-off scale, which Cholesky
/// factorization does not tolerate.
pub fn symmetrize<T: Float>(matrix: &mut [T], size: usize) {
    let half = T::from(0.5).unwrap();
    for i in 0..size {
        for j in (i + 1)..size {
            let mean = (matrix[i * size + j] + matrix[j * size + i]) * half;
            matrix[i * size + j] = mean;
            matrix[j * size + i] = mean;
        }
    }
}

/// Largest diagonal entry of a flattened `size`×`size` matrix.
///
/// Used to scale jitter relative to the matrix magnitude.
pub fn diagonal_max<T: Float>(matrix: &[T], size: usize) -> T {
    let mut max = T::neg_infinity();
    for i in 0..size {
        let d = matrix[i * size + i];
        if d > max {
            max = d;
        }
    }
    max
}
