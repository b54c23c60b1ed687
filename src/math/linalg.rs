//! Linear algebra backend abstraction for posterior computation.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the two dense
//! operations the engine needs, standardizing on the optimized nalgebra
//! backend: a multi-right-hand-side solve for conditioning, and a Cholesky
//! factorization for sampling.
//!
//! ## Design notes
//!
//! * Every matrix reaching this layer is symmetric positive-definite by
//!   construction (kernel matrices with non-negative diagonal noise, plus
//!   jitter where needed), so Cholesky handles both operations; there is no
//!   QR or SVD fallback. Factorization failure is reported as `None` and
//!   handled by the caller's jitter policy.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.
//! * Inputs and outputs are flattened slices with explicit dimensions,
//!   matching the rest of the math layer.
//!
//! ## Invariants
//!
//! * `solve_spd` and `cholesky_factor` never panic on singular input; they
//!   return `None`.
//! * The returned factor `L` satisfies `L · Lᵗ = A` within round-off for
//!   any accepted `A`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the optimized Nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve `A · X = B` for `X`, where `A` is symmetric positive-definite.
    ///
    /// `a` is the flattened `n`×`n` matrix (symmetric, so row- and
    /// column-major coincide); `b` holds `n_rhs` right-hand-side columns in
    /// column-major order (`n · n_rhs` entries). The solution is returned
    /// column-major, or `None` if `A` is not positive definite.
    fn solve_spd(a: &[Self], b: &[Self], n: usize, n_rhs: usize) -> Option<Vec<Self>>;

    /// Lower Cholesky factor `L` with `A = L · Lᵗ`.
    ///
    /// `a` is the flattened `n`×`n` matrix; the factor is returned
    /// column-major with an explicit zero upper triangle, or `None` if `A`
    /// is not positive definite.
    fn cholesky_factor(a: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_spd(a: &[Self], b: &[Self], n: usize, n_rhs: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_spd_f64(a, b, n, n_rhs)
    }
    #[inline]
    fn cholesky_factor(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::cholesky_factor_f64(a, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_spd(a: &[Self], b: &[Self], n: usize, n_rhs: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_spd_f32(a, b, n, n_rhs)
    }
    #[inline]
    fn cholesky_factor(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::cholesky_factor_f32(a, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{Cholesky, DMatrix};

    /// Solve an SPD system with multiple right-hand sides using f64 precision.
    pub fn solve_spd_f64(a: &[f64], b: &[f64], n: usize, n_rhs: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DMatrix::from_column_slice(n, n_rhs, b);

        let chol = Cholesky::new(matrix)?;
        Some(chol.solve(&rhs).as_slice().to_vec())
    }

    /// Solve an SPD system with multiple right-hand sides using f32 precision.
    pub fn solve_spd_f32(a: &[f32], b: &[f32], n: usize, n_rhs: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DMatrix::from_column_slice(n, n_rhs, b);

        let chol = Cholesky::new(matrix)?;
        Some(chol.solve(&rhs).as_slice().to_vec())
    }

    /// Lower Cholesky factor of an SPD matrix using f64 precision.
    pub fn cholesky_factor_f64(a: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);

        let chol = Cholesky::new(matrix)?;
        Some(chol.l().as_slice().to_vec())
    }

    /// Lower Cholesky factor of an SPD matrix using f32 precision.
    pub fn cholesky_factor_f32(a: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);

        let chol = Cholesky::new(matrix)?;
        Some(chol.l().as_slice().to_vec())
    }
}
