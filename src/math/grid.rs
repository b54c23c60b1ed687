//! Fixed evaluation grid for posterior curves.
//!
//! ## Purpose
//!
//! Every output curve is evaluated on the same dense grid of 100 points
//! spanning `[-5, 5)` with step `0.1`, i.e. `x_i = i · 0.1 − 5`. The grid
//! is a constant of the engine, not derived from input; it defines the
//! x-coordinates of every returned curve.
//!
//! ## Design notes
//!
//! * **Fixed contract**: Callers align their rendering to this grid, so it
//!   is exposed as constants plus a generator rather than a parameter.
//! * **Generic output**: The generator materializes the grid at the working
//!   precision (`f32` or `f64`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Grid Constants
// ============================================================================

/// Number of points on the evaluation grid.
pub const GRID_SIZE: usize = 100;

/// Left edge of the evaluation grid.
pub const GRID_START: f64 = -5.0;

/// Spacing between adjacent grid points.
pub const GRID_STEP: f64 = 0.1;

// ============================================================================
// Grid Construction
// ============================================================================

/// Materialize the evaluation grid at precision `T`.
///
/// Returns `GRID_SIZE` values `x_i = GRID_START + i · GRID_STEP`, ordered
/// and strictly increasing.
pub fn evaluation_grid<T: Float>() -> Vec<T> {
    (0..GRID_SIZE)
        .map(|i| T::from(GRID_START + GRID_STEP * i as f64).unwrap())
        .collect()
}
