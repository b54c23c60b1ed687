//! Result types for Gaussian process computations.
//!
//! ## Purpose
//!
//! This module defines the public result carrier: the posterior summary
//! curves, the optional sample curves, and helpers for pairing values with
//! their grid x-coordinates.
//!
//! ## Design notes
//!
//! * **Parallel vectors**: Curves are stored as parallel `Vec<T>` aligned
//!   with `x`; `CurvePoint` accessors materialize `(x, y)` pairs for
//!   callers that plot point lists.
//! * **Sampling status**: A failed sampling stage is carried as
//!   `sampling_error` next to an empty `samples`, never as a hard error,
//!   since the summary curves do not require factorization.
//! * **Display**: Human-readable summary plus an aligned value table for
//!   quick inspection.
//!
//! ## Invariants
//!
//! * All curve vectors have the same length as `x`.
//! * Every sample curve has the same length as `x`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GpError;

// ============================================================================
// Curve Point
// ============================================================================

/// A single `(x, y)` point of an output curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint<T> {
    /// Grid x-coordinate.
    pub x: T,

    /// Curve value at `x`.
    pub y: T,
}

// ============================================================================
// Result Type
// ============================================================================

/// Complete result of one posterior computation.
#[derive(Debug, Clone, PartialEq)]
pub struct GpResult<T> {
    /// Grid x-coordinates.
    pub x: Vec<T>,

    /// Posterior mean at each grid point.
    pub mean: Vec<T>,

    /// Clamped posterior standard deviation at each grid point.
    pub std_dev: Vec<T>,

    /// Lower credible bound at each grid point.
    pub lower: Vec<T>,

    /// Upper credible bound at each grid point.
    pub upper: Vec<T>,

    /// Posterior sample curves, one inner vector per draw.
    pub samples: Vec<Vec<T>>,

    /// Error from the sampling stage, if it failed; summary curves remain
    /// valid.
    pub sampling_error: Option<GpError>,

    /// Coverage level the bounds were computed at.
    pub level_used: T,
}

impl<T: Float> GpResult<T> {
    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of grid points in each curve.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the result contains no grid points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Whether any sample curves were drawn.
    pub fn has_samples(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Whether the sampling stage completed without error.
    ///
    /// Also true when no samples were requested.
    pub fn sampling_available(&self) -> bool {
        self.sampling_error.is_none()
    }

    // ========================================================================
    // Curve Pairing
    // ========================================================================

    /// Mean curve as `(x, y)` points.
    pub fn mean_curve(&self) -> Vec<CurvePoint<T>> {
        Self::paired(&self.x, &self.mean)
    }

    /// Lower bound curve as `(x, y)` points.
    pub fn lower_curve(&self) -> Vec<CurvePoint<T>> {
        Self::paired(&self.x, &self.lower)
    }

    /// Upper bound curve as `(x, y)` points.
    pub fn upper_curve(&self) -> Vec<CurvePoint<T>> {
        Self::paired(&self.x, &self.upper)
    }

    /// Sample curves as `(x, y)` point lists, one per draw.
    pub fn sample_curves(&self) -> Vec<Vec<CurvePoint<T>>> {
        self.samples
            .iter()
            .map(|sample| Self::paired(&self.x, sample))
            .collect()
    }

    fn paired(x: &[T], y: &[T]) -> Vec<CurvePoint<T>> {
        x.iter()
            .zip(y.iter())
            .map(|(&x, &y)| CurvePoint { x, y })
            .collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for GpResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Gaussian Process Result:")?;
        writeln!(f, "  Grid points: {}", self.len())?;
        writeln!(f, "  Credible level: {}", self.level_used)?;
        writeln!(f, "  Sample curves: {}", self.samples.len())?;
        if let Some(error) = &self.sampling_error {
            writeln!(f, "  Sampling: unavailable ({error})")?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12} {:>12}",
            "x", "mean", "std_dev", "lower", "upper"
        )?;

        let n = self.len();
        let write_row = |f: &mut Formatter<'_>, i: usize| {
            writeln!(
                f,
                "{:>8.2} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                self.x[i], self.mean[i], self.std_dev[i], self.lower[i], self.upper[i]
            )
        };

        if n > 20 {
            for i in 0..10 {
                write_row(f, i)?;
            }
            writeln!(f, "{:>8}", "...")?;
            for i in (n - 10)..n {
                write_row(f, i)?;
            }
        } else {
            for i in 0..n {
                write_row(f, i)?;
            }
        }

        Ok(())
    }
}
