//! Credible bands for posterior curves.
//!
//! ## Purpose
//!
//! This module converts the posterior summary (mean and standard deviation
//! per grid point) into lower/upper credible bounds:
//!
//! ```text
//! upper[i] = mean[i] + z · std_dev[i]
//! lower[i] = mean[i] − z · std_dev[i]
//! ```
//!
//! ## Design notes
//!
//! * **Gaussian posterior**: The band is exact under the GP's Gaussian
//!   posterior, not an asymptotic approximation.
//! * **Z-scores**: Common levels use fixed critical values; other levels
//!   are estimated via Acklam's inverse normal CDF.
//! * **Default level**: 0.95, giving the familiar `±1.96σ` band.
//!
//! ## Invariants
//!
//! * Levels must satisfy 0 < level < 1 (validated at the engine boundary).
//! * With non-negative deviations, `upper[i] >= mean[i] >= lower[i]`
//!   pointwise.
//!
//! ## Non-goals
//!
//! * This module does not compute the posterior itself.
//! * No simultaneous (whole-curve) bands; bounds are pointwise.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Credible Band
// ============================================================================

/// Pointwise credible band at a given coverage level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CredibleBand<T> {
    /// Desired probability coverage (e.g., 0.95 for 95% bands).
    pub level: T,
}

impl<T: Float> Default for CredibleBand<T> {
    fn default() -> Self {
        Self {
            level: T::from(0.95).unwrap(),
        }
    }
}

impl<T: Float> CredibleBand<T> {
    /// Band at the specified coverage level.
    pub fn new(level: T) -> Self {
        Self { level }
    }

    // ========================================================================
    // Z-Score Approximation
    // ========================================================================

    /// Critical value (Z-score) for this band's coverage level.
    ///
    /// `z = Phi⁻¹((1 + level) / 2)` where `Phi⁻¹` is the inverse standard
    /// normal CDF.
    pub fn z_score(&self) -> T {
        let level = self.level.to_f64().unwrap_or(0.95);

        // Fast paths for common coverage levels
        let z = if (level - 0.99).abs() < 1e-6 {
            2.576
        } else if (level - 0.95).abs() < 1e-6 {
            1.96
        } else if (level - 0.90).abs() < 1e-6 {
            1.645
        } else {
            acklam_inverse_cdf((1.0 + level) / 2.0)
        };

        T::from(z).unwrap_or_else(T::one)
    }

    // ========================================================================
    // Band Computation
    // ========================================================================

    /// Lower and upper bounds, `mean ∓ z·std_dev` elementwise.
    pub fn bounds(&self, mean: &[T], std_dev: &[T]) -> (Vec<T>, Vec<T>) {
        let z = self.z_score();

        let lower: Vec<T> = mean
            .iter()
            .zip(std_dev.iter())
            .map(|(&m, &s)| m - z * s)
            .collect();

        let upper: Vec<T> = mean
            .iter()
            .zip(std_dev.iter())
            .map(|(&m, &s)| m + z * s)
            .collect();

        (lower, upper)
    }
}

// ============================================================================
// Inverse Normal CDF
// ============================================================================

/// Rational approximation of the inverse standard normal CDF (Acklam).
fn acklam_inverse_cdf(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }

    // Coefficients for central region
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];

    // Coefficients for tail regions
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 0.97575;

    if p < P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    } else if p > P_HIGH {
        // Upper tail
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        -(num / den)
    } else {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}
