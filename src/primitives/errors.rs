//! Error types for Gaussian process operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! model or computing a posterior: hyperparameter validation, observation
//! validation, and numeric failures in the solve and sampling stages.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (and index, for
//!   per-observation problems).
//! * **Deferred**: Builder misuse is caught and stored during configuration,
//!   then surfaced by `build()`.
//! * **No-std**: All variants are `core`-only; no heap allocation is needed
//!   to construct or format them.
//! * **Trait implementation**: Implements `Display` always and
//!   `std::error::Error` when `std` is enabled.
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Invalid length scale, variance scale, noise,
//!    credible level, or sample count.
//! 2. **Observation validation**: Non-finite coordinates or invalid
//!    per-observation noise.
//! 3. **Numeric failures**: An unfactorable kernel matrix, or a posterior
//!    covariance that resists factorization beyond the jitter tolerance.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * `SamplingUnavailable` never invalidates the mean and bound curves; it
//!   only reports that sample curves could not be drawn.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Gaussian process operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GpError {
    /// Kernel length scale must be positive and finite.
    InvalidLengthScale(f64),

    /// Kernel variance scale must be positive and finite.
    InvalidVarianceScale(f64),

    /// Default noise standard deviation must be non-negative and finite.
    InvalidNoiseStd(f64),

    /// Credible level must be strictly between 0 and 1.
    InvalidCredibleLevel(f64),

    /// Requested number of sample curves exceeds the supported maximum.
    InvalidSampleCount {
        /// Number of samples requested.
        got: usize,
        /// Maximum supported number of samples.
        max: usize,
    },

    /// An observation contains a NaN or infinite value.
    NonFiniteObservation {
        /// Index of the offending observation.
        index: usize,
        /// Name of the offending field (`"x"`, `"y"`, or `"noise_std"`).
        field: &'static str,
    },

    /// An observation's noise standard deviation is negative.
    InvalidObservationNoise {
        /// Index of the offending observation.
        index: usize,
        /// The noise value provided.
        value: f64,
    },

    /// The observation kernel matrix could not be factored, even after
    /// diagonal regularization.
    NumericInstability,

    /// The posterior covariance could not be factored for sampling beyond
    /// the jitter tolerance; mean and bound curves remain valid.
    SamplingUnavailable,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidLengthScale(v) => {
                write!(f, "Invalid length_scale: {v} (must be > 0 and finite)")
            }
            Self::InvalidVarianceScale(v) => {
                write!(f, "Invalid variance_scale: {v} (must be > 0 and finite)")
            }
            Self::InvalidNoiseStd(v) => {
                write!(f, "Invalid default_noise_std: {v} (must be >= 0 and finite)")
            }
            Self::InvalidCredibleLevel(v) => {
                write!(f, "Invalid credible_level: {v} (must be > 0 and < 1)")
            }
            Self::InvalidSampleCount { got, max } => {
                write!(f, "Invalid num_samples: {got} (must be at most {max})")
            }
            Self::NonFiniteObservation { index, field } => {
                write!(f, "Observation {index} has a non-finite {field} value")
            }
            Self::InvalidObservationNoise { index, value } => {
                write!(
                    f,
                    "Observation {index} has invalid noise_std: {value} (must be >= 0 and finite)"
                )
            }
            Self::NumericInstability => {
                write!(
                    f,
                    "Observation kernel matrix is not positive definite; duplicate x values with zero noise are the usual cause"
                )
            }
            Self::SamplingUnavailable => {
                write!(
                    f,
                    "Posterior covariance could not be factored for sampling; mean and bound curves are unaffected"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for GpError {}
