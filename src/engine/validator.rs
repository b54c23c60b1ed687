//! Input validation for Gaussian process configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation for hyperparameters and observation
//! data. It checks requirements such as positivity of kernel parameters,
//! finite values, and sample-count bounds, so that no computation is ever
//! attempted with non-physical inputs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Boundary-only**: Layers below the engine assume validated inputs.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter bounds**: Kernel scales must be positive; the credible
//!   level must lie strictly inside (0, 1); noise must be non-negative.
//! * **Finite checks**: Observations must be free of NaN/Inf before they
//!   enter a kernel matrix.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter observations.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the posterior computation itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GpError;
use crate::primitives::observation::Observation;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Gaussian process configuration and input data.
///
/// Provides static methods for validating hyperparameters and observation
/// data. All methods return `Result<(), GpError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel length scale.
    pub fn validate_length_scale<T: Float>(length_scale: T) -> Result<(), GpError> {
        if !length_scale.is_finite() || length_scale <= T::zero() {
            return Err(GpError::InvalidLengthScale(
                length_scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the kernel variance scale.
    pub fn validate_variance_scale<T: Float>(variance_scale: T) -> Result<(), GpError> {
        if !variance_scale.is_finite() || variance_scale <= T::zero() {
            return Err(GpError::InvalidVarianceScale(
                variance_scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the default noise standard deviation.
    pub fn validate_noise_std<T: Float>(noise_std: T) -> Result<(), GpError> {
        if !noise_std.is_finite() || noise_std < T::zero() {
            return Err(GpError::InvalidNoiseStd(
                noise_std.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the credible band coverage level.
    pub fn validate_credible_level<T: Float>(level: T) -> Result<(), GpError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(GpError::InvalidCredibleLevel(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the requested number of sample curves.
    ///
    /// # Notes
    ///
    /// * 0 samples means posterior summary only (no draws).
    /// * Maximum of 1000 samples to prevent excessive computation.
    pub fn validate_num_samples(num_samples: usize) -> Result<(), GpError> {
        const MAX_SAMPLES: usize = 1000;
        if num_samples > MAX_SAMPLES {
            return Err(GpError::InvalidSampleCount {
                got: num_samples,
                max: MAX_SAMPLES,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Observation Validation
    // ========================================================================

    /// Validate an observation set for posterior conditioning.
    ///
    /// An empty set is valid and yields the prior.
    pub fn validate_observations<T: Float>(
        observations: &[Observation<T>],
    ) -> Result<(), GpError> {
        for (index, obs) in observations.iter().enumerate() {
            // Check 1: Finite coordinates
            if !obs.x.is_finite() {
                return Err(GpError::NonFiniteObservation { index, field: "x" });
            }
            if !obs.y.is_finite() {
                return Err(GpError::NonFiniteObservation { index, field: "y" });
            }

            // Check 2: Finite, non-negative noise
            if !obs.noise_std.is_finite() {
                return Err(GpError::NonFiniteObservation {
                    index,
                    field: "noise_std",
                });
            }
            if obs.noise_std < T::zero() {
                return Err(GpError::InvalidObservationNoise {
                    index,
                    value: obs.noise_std.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), GpError> {
        if let Some(param) = duplicate_param {
            return Err(GpError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
