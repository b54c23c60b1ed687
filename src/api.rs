//! High-level API for Gaussian process regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the kernel and sampling parameters, and
//! a model type that computes posteriors for caller-supplied observation
//! sets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Hyperparameters are validated by `build()`;
//!   observations are validated on every `posterior()` call.
//! * **Reusable**: The model borrows itself, so one configured model can
//!   serve many observation sets — the expected pattern when every input
//!   change triggers recomputation.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `Gp::new()` → chained setters → `.build()` →
//!   `.posterior(&observations)`.
//! * **Duplicate detection**: Setting the same parameter twice is recorded
//!   and rejected at `build()` time.

// Internal dependencies
use crate::engine::executor::{GpConfig, GpExecutor};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::sampling::DEFAULT_SEED;
pub use crate::engine::output::{CurvePoint, GpResult};
pub use crate::math::grid::{evaluation_grid, GRID_SIZE, GRID_START, GRID_STEP};
pub use crate::primitives::errors::GpError;
pub use crate::primitives::observation::Observation;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Gaussian process model.
#[derive(Debug, Clone)]
pub struct GpBuilder<T: FloatLinalg> {
    /// Kernel correlation length (> 0).
    pub length_scale: Option<T>,

    /// Kernel marginal variance (> 0).
    pub variance_scale: Option<T>,

    /// Number of posterior sample curves to draw.
    pub num_samples: Option<usize>,

    /// Sampling noise floor for the empty observation set.
    pub default_noise_std: Option<T>,

    /// Coverage level of the credible band.
    pub credible_level: Option<T>,

    /// Seed for the sample generator.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for GpBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> GpBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            length_scale: None,
            variance_scale: None,
            num_samples: None,
            default_noise_std: None,
            credible_level: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel correlation length (default: 1.0).
    pub fn length_scale(mut self, length_scale: T) -> Self {
        if self.length_scale.is_some() {
            self.duplicate_param = Some("length_scale");
        }
        self.length_scale = Some(length_scale);
        self
    }

    /// Set the kernel marginal variance (default: 1.0).
    pub fn variance_scale(mut self, variance_scale: T) -> Self {
        if self.variance_scale.is_some() {
            self.duplicate_param = Some("variance_scale");
        }
        self.variance_scale = Some(variance_scale);
        self
    }

    /// Set the number of posterior sample curves (default: 0).
    pub fn num_samples(mut self, num_samples: usize) -> Self {
        if self.num_samples.is_some() {
            self.duplicate_param = Some("num_samples");
        }
        self.num_samples = Some(num_samples);
        self
    }

    /// Set the sampling noise floor for the empty observation set
    /// (default: 0.1).
    pub fn default_noise_std(mut self, default_noise_std: T) -> Self {
        if self.default_noise_std.is_some() {
            self.duplicate_param = Some("default_noise_std");
        }
        self.default_noise_std = Some(default_noise_std);
        self
    }

    /// Set the coverage level of the credible band (default: 0.95).
    pub fn credible_level(mut self, credible_level: T) -> Self {
        if self.credible_level.is_some() {
            self.duplicate_param = Some("credible_level");
        }
        self.credible_level = Some(credible_level);
        self
    }

    /// Set the sample generator seed (default: a fixed internal seed).
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and construct the model.
    pub fn build(self) -> Result<GaussianProcess<T>, GpError> {
        // Deferred builder misuse surfaces first.
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(length_scale) = self.length_scale {
            Validator::validate_length_scale(length_scale)?;
        }
        if let Some(variance_scale) = self.variance_scale {
            Validator::validate_variance_scale(variance_scale)?;
        }
        if let Some(num_samples) = self.num_samples {
            Validator::validate_num_samples(num_samples)?;
        }
        if let Some(default_noise_std) = self.default_noise_std {
            Validator::validate_noise_std(default_noise_std)?;
        }
        if let Some(credible_level) = self.credible_level {
            Validator::validate_credible_level(credible_level)?;
        }

        Ok(GaussianProcess { config: self })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured Gaussian process model.
///
/// Construct via [`GpBuilder`] (or [`GaussianProcess::builder`]); compute
/// posteriors with [`GaussianProcess::posterior`].
#[derive(Debug, Clone)]
pub struct GaussianProcess<T: FloatLinalg> {
    pub(crate) config: GpBuilder<T>,
}

impl<T: FloatLinalg> GaussianProcess<T> {
    /// Start building a model.
    pub fn builder() -> GpBuilder<T> {
        GpBuilder::new()
    }

    /// Compute the posterior over the evaluation grid for an observation
    /// set.
    ///
    /// An empty set yields the prior (zero mean, `variance_scale`
    /// variance). The result carries the mean, deviation, and bound curves
    /// plus the requested sample curves; a sampling failure is reported in
    /// the result rather than as an error.
    pub fn posterior(&self, observations: &[Observation<T>]) -> Result<GpResult<T>, GpError> {
        Validator::validate_observations(observations)?;

        let defaults = GpConfig::<T>::default();
        let config = GpConfig {
            length_scale: self.config.length_scale.unwrap_or(defaults.length_scale),
            variance_scale: self
                .config
                .variance_scale
                .unwrap_or(defaults.variance_scale),
            num_samples: self.config.num_samples.unwrap_or(defaults.num_samples),
            default_noise_std: self
                .config
                .default_noise_std
                .unwrap_or(defaults.default_noise_std),
            credible_level: self
                .config
                .credible_level
                .unwrap_or(defaults.credible_level),
            seed: self.config.seed,
        };

        let output = GpExecutor::run_with_config(observations, &config)?;

        Ok(GpResult {
            x: output.x,
            mean: output.mean,
            std_dev: output.std_dev,
            lower: output.lower,
            upper: output.upper,
            samples: output.samples,
            sampling_error: output.sampling_error,
            level_used: output.level_used,
        })
    }
}
