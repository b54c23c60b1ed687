//! Execution engine for Gaussian process operations.
//!
//! ## Purpose
//!
//! This module provides the execution engine that orchestrates one full
//! posterior computation: conditioning (or the prior short-circuit),
//! credible band extraction, and optional sample curve generation. The
//! executor is the central component that coordinates the lower-level
//! algorithms to produce a complete result.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Stateless across calls: every run rebuilds all matrices from the
//!   observation set, matching the recompute-on-change calling pattern.
//! * Demotes sampling failure to a carried error so mean and bound curves
//!   survive an unfactorable posterior covariance.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Prior short-circuit**: With no observations the posterior is the
//!   prior, and the sampler receives the default noise level as its floor.
//! * **Seed resolution**: An unset seed maps to the fixed default, so
//!   identical inputs always reproduce identical outputs.
//!
//! ## Invariants
//!
//! * Inputs are assumed validated (handled by `validator`).
//! * All output vectors have exactly one entry per grid point.
//! * `samples` is empty whenever `sampling_error` is set.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::posterior::Posterior;
use crate::algorithms::sampling::{PosteriorSampler, DEFAULT_SEED};
use crate::evaluation::intervals::CredibleBand;
use crate::math::grid::evaluation_grid;
use crate::math::kernel::RbfKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::GpError;
use crate::primitives::observation::Observation;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration options for a posterior computation.
#[derive(Debug, Clone, PartialEq)]
pub struct GpConfig<T> {
    /// Kernel correlation length (> 0).
    pub length_scale: T,

    /// Kernel marginal variance (> 0).
    pub variance_scale: T,

    /// Number of posterior sample curves to draw.
    pub num_samples: usize,

    /// Noise standard deviation used as the sampling floor when the
    /// observation set is empty (prior sample scaling).
    pub default_noise_std: T,

    /// Coverage level of the credible band, strictly inside (0, 1).
    pub credible_level: T,

    /// Seed for the sample generator; `None` uses the fixed default seed.
    pub seed: Option<u64>,
}

impl<T: Float> Default for GpConfig<T> {
    fn default() -> Self {
        Self {
            length_scale: T::one(),
            variance_scale: T::one(),
            num_samples: 0,
            default_noise_std: T::from(0.1).unwrap(),
            credible_level: T::from(0.95).unwrap(),
            seed: None,
        }
    }
}

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output of one executor run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
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

    /// Posterior sample curves (empty when none were requested or sampling
    /// failed).
    pub samples: Vec<Vec<T>>,

    /// Error from the sampling stage, if it failed; the summary curves are
    /// unaffected.
    pub sampling_error: Option<GpError>,

    /// Coverage level the bounds were computed at.
    pub level_used: T,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for Gaussian process posterior computations.
#[derive(Debug, Clone)]
pub struct GpExecutor<T> {
    /// Kernel correlation length.
    pub length_scale: T,

    /// Kernel marginal variance.
    pub variance_scale: T,

    /// Number of posterior sample curves to draw.
    pub num_samples: usize,

    /// Sampling noise floor for the empty observation set.
    pub default_noise_std: T,

    /// Coverage level of the credible band.
    pub credible_level: T,

    /// Seed for the sample generator.
    pub seed: Option<u64>,
}

impl<T: FloatLinalg> Default for GpExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> GpExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        let defaults = GpConfig::<T>::default();
        Self {
            length_scale: defaults.length_scale,
            variance_scale: defaults.variance_scale,
            num_samples: defaults.num_samples,
            default_noise_std: defaults.default_noise_std,
            credible_level: defaults.credible_level,
            seed: defaults.seed,
        }
    }

    /// Create a new executor from a `GpConfig`.
    pub fn from_config(config: &GpConfig<T>) -> Self {
        Self::new()
            .length_scale(config.length_scale)
            .variance_scale(config.variance_scale)
            .num_samples(config.num_samples)
            .default_noise_std(config.default_noise_std)
            .credible_level(config.credible_level)
            .seed(config.seed)
    }

    /// Set the kernel correlation length.
    pub fn length_scale(mut self, length_scale: T) -> Self {
        self.length_scale = length_scale;
        self
    }

    /// Set the kernel marginal variance.
    pub fn variance_scale(mut self, variance_scale: T) -> Self {
        self.variance_scale = variance_scale;
        self
    }

    /// Set the number of posterior sample curves.
    pub fn num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set the sampling noise floor for the empty observation set.
    pub fn default_noise_std(mut self, default_noise_std: T) -> Self {
        self.default_noise_std = default_noise_std;
        self
    }

    /// Set the coverage level of the credible band.
    pub fn credible_level(mut self, credible_level: T) -> Self {
        self.credible_level = credible_level;
        self
    }

    /// Set the sample generator seed.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Run a posterior computation with the given configuration.
    pub fn run_with_config(
        observations: &[Observation<T>],
        config: &GpConfig<T>,
    ) -> Result<ExecutorOutput<T>, GpError> {
        Self::from_config(config).run(observations)
    }

    /// Run a posterior computation with this executor's parameters.
    pub fn run(&self, observations: &[Observation<T>]) -> Result<ExecutorOutput<T>, GpError> {
        let grid = evaluation_grid::<T>();
        let kernel = RbfKernel::new(self.length_scale, self.variance_scale);

        let posterior = if observations.is_empty() {
            Posterior::prior(&kernel, &grid)
        } else {
            Posterior::condition(&kernel, &grid, observations)?
        };

        let band = CredibleBand::new(self.credible_level);
        let (lower, upper) = band.bounds(&posterior.mean, &posterior.std_dev);

        let (samples, sampling_error) = if self.num_samples > 0 {
            // The prior has no observation noise on its diagonal; the
            // default noise level takes that role for prior draws.
            let noise_floor = if observations.is_empty() {
                self.default_noise_std
            } else {
                T::zero()
            };

            let mut sampler = PosteriorSampler::from_seed(self.seed.unwrap_or(DEFAULT_SEED));
            match sampler.draw_curves(&posterior.mean, &posterior.cov, noise_floor, self.num_samples)
            {
                Ok(samples) => (samples, None),
                Err(error) => (Vec::new(), Some(error)),
            }
        } else {
            (Vec::new(), None)
        };

        Ok(ExecutorOutput {
            x: grid,
            mean: posterior.mean,
            std_dev: posterior.std_dev,
            lower,
            upper,
            samples,
            sampling_error,
            level_used: self.credible_level,
        })
    }
}
