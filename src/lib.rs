//! # GP — Gaussian Process Regression for Rust
//!
//! A compact, numerically careful Gaussian process regression-and-sampling
//! engine over a fixed 1-D evaluation grid, with credible bands and
//! reproducible posterior draws.
//!
//! ## What is Gaussian process regression?
//!
//! A Gaussian process (GP) is a distribution over functions. Conditioning
//! it on a handful of noisy observations yields a posterior distribution
//! whose mean interpolates the data and whose variance quantifies the
//! remaining uncertainty at every input position. Both are available in
//! closed form, which makes GPs a natural fit for interactive curve
//! fitting: every change to the observation set or the hyperparameters is
//! answered with a fresh, exact posterior.
//!
//! **Key advantages:**
//! - Exact closed-form posterior (no iterative fitting)
//! - Calibrated uncertainty at every grid point, not just at the data
//! - Per-observation noise levels, so measurement quality can vary
//! - Random sample curves that respect the posterior's correlations
//!
//! **Common applications:**
//! - Interactive regression demos and teaching tools
//! - Curve fitting over sparse, noisy measurements
//! - Uncertainty-aware interpolation between sensor readings
//! - Visualizing how kernel hyperparameters shape a fit
//!
//! **How a posterior computation works:**
//!
//! 1. Build the kernel matrices between observations and the grid
//! 2. Solve one symmetric positive-definite system (never an explicit
//!    inverse)
//! 3. Derive the mean curve, the clamped deviations, and the credible band
//! 4. Optionally draw sample curves via a Cholesky factor of the posterior
//!    covariance
//!
//! All output curves live on a fixed grid of 100 points spanning
//! `[-5, 5)` with step `0.1`; the grid is a constant of the engine, so
//! callers can align rendering once and reuse it for every result.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use gp_rs::prelude::*;
//!
//! let observations = vec![
//!     Observation::new(-1.2, 0.8, 0.1),
//!     Observation::new(0.4, -0.3, 0.1),
//!     Observation::new(2.1, 0.5, 0.1),
//! ];
//!
//! // Build the model
//! let model = Gp::new()
//!     .length_scale(1.0)      // Correlation length of the kernel
//!     .variance_scale(1.0)    // Marginal variance of the prior
//!     .num_samples(3)         // Draw 3 posterior sample curves
//!     .build()?;
//!
//! // Condition on the observations
//! let result = model.posterior(&observations)?;
//!
//! assert_eq!(result.len(), 100);
//! assert_eq!(result.samples.len(), 3);
//! println!("{}", result);
//! # Result::<(), GpError>::Ok(())
//! ```
//!
//! ```text
//! Gaussian Process Result:
//!   Grid points: 100
//!   Credible level: 0.95
//!   Sample curves: 3
//!
//!        x         mean      std_dev        lower        upper
//!    -5.00     0.000555     0.999999    -1.959443     1.960554
//!    -4.90     0.000684     0.999999    -1.959314     1.960683
//!      ...
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use gp_rs::prelude::*;
//!
//! let model = Gp::new()
//!     .length_scale(1.5)        // Smoother functions
//!     .variance_scale(2.0)      // Wider prior
//!     .num_samples(5)           // Five posterior draws
//!     .default_noise_std(0.2)   // Noise floor for prior sampling
//!     .credible_level(0.99)     // 99% bands instead of 95%
//!     .seed(42)                 // Reproducible draws
//!     .build()?;
//!
//! let result = model.posterior(&[Observation::exact(0.0, 1.0)])?;
//!
//! assert!(result.has_samples());
//! assert!(result.sampling_available());
//! # Result::<(), GpError>::Ok(())
//! ```
//!
//! ### The Prior
//!
//! An empty observation set is valid and yields the prior: a zero mean
//! curve with `variance_scale` variance everywhere.
//!
//! ```rust
//! use gp_rs::prelude::*;
//!
//! let model = Gp::new().variance_scale(2.0).build()?;
//! let result = model.posterior(&[])?;
//!
//! assert!(result.mean.iter().all(|&m| m == 0.0));
//! # Result::<(), GpError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter | Default | Description |
//! |-----------|---------|-------------|
//! | `length_scale` | `1.0` | Kernel correlation length; larger values give smoother curves |
//! | `variance_scale` | `1.0` | Kernel marginal variance; vertical scale of the prior |
//! | `num_samples` | `0` | Posterior sample curves per call (at most 1000) |
//! | `default_noise_std` | `0.1` | Sampling noise floor when the observation set is empty |
//! | `credible_level` | `0.95` | Coverage of the lower/upper band |
//! | `seed` | fixed internal | Seed for the sample generator |
//!
//! ## Error Handling
//!
//! `build()` rejects non-physical hyperparameters and `posterior()`
//! rejects non-finite observations, each with a specific [`GpError`]
//! variant (re-exported in the prelude):
//!
//! ```rust
//! use gp_rs::prelude::*;
//!
//! let error = Gp::new().length_scale(-1.0).build().unwrap_err();
//! assert_eq!(error, GpError::InvalidLengthScale(-1.0));
//! # Result::<(), GpError>::Ok(())
//! ```
//!
//! A failed sampling stage is not an error: the result keeps its mean and
//! bound curves and records the failure in `sampling_error`.
//!
//! ## Reproducibility
//!
//! Sampling uses an explicit seeded generator. Without a seed, a fixed
//! internal default is used, so two calls with identical inputs return
//! identical results — sample curves included. Supply `.seed(...)` to
//! vary or pin the draws explicitly.
//!
//! ## Features
//!
//! - `std` (default): standard library support.
//! - `dev`: re-export internal layers under `internals` for integration
//!   tests and debugging.
//!
//! The crate is `no_std`-compatible (with `alloc`) when `std` is disabled.
//!
//! ## References
//!
//! - Rasmussen, C. E. & Williams, C. K. I. (2006). "Gaussian Processes for Machine Learning"
//! - MacKay, D. J. C. (1998). "Introduction to Gaussian Processes"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type (`GpError`) and the observation carrier
// (`Observation`).
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the RBF kernel, the fixed evaluation grid, kernel matrix
// assembly, and dense SPD linear algebra behind the `FloatLinalg` trait.
mod math;

// Layer 3: Algorithms - core GP computations.
//
// Contains closed-form posterior conditioning and Cholesky-based sample
// curve generation.
mod algorithms;

// Layer 4: Evaluation - uncertainty post-processing.
//
// Contains credible band construction from posterior summaries.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, the executor that runs one full posterior
// computation, and result assembly.
mod engine;

// High-level fluent API for Gaussian process regression.
//
// Provides the `Gp` builder for configuring a model and computing
// posteriors.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard Gaussian process prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use gp_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        evaluation_grid, CurvePoint, GaussianProcess, GpBuilder as Gp, GpError, GpResult,
        Observation, DEFAULT_SEED, GRID_SIZE, GRID_START, GRID_STEP,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation utilities.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal engine components.
    pub mod engine {
        pub use crate::engine::*;
    }
}
