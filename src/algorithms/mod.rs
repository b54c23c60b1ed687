//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core Gaussian process computations on top of
//! the math layer:
//! - Closed-form posterior conditioning (mean, covariance, deviations)
//! - Correlated sample curve generation via Cholesky factorization
//!
//! Inputs are assumed validated; validation lives in the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Closed-form Gaussian process posterior.
pub mod posterior;

/// Posterior sample curve generation.
pub mod sampling;
