//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks for Gaussian
//! process regression:
//! - The squared-exponential (RBF) kernel
//! - The fixed evaluation grid
//! - Kernel matrix assembly and regularization helpers
//! - Dense SPD linear algebra (solve, Cholesky) behind a float trait
//!
//! These are reusable mathematical components with no engine-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squared-exponential (RBF) covariance function.
pub mod kernel;

/// Fixed evaluation grid for posterior curves.
pub mod grid;

/// Kernel matrix assembly and regularization helpers.
pub mod covariance;

/// Dense SPD linear algebra behind the `FloatLinalg` trait.
pub mod linalg;
