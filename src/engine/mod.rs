//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer coordinates a complete posterior computation:
//! - Fail-fast validation of hyperparameters and observations
//! - An executor that runs conditioning, banding, and sampling
//! - The public result carrier with curve pairing and display
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for configuration and data.
pub mod validator;

/// Execution engine for posterior computations.
pub mod executor;

/// Result types for posterior computations.
pub mod output;
