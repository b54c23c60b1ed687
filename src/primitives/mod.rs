//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer defines the foundational vocabulary shared by every other
//! layer:
//! - The error type for validation, numeric, and sampling failures
//! - The observation carrier for posterior conditioning
//!
//! It has no dependencies on other layers.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for Gaussian process operations.
pub mod errors;

/// Observed data points for posterior conditioning.
pub mod observation;
