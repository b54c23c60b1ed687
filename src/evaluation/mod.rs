//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns posterior summaries into caller-facing uncertainty
//! measures:
//! - Credible bands (`mean ± z·std_dev`) at a configurable coverage level
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Credible bands for posterior curves.
pub mod intervals;
