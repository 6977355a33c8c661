//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes a completed fit into quality metrics.
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

/// RMSE, MAE, R^2 and residual standard deviation.
pub mod diagnostics;
