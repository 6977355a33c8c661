//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the numerical stages of a spline fit:
//! - Knot placement over the predictor range
//! - Truncated power basis construction
//! - Per-basis-function slope estimation
//! - Additive prediction from basis values and coefficients
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

/// Evenly spaced knot placement.
pub mod knots;

/// Truncated power basis matrix.
pub mod basis;

/// Coefficient estimation per basis function.
pub mod coefficients;

/// Fitted values from basis and coefficients.
pub mod prediction;
