//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the spline
//! pipeline:
//! - Arithmetic mean
//! - Centered sums for the simple-regression slope
//!
//! These are reusable building blocks with no algorithm-specific logic.
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

/// Mean and centered sums.
pub mod moments;
