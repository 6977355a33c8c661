//! Layer 1: Primitives
//!
//! Core building blocks shared by every other layer. This layer has zero
//! internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error type (`SplineError`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine (validator, executor, output)
//!   ↓
//! Layer 4: Evaluation (diagnostics)
//!   ↓
//! Layer 3: Algorithms (knots, basis, coefficients, prediction)
//!   ↓
//! Layer 2: Math (moments)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `SplineError` enum
/// - One variant per validation rule and numerical failure
pub mod errors;
