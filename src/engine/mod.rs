//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer gates and orchestrates a fit:
//! - Ordered input validation
//! - The single-pass fitting pipeline and its stage tracking
//! - The fitted-model result type
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

/// Ordered validation rules.
pub mod validator;

/// Pipeline execution.
pub mod executor;

/// Result structure.
pub mod output;
