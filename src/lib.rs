//! # spline-rs: Truncated Power Basis Spline Regression for Rust
//!
//! Fits a one-predictor, one-response regression curve with a truncated power
//! spline: knots are placed evenly across the predictor's range, one basis
//! function is built per knot, a coefficient is estimated for each basis
//! function, and the weighted basis values are summed into fitted values.
//!
//! ## How it works
//!
//! 1. **Validate** the inputs against an ordered list of rules.
//! 2. **Place knots**: `k - 1` evenly spaced knots over `(min(x), max(x)]`.
//! 3. **Build the basis**: `basis(i, g) = (x_i - knot_g)^l` if `x_i >= knot_g`, else `0`.
//! 4. **Estimate coefficients**: for each basis function separately, the
//!    least-squares slope of `y` on that basis column.
//! 5. **Predict**: `y_hat_i = Σ_g basis(i, g) * b_g`.
//!
//! The whole pipeline is a single deterministic pass: no iteration, no
//! randomness, and bit-identical results on repeated calls.
//!
//! ## Quick Start
//!
//! ### Single call
//!
//! ```rust
//! use spline_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let y = vec![1.2, 1.9, 3.1, 4.2, 4.8, 6.1, 7.0, 8.2, 8.9, 10.1];
//!
//! // 3 → knots at 5.5 and 10.0, linear pieces
//! let fitted = fit(&x, &y, 3, 1)?;
//! assert_eq!(fitted.len(), x.len());
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use spline_rs::prelude::*;
//!
//! let x: Vec<f64> = (0..30).map(|i| i as f64 * 0.5).collect();
//! let y: Vec<f64> = x.iter().map(|&v| (v * 0.4).sin() + 0.1 * v).collect();
//!
//! let model = Spline::new()
//!     .knots(5)              // 4 knots
//!     .degree(3)             // cubic basis functions
//!     .return_residuals()    // include y - y_hat
//!     .return_diagnostics()  // RMSE, MAE, R^2, residual SD
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! println!("{}", result);
//!
//! // Evaluate the fitted spline again inside the fitted range
//! let y_new = result.predict(&[1.25, 7.75])?;
//! assert_eq!(y_new.len(), 2);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every rejected input produces a specific [`SplineError`](prelude::SplineError)
//! variant identifying the violated rule, checked in this order:
//!
//! | Order | Rule                                   | Error                            |
//! |-------|----------------------------------------|----------------------------------|
//! | 1     | at least 5 points in `x` and `y`       | `InsufficientData`               |
//! | 2     | `k >= 2`, then `len(x) / k >= 3`       | `InvalidKnotCount`, `InsufficientDegreesOfFreedom` |
//! | 3     | `1 <= l <= 5`                          | `InvalidPolynomialDegree`        |
//! | 4     | `len(x) == len(y)`                     | `LengthMismatch`                 |
//! | 5     | all values finite                      | `InvalidNumericValue`            |
//!
//! A basis function with zero variance has an undefined coefficient and
//! aborts the fit with `DegenerateBasis`. The one exception is the boundary
//! knot at `max(x)`: its basis function is zero at every observed point, so it
//! is kept as [`Coefficient::Inactive`](prelude::Coefficient) and contributes
//! nothing to the fitted values.
//!
//! ```rust
//! use spline_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let y = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//!
//! match fit(&x, &y, 3, 1) {
//!     Err(SplineError::LengthMismatch { x_len, y_len }) => {
//!         assert_eq!((x_len, y_len), (10, 9));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default | Range/Options | Description                                |
//! |------------------------|---------|---------------|--------------------------------------------|
//! | **knots**              | 4       | [2, n/3]      | Knot count `k`; the fit uses `k - 1` knots |
//! | **degree**             | 3       | [1, 5]        | Polynomial order of each basis function    |
//! | **return_residuals**   | false   | true/false    | Include residuals in output                |
//! | **return_diagnostics** | false   | true/false    | Include RMSE, MAE, R^2, residual SD        |
//! | **parallel**           | false   | true/false    | Parallel basis/coefficients (`parallel` feature) |
//!
//! ## Features
//!
//! - `std` (default): standard library support. Without it the crate is
//!   `no_std` and only needs `alloc`.
//! - `parallel`: rayon-based parallelism across basis functions.
//!
//! ## Logging
//!
//! The crate emits `log` records (stage transitions at `trace`, fit summaries
//! and failures at `debug`). Install any `log`-compatible logger to see them.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Math - mean and centered sums.
mod math;

// Layer 3: Algorithms - knots, basis, coefficients, prediction.
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation, pipeline execution, result assembly.
mod engine;

// High-level API: `fit` and the `SplineBuilder`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard spline prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use spline_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Coefficient, Diagnostics, SplineBuilder as Spline, SplineError, SplineRegression,
        SplineResult, fit, mean, truncated_power,
    };
}

// ============================================================================
// Internal re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[doc(hidden)]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
