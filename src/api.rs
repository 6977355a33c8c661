//! High-level API for spline regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the single-call
//! [`fit`] function and the fluent [`SplineBuilder`] for configuring knot
//! count, polynomial order and optional outputs.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder hygiene is checked by `.build()`; data and
//!   parameter rules are checked, in order, by `.fit()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SplineBuilder`] via `Spline::new()`.
//! 2. Chain configuration methods (`.knots()`, `.degree()`, etc.).
//! 3. Call `.build()` to get a [`SplineRegression`], then `.fit(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SplineConfig, SplineExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::basis::truncated_power;
pub use crate::algorithms::coefficients::Coefficient;
pub use crate::engine::output::SplineResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::moments::mean;
pub use crate::primitives::errors::SplineError;

// ============================================================================
// Single-Call Entry Point
// ============================================================================

/// Fit a truncated power spline and return the fitted values.
///
/// `k` is the knot count (producing `k - 1` knots) and `l` the polynomial
/// order of every basis function. Returns the specific [`SplineError`] of the
/// first violated rule when the inputs are rejected.
///
/// ```
/// use spline_rs::prelude::*;
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let y = x.clone();
///
/// let fitted = fit(&x, &y, 3, 1)?;
/// assert_eq!(fitted.len(), 10);
/// assert!(fitted.iter().all(|v| v.is_finite()));
///
/// assert_eq!(
///     fit(&x[..4], &y[..4], 3, 1),
///     Err(SplineError::InsufficientData { x_len: 4, y_len: 4, min: 5 })
/// );
/// # Result::<(), SplineError>::Ok(())
/// ```
pub fn fit<T: Float + Debug + Send + Sync>(
    x: &[T],
    y: &[T],
    k: usize,
    l: usize,
) -> Result<Vec<T>, SplineError> {
    let config = SplineConfig {
        knots: k,
        degree: l,
        parallel: false,
    };
    SplineExecutor::run(x, y, &config).map(|out| out.fitted)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a spline regression.
#[derive(Debug, Clone, Default)]
pub struct SplineBuilder {
    /// Knot count `k` (default: 4).
    pub knots: Option<usize>,

    /// Polynomial order `l` (default: 3, cubic).
    pub degree: Option<usize>,

    /// Include residuals in output.
    pub return_residuals: Option<bool>,

    /// Include diagnostics in output.
    pub return_diagnostics: Option<bool>,

    /// Parallel execution hint (requires the `parallel` feature).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SplineBuilder {
    /// Default knot count.
    pub const DEFAULT_KNOTS: usize = 4;

    /// Default polynomial order.
    pub const DEFAULT_DEGREE: usize = 3;

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the knot count `k` (the fit uses `k - 1` knots).
    pub fn knots(mut self, k: usize) -> Self {
        if self.knots.is_some() {
            self.duplicate_param = Some("knots");
        }
        self.knots = Some(k);
        self
    }

    /// Set the polynomial order `l` of the basis functions, in `[1, 5]`.
    pub fn degree(mut self, l: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(l);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include RMSE, MAE, R^2 and residual SD in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Estimate basis columns in parallel when the `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Build the regression model.
    ///
    /// Data-dependent rules (including knot count and degree) are checked by
    /// [`SplineRegression::fit`], in their fixed order.
    pub fn build(self) -> Result<SplineRegression, SplineError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(SplineRegression {
            config: SplineConfig {
                knots: self.knots.unwrap_or(Self::DEFAULT_KNOTS),
                degree: self.degree.unwrap_or(Self::DEFAULT_DEGREE),
                parallel: self.parallel.unwrap_or(false),
            },
            return_residuals: self.return_residuals.unwrap_or(false),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Spline Regression
// ============================================================================

/// Configured spline regression, ready to fit data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplineRegression {
    config: SplineConfig,
    return_residuals: bool,
    return_diagnostics: bool,
}

impl SplineRegression {
    /// Knot count `k`.
    pub fn knots(&self) -> usize {
        self.config.knots
    }

    /// Polynomial order `l`.
    pub fn degree(&self) -> usize {
        self.config.degree
    }

    /// Fit the spline to `x` and `y`.
    pub fn fit<T: Float + Debug + Send + Sync>(
        &self,
        x: &[T],
        y: &[T],
    ) -> Result<SplineResult<T>, SplineError> {
        let out = SplineExecutor::run(x, y, &self.config)?;

        let needs_residuals = self.return_residuals || self.return_diagnostics;
        let residuals: Option<Vec<T>> = needs_residuals.then(|| {
            y.iter()
                .zip(out.fitted.iter())
                .map(|(&orig, &fitted)| orig - fitted)
                .collect()
        });

        let diagnostics = match (&residuals, self.return_diagnostics) {
            (Some(r), true) => {
                let parameters = out.coefficients.iter().filter(|c| c.is_estimated()).count();
                Some(Diagnostics::compute(y, &out.fitted, r, parameters))
            }
            _ => None,
        };

        Ok(SplineResult {
            x: x.to_vec(),
            y: out.fitted,
            knots: out.knots,
            coefficients: out.coefficients,
            degree: self.config.degree,
            residuals: residuals.filter(|_| self.return_residuals),
            diagnostics,
        })
    }
}
