//! Per-basis-function coefficient estimation.
//!
//! ## Purpose
//!
//! This module derives one scalar coefficient per basis function by regressing
//! the response on that basis column alone, using the ordinary least-squares
//! slope:
//!
//! ```text
//! b = Σ (basis_i - mean(basis)) (y_i - mean(y)) / Σ (basis_i - mean(basis))²
//! ```
//!
//! ## Design notes
//!
//! * **Marginal**: Each column is estimated independently. This is not a joint
//!   multiple-regression solve; no column controls for the others.
//! * **No silent defaults**: A zero-variance column is reported as
//!   `DegenerateBasis`, never replaced by zero or infinity.
//! * **Boundary knot**: The last knot sits at `max(x)`, so its basis function
//!   vanishes at every observed point. When the caller identifies it as the
//!   boundary column, it is recorded as [`Coefficient::Inactive`].
//! * **Parallelism**: With the `parallel` feature, columns are estimated
//!   concurrently and the first failure by knot index is reported.
//!
//! ## Invariants
//!
//! * One [`Coefficient`] per knot, in knot order.
//! * Every estimated coefficient is finite.
//!
//! ## Non-goals
//!
//! * This module does not estimate an intercept.
//! * This module does not compute standard errors for coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::basis::BasisMatrix;
use crate::math::moments::{mean, sum_cross_deviations, sum_squared_deviations, sum_squares};
use crate::primitives::errors::SplineError;

// ============================================================================
// Coefficient
// ============================================================================

/// Coefficient attached to one basis function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficient<T> {
    /// Slope estimated from the basis column.
    Estimated(T),

    /// The basis function is identically zero on the observed data, so its
    /// coefficient is undefined and it contributes nothing to fitted values.
    Inactive,
}

impl<T: Copy> Coefficient<T> {
    /// The estimated value, or `None` for an inactive basis function.
    pub fn value(&self) -> Option<T> {
        match self {
            Self::Estimated(b) => Some(*b),
            Self::Inactive => None,
        }
    }

    /// Whether a slope was estimated.
    pub fn is_estimated(&self) -> bool {
        matches!(self, Self::Estimated(_))
    }
}

// ============================================================================
// Coefficient Estimator
// ============================================================================

/// Simple-regression slope estimator applied column by column.
pub struct CoefficientEstimator;

impl CoefficientEstimator {
    /// Estimate the slope of `y` regressed on a single basis column.
    ///
    /// `column` and `y` must have the same length. `knot_index` only labels
    /// the error.
    pub fn estimate<T: Float>(
        column: &[T],
        y: &[T],
        knot_index: usize,
    ) -> Result<T, SplineError> {
        let basis_mean = mean(column);
        let y_mean = mean(y);

        let denominator = sum_squared_deviations(column, basis_mean);
        if !denominator.is_finite() {
            return Err(SplineError::InvalidNumericValue(format!(
                "basis variance[{}]={}",
                knot_index,
                denominator.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if Self::is_zero_variance(column, denominator) {
            return Err(SplineError::DegenerateBasis { knot_index });
        }

        let numerator = sum_cross_deviations(column, basis_mean, y, y_mean);
        let slope = numerator / denominator;
        if !slope.is_finite() {
            return Err(SplineError::InvalidNumericValue(format!(
                "coefficient[{}]={}",
                knot_index,
                slope.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(slope)
    }

    /// Estimate one coefficient per column of `basis`.
    ///
    /// `boundary` names the column anchored at `max(x)`, if any. That column
    /// is allowed to vanish on the data and becomes [`Coefficient::Inactive`];
    /// any other degenerate column aborts with `DegenerateBasis`.
    pub fn estimate_all<T: Float>(
        basis: &BasisMatrix<T>,
        y: &[T],
        boundary: Option<usize>,
    ) -> Result<Vec<Coefficient<T>>, SplineError> {
        let mut coefficients = Vec::with_capacity(basis.n_knots());
        for (g, column) in basis.columns().enumerate() {
            coefficients.push(Self::estimate_column(column, y, g, boundary)?);
        }
        Ok(coefficients)
    }

    fn estimate_column<T: Float>(
        column: &[T],
        y: &[T],
        knot_index: usize,
        boundary: Option<usize>,
    ) -> Result<Coefficient<T>, SplineError> {
        match Self::estimate(column, y, knot_index) {
            Ok(b) => Ok(Coefficient::Estimated(b)),
            Err(SplineError::DegenerateBasis { .. })
                if boundary == Some(knot_index) && column.iter().all(|v| v.is_zero()) =>
            {
                Ok(Coefficient::Inactive)
            }
            Err(err) => Err(err),
        }
    }

    /// Zero variance, allowing for rounding in the mean of a constant column.
    ///
    /// A constant column `c` has an exact variance of zero, but `mean` may
    /// differ from `c` in the last bit, leaving a denominator around
    /// `n * (c * eps)²`. That is far below `eps * Σ c²`.
    #[inline]
    fn is_zero_variance<T: Float>(column: &[T], denominator: T) -> bool {
        denominator <= T::epsilon() * sum_squares(column)
    }
}

#[cfg(feature = "parallel")]
impl CoefficientEstimator {
    /// Same as [`CoefficientEstimator::estimate_all`], estimating columns concurrently.
    pub fn estimate_all_parallel<T: Float + Send + Sync>(
        basis: &BasisMatrix<T>,
        y: &[T],
        boundary: Option<usize>,
    ) -> Result<Vec<Coefficient<T>>, SplineError> {
        let results: Vec<Result<Coefficient<T>, SplineError>> = (0..basis.n_knots())
            .into_par_iter()
            .map(|g| Self::estimate_column(basis.column(g), y, g, boundary))
            .collect();

        // Sequential collect keeps the lowest failing knot index.
        results.into_iter().collect()
    }
}
