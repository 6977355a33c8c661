//! Goodness-of-fit diagnostics for a spline fit.
//!
//! ## Purpose
//!
//! This module summarizes how well the fitted values track the response:
//! RMSE, MAE, R^2, and the residual standard deviation.
//!
//! ## Design notes
//!
//! * **Degrees of freedom**: The residual standard deviation divides by
//!   `n - p`, where `p` counts estimated (not inactive) coefficients.
//! * **Constant response**: With zero total variation, R^2 is 1 for an exact
//!   fit and 0 otherwise.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * RMSE, MAE and residual SD are >= 0.
//! * R^2 <= 1.
//!
//! ## Non-goals
//!
//! * This module does not compute information criteria or intervals.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{mean, sum_squared_deviations};

// ============================================================================
// Diagnostics
// ============================================================================

/// Fit quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Residual standard deviation, `sqrt(RSS / (n - p))`.
    pub residual_sd: T,

    /// Number of estimated coefficients `p`.
    pub parameters: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from the response, its fitted values and residuals.
    pub fn compute(y: &[T], fitted: &[T], residuals: &[T], parameters: usize) -> Self {
        let n = fitted.len().min(y.len());
        if n == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
                parameters,
            };
        }
        let n_t = T::from(n).unwrap_or_else(T::one);

        let rss = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        let abs_sum = residuals.iter().fold(T::zero(), |acc, &r| acc + r.abs());
        let tss = sum_squared_deviations(y, mean(y));

        let r_squared = if tss > T::zero() {
            T::one() - rss / tss
        } else if rss.is_zero() {
            T::one()
        } else {
            T::zero()
        };

        let dof = n.saturating_sub(parameters).max(1);
        let residual_sd = (rss / T::from(dof).unwrap_or_else(T::one)).sqrt();

        Self {
            rmse: (rss / n_t).sqrt(),
            mae: abs_sum / n_t,
            r_squared,
            residual_sd,
            parameters,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Diagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Spline Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)?;
        write!(f, "  Parameters:   {}", self.parameters)
    }
}
