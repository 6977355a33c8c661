//! Output types for spline fits.
//!
//! ## Purpose
//!
//! This module defines [`SplineResult`], the fitted-model object returned by
//! a successful fit. It carries the fitted values together with the knots and
//! coefficients that produced them, so the spline can be evaluated again at
//! new predictor values.
//!
//! ## Design notes
//!
//! * Optional outputs (residuals, diagnostics) use `Option` and are only
//!   populated when requested on the builder.
//! * Implements `Display` for a human-readable summary.
//! * x-values are kept in input order; no sorting is ever applied.
//!
//! ## Invariants
//!
//! * `x`, `y` and `residuals` (when present) have the same length.
//! * `coefficients.len() == knots.len()`.
//!
//! ## Non-goals
//!
//! * This module does not provide serialization or persistence.
//! * This module does not plot the fitted curve.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::coefficients::Coefficient;
use crate::algorithms::prediction::Predictor;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::SplineError;

// ============================================================================
// Result Structure
// ============================================================================

/// Fitted truncated power spline.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineResult<T> {
    /// Predictor values, in input order.
    pub x: Vec<T>,

    /// Fitted response values, one per predictor value.
    pub y: Vec<T>,

    /// Knot positions.
    pub knots: Vec<T>,

    /// Coefficient of each basis function, in knot order.
    pub coefficients: Vec<Coefficient<T>>,

    /// Polynomial order of the basis.
    pub degree: usize,

    /// Residuals `y_i - y_hat_i`.
    pub residuals: Option<Vec<T>>,

    /// Fit quality metrics.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> SplineResult<T> {
    /// Evaluate the fitted spline at new predictor values.
    ///
    /// Fails with `DegenerateBasis` if a point lies where a basis function
    /// with an undefined coefficient is non-zero (beyond the fitted range).
    pub fn predict(&self, x_new: &[T]) -> Result<Vec<T>, SplineError> {
        Validator::validate_finite(x_new, "x_new")?;
        Predictor::evaluate(x_new, &self.knots, &self.coefficients, self.degree)
    }

    /// Number of basis functions with an estimated coefficient.
    pub fn estimated_coefficients(&self) -> usize {
        self.coefficients.iter().filter(|c| c.is_estimated()).count()
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for SplineResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Knots: {}", self.knots.len())?;
        writeln!(f, "  Degree: {}", self.degree)?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
            writeln!(f)?;
        }

        writeln!(f, "Basis Functions:")?;
        writeln!(f, "{:>6} {:>12} {:>14}", "Index", "Knot", "Coefficient")?;
        writeln!(f, "{:-<34}", "")?;
        for (g, (knot, coefficient)) in self.knots.iter().zip(&self.coefficients).enumerate() {
            match coefficient {
                Coefficient::Estimated(b) => writeln!(f, "{:>6} {:>12.4} {:>14.6}", g, knot, b)?,
                Coefficient::Inactive => {
                    writeln!(f, "{:>6} {:>12.4} {:>14}", g, knot, "inactive")?
                }
            }
        }
        writeln!(f)?;

        writeln!(f, "Fitted Data:")?;
        let has_resid = self.residuals.is_some();
        write!(f, "{:>8} {:>12}", "X", "Y_fitted")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;
        writeln!(f, "{:-<width$}", "", width = if has_resid { 34 } else { 21 })?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.x.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
