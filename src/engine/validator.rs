//! Input validation for spline configuration and data.
//!
//! ## Purpose
//!
//! This module decides whether a fit may run. It checks data sufficiency,
//! knot and degree parameters, matching lengths, and finite values before any
//! knot, basis or coefficient is computed.
//!
//! ## Design notes
//!
//! * **Ordered rules**: The checks form an explicit list evaluated in order.
//! * **Fail-Fast**: Validation stops at the first violated rule and returns
//!   its specific error.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Rule order**:
//!   1. At least 5 points in `x` and in `y`.
//!   2. Knot count: `k >= 2`, then `len(x) / k >= 3` (degrees of freedom).
//!   3. Polynomial order in `[1, 5]`.
//!   4. `len(x) == len(y)`.
//!   5. All values finite.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SplineError;

// ============================================================================
// Constants
// ============================================================================

/// Minimum number of observations for a meaningful basis.
pub const MIN_POINTS: usize = 5;

/// Minimum number of observations per knot.
pub const MIN_POINTS_PER_KNOT: f64 = 3.0;

/// Smallest supported polynomial order.
pub const MIN_DEGREE: usize = 1;

/// Largest supported polynomial order.
pub const MAX_DEGREE: usize = 5;

// ============================================================================
// Fit Inputs
// ============================================================================

/// Everything a fit is validated against.
#[derive(Debug, Clone, Copy)]
pub struct FitInputs<'a, T> {
    /// Predictor values.
    pub x: &'a [T],
    /// Response values.
    pub y: &'a [T],
    /// Knot count `k`.
    pub knots: usize,
    /// Polynomial order `l`.
    pub degree: usize,
}

/// A single validation rule.
pub type Rule<T> = fn(&FitInputs<'_, T>) -> Result<(), SplineError>;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spline configuration and input data.
///
/// All methods return `Result<(), SplineError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Rule List
    // ========================================================================

    /// The validation rules, in evaluation order.
    pub fn rules<T: Float>() -> [Rule<T>; 5] {
        [
            Self::check_sufficient_data,
            Self::check_degrees_of_freedom,
            Self::check_polynomial_degree,
            Self::check_lengths,
            Self::check_finite,
        ]
    }

    /// Run every rule in order, returning the first failure.
    pub fn validate<T: Float>(inputs: &FitInputs<'_, T>) -> Result<(), SplineError> {
        Self::rules::<T>()
            .iter()
            .try_for_each(|rule| rule(inputs))
    }

    /// Validate raw fit arguments.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        knots: usize,
        degree: usize,
    ) -> Result<(), SplineError> {
        Self::validate(&FitInputs { x, y, knots, degree })
    }

    // ========================================================================
    // Individual Rules
    // ========================================================================

    /// Rule 1: enough observations in both sequences.
    pub fn check_sufficient_data<T: Float>(inputs: &FitInputs<'_, T>) -> Result<(), SplineError> {
        if inputs.x.len() < MIN_POINTS || inputs.y.len() < MIN_POINTS {
            return Err(SplineError::InsufficientData {
                x_len: inputs.x.len(),
                y_len: inputs.y.len(),
                min: MIN_POINTS,
            });
        }
        Ok(())
    }

    /// Rule 2: a usable knot count with at least 3 points per knot.
    pub fn check_degrees_of_freedom<T: Float>(
        inputs: &FitInputs<'_, T>,
    ) -> Result<(), SplineError> {
        if inputs.knots < 2 {
            return Err(SplineError::InvalidKnotCount(inputs.knots));
        }

        let ratio = inputs.x.len() as f64 / inputs.knots as f64;
        if ratio < MIN_POINTS_PER_KNOT {
            return Err(SplineError::InsufficientDegreesOfFreedom {
                points: inputs.x.len(),
                knots: inputs.knots,
            });
        }
        Ok(())
    }

    /// Rule 3: polynomial order in `[1, 5]`.
    pub fn check_polynomial_degree<T: Float>(
        inputs: &FitInputs<'_, T>,
    ) -> Result<(), SplineError> {
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&inputs.degree) {
            return Err(SplineError::InvalidPolynomialDegree(inputs.degree));
        }
        Ok(())
    }

    /// Rule 4: predictor and response of equal length.
    pub fn check_lengths<T: Float>(inputs: &FitInputs<'_, T>) -> Result<(), SplineError> {
        if inputs.x.len() != inputs.y.len() {
            return Err(SplineError::LengthMismatch {
                x_len: inputs.x.len(),
                y_len: inputs.y.len(),
            });
        }
        Ok(())
    }

    /// Rule 5: no NaN or infinite values.
    pub fn check_finite<T: Float>(inputs: &FitInputs<'_, T>) -> Result<(), SplineError> {
        Self::validate_finite(inputs.x, "x")?;
        Self::validate_finite(inputs.y, "y")
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Validate that every value of a named slice is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), SplineError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(SplineError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SplineError> {
        if let Some(param) = duplicate_param {
            return Err(SplineError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
