//! Error types for spline regression.
//!
//! ## Purpose
//!
//! This module defines [`SplineError`], the single error type returned by
//! every fallible operation in the crate. Each variant identifies exactly one
//! violated rule so callers can branch on the failure kind instead of parsing
//! messages.
//!
//! ## Design notes
//!
//! * **Structured**: Variants carry the offending values (lengths, counts, indices).
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` only with `std`.
//! * **Comparable**: `Clone + PartialEq` so tests can assert on exact errors.
//!
//! ## Non-goals
//!
//! * This module does not decide when an error is raised (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while validating inputs or fitting a spline.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Fewer observations than the minimum required to build a basis.
    InsufficientData {
        /// Number of predictor values supplied.
        x_len: usize,
        /// Number of response values supplied.
        y_len: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Knot count that cannot produce a basis expansion.
    InvalidKnotCount(usize),

    /// Too many knots for the number of observations.
    InsufficientDegreesOfFreedom {
        /// Number of observations.
        points: usize,
        /// Requested knot count.
        knots: usize,
    },

    /// Polynomial order outside the supported range.
    InvalidPolynomialDegree(usize),

    /// Predictor and response have different lengths.
    LengthMismatch {
        /// Number of predictor values.
        x_len: usize,
        /// Number of response values.
        y_len: usize,
    },

    /// Non-finite value in the input or in a computed quantity.
    InvalidNumericValue(String),

    /// A basis function has zero variance, so its coefficient is undefined.
    DegenerateBasis {
        /// Index of the knot anchoring the degenerate basis function.
        knot_index: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { x_len, y_len, min } => write!(
                f,
                "Insufficient data: x has {} points, y has {} (need at least {})",
                x_len, y_len, min
            ),
            Self::InvalidKnotCount(k) => {
                write!(f, "Invalid knot count: {} (must be at least 2)", k)
            }
            Self::InsufficientDegreesOfFreedom { points, knots } => write!(
                f,
                "Insufficient degrees of freedom: {} points for {} knots (need at least 3 points per knot)",
                points, knots
            ),
            Self::InvalidPolynomialDegree(l) => write!(
                f,
                "Invalid polynomial degree: {} (must be an integer in [1, 5])",
                l
            ),
            Self::LengthMismatch { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            Self::DegenerateBasis { knot_index } => write!(
                f,
                "Degenerate basis: basis function for knot {} has zero variance",
                knot_index
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SplineError {}
