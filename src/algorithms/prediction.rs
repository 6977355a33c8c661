//! Spline evaluation from basis values and coefficients.
//!
//! ## Purpose
//!
//! This module combines basis values with their coefficients into fitted
//! response values: `fitted[i] = Σ_g basis(i, g) * coefficient(g)`.
//!
//! ## Design notes
//!
//! * **Order**: Contributions are added in ascending knot order for every
//!   point, so the output is deterministic.
//! * **Inactive terms**: An inactive basis function is zero at every observed
//!   point and is skipped. Evaluating at new points where it is non-zero is an
//!   error, because its coefficient is undefined.
//!
//! ## Invariants
//!
//! * Output length equals the number of evaluated points, in input order.
//!
//! ## Non-goals
//!
//! * This module does not extrapolate with made-up coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::basis::{BasisMatrix, truncated_power};
use crate::algorithms::coefficients::Coefficient;
use crate::primitives::errors::SplineError;

// ============================================================================
// Predictor
// ============================================================================

/// Additive combination of basis-function contributions.
pub struct Predictor;

impl Predictor {
    /// Fitted values at the points the basis was built on.
    ///
    /// `coefficients` must hold one entry per basis column.
    pub fn predict<T: Float>(basis: &BasisMatrix<T>, coefficients: &[Coefficient<T>]) -> Vec<T> {
        let mut fitted = vec![T::zero(); basis.n_points()];

        for (column, coefficient) in basis.columns().zip(coefficients) {
            let Coefficient::Estimated(b) = *coefficient else {
                continue;
            };
            for (out, &value) in fitted.iter_mut().zip(column) {
                *out = *out + value * b;
            }
        }

        fitted
    }

    /// Evaluate a fitted spline at new predictor values.
    pub fn evaluate<T: Float>(
        x_new: &[T],
        knots: &[T],
        coefficients: &[Coefficient<T>],
        order: usize,
    ) -> Result<Vec<T>, SplineError> {
        let mut out = Vec::with_capacity(x_new.len());

        for &xi in x_new {
            let mut value = T::zero();
            for (g, (&knot, coefficient)) in knots.iter().zip(coefficients).enumerate() {
                let term = truncated_power(xi, knot, order);
                match *coefficient {
                    Coefficient::Estimated(b) => value = value + term * b,
                    Coefficient::Inactive if term.is_zero() => {}
                    Coefficient::Inactive => {
                        return Err(SplineError::DegenerateBasis { knot_index: g });
                    }
                }
            }
            out.push(value);
        }

        Ok(out)
    }
}
