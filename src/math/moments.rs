//! Sample moments used by coefficient estimation.
//!
//! ## Purpose
//!
//! This module provides the arithmetic mean and the centered sums that make
//! up the simple-regression slope: the sum of squared deviations and the sum
//! of cross deviations between two sequences.
//!
//! ## Design notes
//!
//! * **Order**: Sums are accumulated left to right, so results are bit-identical
//!   across runs and independent of any outer parallelism.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `sum_squared_deviations` is >= 0 for finite input.
//! * Paired sums only consume the common prefix of their two inputs.
//!
//! ## Non-goals
//!
//! * This module does not provide compensated (Kahan) summation.
//! * This module does not handle non-finite values (NaN/Inf).

// External dependencies
use num_traits::Float;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of a slice.
///
/// Returns zero for an empty slice.
///
/// ```
/// use spline_rs::prelude::*;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// ```
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }

    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}

// ============================================================================
// Centered Sums
// ============================================================================

/// Sum of squared deviations from `center`: `Σ (v_i - center)²`.
#[inline]
pub fn sum_squared_deviations<T: Float>(values: &[T], center: T) -> T {
    values.iter().fold(T::zero(), |acc, &v| {
        let d = v - center;
        acc + d * d
    })
}

/// Sum of cross deviations: `Σ (a_i - center_a)(b_i - center_b)`.
#[inline]
pub fn sum_cross_deviations<T: Float>(a: &[T], center_a: T, b: &[T], center_b: T) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + (ai - center_a) * (bi - center_b))
}

/// Sum of squares: `Σ v_i²`.
#[inline]
pub fn sum_squares<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v * v)
}
