//! Knot placement for the truncated power basis.
//!
//! ## Purpose
//!
//! This module partitions the observed predictor range into evenly spaced
//! knot locations. Each knot anchors one basis function.
//!
//! ## Design notes
//!
//! * **Spacing**: `step = (max - min) / (k - 1)`, knot `f` = `min + step * f`
//!   for `f` in `1..k`, giving `k - 1` knots.
//! * **Boundary knot**: The final knot is assigned `max` exactly, so rounding
//!   in `step * (k - 1)` never moves it off the data range.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Exactly `k - 1` knots for `k >= 2` and non-empty input.
//! * Knots are strictly increasing when `min(x) < max(x)`.
//! * Every knot lies in `(min(x), max(x)]`.
//!
//! ## Non-goals
//!
//! * This module does not place knots at quantiles or choose `k` automatically.
//! * This module does not validate `k` against the number of observations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Knot Generator
// ============================================================================

/// Evenly spaced knot placement over the predictor range.
pub struct KnotGenerator;

impl KnotGenerator {
    /// Generate `k - 1` evenly spaced knots over `[min(x), max(x)]`.
    ///
    /// The minimum itself is never a knot. For `k <= 1`, or an empty `x`,
    /// no knots are produced and the fit has no basis expansion.
    pub fn generate<T: Float>(x: &[T], k: usize) -> Vec<T> {
        let Some((min, max)) = Self::range(x) else {
            return Vec::new();
        };
        if k <= 1 {
            return Vec::new();
        }

        let intervals = k - 1;
        let step = (max - min) / T::from(intervals).unwrap_or_else(T::one);

        let mut knots = Vec::with_capacity(intervals);
        for f in 1..intervals {
            knots.push(min + step * T::from(f).unwrap_or_else(T::zero));
        }
        knots.push(max);

        knots
    }

    /// Minimum and maximum of `x`, or `None` when empty.
    pub fn range<T: Float>(x: &[T]) -> Option<(T, T)> {
        let first = *x.first()?;
        Some(
            x.iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}
