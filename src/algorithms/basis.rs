//! Truncated power basis construction.
//!
//! ## Purpose
//!
//! This module evaluates one truncated power basis function per knot at
//! every observed predictor value, producing the basis matrix consumed by
//! coefficient estimation and prediction.
//!
//! ## Design notes
//!
//! * **Layout**: Column-major. Each knot owns one contiguous column of
//!   `n_points` values, which is exactly the slice the estimator regresses on.
//! * **Allocation**: Storage is sized `n_points * n_knots` before any write.
//! * **Parallelism**: With the `parallel` feature, columns are filled
//!   concurrently. Columns share nothing, so results are bit-identical.
//!
//! ## Key concepts
//!
//! * **Truncated power function**: `(x - knot)^l` for `x >= knot`, else `0`.
//!   The comparison uses the predictor *value*, never its index.
//!
//! ## Invariants
//!
//! * Every basis value is >= 0.
//! * `basis(i, g) == 0` whenever `x[i] < knot[g]`.
//!
//! ## Non-goals
//!
//! * This module does not add an intercept or global polynomial terms.
//! * This module does not use B-spline or natural spline bases.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// Truncated Power Function
// ============================================================================

/// One-sided truncated power function `(x - knot)_+^order`.
///
/// ```
/// use spline_rs::prelude::*;
///
/// assert_eq!(truncated_power(7.0, 5.5, 1), 1.5);
/// assert_eq!(truncated_power(7.0, 5.0, 2), 4.0);
/// assert_eq!(truncated_power(3.0, 5.5, 3), 0.0);
/// ```
#[inline]
pub fn truncated_power<T: Float>(x: T, knot: T, order: usize) -> T {
    if x >= knot {
        let base = x - knot;
        match i32::try_from(order) {
            Ok(n) => base.powi(n),
            Err(_) => base.powf(T::from(order).unwrap_or_else(T::infinity)),
        }
    } else {
        T::zero()
    }
}

// ============================================================================
// Basis Matrix
// ============================================================================

/// Basis values for every (point, knot) pair, stored column by column.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisMatrix<T> {
    values: Vec<T>,
    n_points: usize,
    n_knots: usize,
}

impl<T: Float> BasisMatrix<T> {
    /// Evaluate the truncated power basis of `order` at every `x` for every knot.
    pub fn build(x: &[T], knots: &[T], order: usize) -> Self {
        let mut basis = Self::zeroed(x.len(), knots.len());
        if basis.values.is_empty() {
            return basis;
        }

        for (column, &knot) in basis.values.chunks_mut(x.len()).zip(knots) {
            Self::fill_column(column, x, knot, order);
        }

        basis
    }

    /// Allocate an all-zero matrix of the final size.
    fn zeroed(n_points: usize, n_knots: usize) -> Self {
        Self {
            values: vec![T::zero(); n_points * n_knots],
            n_points,
            n_knots,
        }
    }

    #[inline]
    fn fill_column(column: &mut [T], x: &[T], knot: T, order: usize) {
        for (out, &xi) in column.iter_mut().zip(x) {
            *out = truncated_power(xi, knot, order);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of observations (rows).
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of knots (columns).
    pub fn n_knots(&self) -> usize {
        self.n_knots
    }

    /// Basis value of point `i` for knot `g`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_points()` or `g >= n_knots()`.
    #[inline]
    pub fn get(&self, i: usize, g: usize) -> T {
        assert!(i < self.n_points && g < self.n_knots);
        self.values[g * self.n_points + i]
    }

    /// Values of the basis function anchored at knot `g`, one per point.
    ///
    /// # Panics
    ///
    /// Panics if `g >= n_knots()`.
    #[inline]
    pub fn column(&self, g: usize) -> &[T] {
        let start = g * self.n_points;
        &self.values[start..start + self.n_points]
    }

    /// Iterate over the columns in knot order.
    pub fn columns(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.n_knots).map(move |g| self.column(g))
    }
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> BasisMatrix<T> {
    /// Same as [`BasisMatrix::build`], filling columns concurrently.
    pub fn build_parallel(x: &[T], knots: &[T], order: usize) -> Self {
        let mut basis = Self::zeroed(x.len(), knots.len());
        if basis.values.is_empty() {
            return basis;
        }

        basis
            .values
            .par_chunks_mut(x.len())
            .zip(knots.par_iter())
            .for_each(|(column, &knot)| Self::fill_column(column, x, knot, order));

        basis
    }
}
