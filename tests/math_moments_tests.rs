//! Tests for mean and centered sums.
//!
//! ## Test Organization
//!
//! 1. **Mean** - Basic values, precision types, empty input
//! 2. **Centered Sums** - Squared and cross deviations

use approx::assert_relative_eq;

use spline_rs::internals::math::moments::{
    mean, sum_cross_deviations, sum_squared_deviations, sum_squares,
};

// ============================================================================
// Mean Tests
// ============================================================================

#[test]
fn test_mean_basic() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    assert_relative_eq!(mean(&[-2.0, 2.0]), 0.0);
    assert_relative_eq!(mean(&[7.5]), 7.5);
}

#[test]
fn test_mean_f32() {
    let values: [f32; 4] = [1.0, 2.0, 3.0, 6.0];
    assert_relative_eq!(mean(&values), 3.0_f32);
}

/// The empty mean is defined as zero rather than NaN.
#[test]
fn test_mean_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(mean(&empty), 0.0);
}

#[test]
fn test_mean_matches_prelude_export() {
    let values = [0.5, 1.5, 2.5, 3.5, 4.5, 0.0, 0.0, 0.0, 0.0, 0.0];
    assert_eq!(mean(&values), spline_rs::prelude::mean(&values));
    assert_relative_eq!(mean(&values), 1.25);
}

// ============================================================================
// Centered Sum Tests
// ============================================================================

#[test]
fn test_sum_squared_deviations() {
    // Deviations from 3: [-2, -1, 0, 1, 2] → 4 + 1 + 0 + 1 + 4
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(sum_squared_deviations(&values, 3.0), 10.0);
    assert_relative_eq!(sum_squared_deviations(&values, 0.0), sum_squares(&values));
}

#[test]
fn test_sum_squared_deviations_constant() {
    let values = [4.0; 6];
    assert_eq!(sum_squared_deviations(&values, 4.0), 0.0);
}

#[test]
fn test_sum_cross_deviations() {
    let a = [1.0, 2.0, 3.0];
    let b = [2.0, 4.0, 6.0];
    // (-1)(-2) + 0 + (1)(2) = 4
    assert_relative_eq!(sum_cross_deviations(&a, 2.0, &b, 4.0), 4.0);

    // Anti-correlated
    let c = [6.0, 4.0, 2.0];
    assert_relative_eq!(sum_cross_deviations(&a, 2.0, &c, 4.0), -4.0);
}

/// Paired sums only consume the common prefix.
#[test]
fn test_sum_cross_deviations_uneven_lengths() {
    let a = [1.0, 2.0, 3.0, 100.0];
    let b = [1.0, 2.0, 3.0];
    assert_relative_eq!(sum_cross_deviations(&a, 2.0, &b, 2.0), 2.0);
}
