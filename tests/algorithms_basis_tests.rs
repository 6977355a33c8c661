//! Tests for truncated power basis construction.
//!
//! ## Test Organization
//!
//! 1. **Truncated Power Function** - Scalar evaluation
//! 2. **Basis Matrix** - Layout and values
//! 3. **Properties** - Non-negativity and onset at the knot value

use approx::assert_relative_eq;

use spline_rs::internals::algorithms::basis::{BasisMatrix, truncated_power};
use spline_rs::internals::algorithms::knots::KnotGenerator;

// ============================================================================
// Truncated Power Function Tests
// ============================================================================

#[test]
fn test_truncated_power_below_knot() {
    assert_eq!(truncated_power(1.0, 5.5, 1), 0.0);
    assert_eq!(truncated_power(5.4, 5.5, 3), 0.0);
}

#[test]
fn test_truncated_power_at_and_above_knot() {
    assert_eq!(truncated_power(5.5, 5.5, 1), 0.0);
    assert_relative_eq!(truncated_power(7.0, 5.5, 1), 1.5);
    assert_relative_eq!(truncated_power(7.0, 5.0, 3), 8.0);
    assert_relative_eq!(truncated_power(3.0, 1.0, 5), 32.0);
}

/// Orders past the `i32` range keep their magnitude instead of wrapping.
#[test]
fn test_truncated_power_huge_order() {
    let order = i32::MAX as usize + 1;
    assert_eq!(truncated_power(2.0, 1.0, order), 1.0);
    assert!(truncated_power(3.0_f64, 1.0, order).is_infinite());
    assert_eq!(truncated_power(1.5, 1.0, order), 0.0);
    assert_eq!(truncated_power(0.0, 1.0, order), 0.0);
}

/// Odd orders never go negative because the function is truncated at the knot.
#[test]
fn test_truncated_power_odd_order_nonnegative() {
    for order in [1, 3, 5] {
        assert_eq!(truncated_power(-4.0, -2.0, order), 0.0);
        assert!(truncated_power(-1.0, -2.0, order) > 0.0);
    }
}

// ============================================================================
// Basis Matrix Tests
// ============================================================================

#[test]
fn test_basis_matrix_linear_scenario() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let knots = vec![5.5, 10.0];
    let basis = BasisMatrix::build(&x, &knots, 1);

    assert_eq!(basis.n_points(), 10);
    assert_eq!(basis.n_knots(), 2);

    let expected_first = [0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.5, 2.5, 3.5, 4.5];
    assert_eq!(basis.column(0), &expected_first);

    // The boundary knot at max(x) vanishes everywhere on the data.
    assert!(basis.column(1).iter().all(|&v| v == 0.0));
}

#[test]
fn test_basis_matrix_get_matches_column() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let knots = vec![1.5, 3.0];
    let basis = BasisMatrix::build(&x, &knots, 2);

    for g in 0..basis.n_knots() {
        for i in 0..basis.n_points() {
            assert_eq!(basis.get(i, g), basis.column(g)[i]);
            assert_eq!(basis.get(i, g), truncated_power(x[i], knots[g], 2));
        }
    }
    assert_eq!(basis.columns().count(), 2);
}

#[test]
fn test_basis_matrix_empty_knots() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let basis = BasisMatrix::build(&x, &[], 3);

    assert_eq!(basis.n_points(), 5);
    assert_eq!(basis.n_knots(), 0);
    assert_eq!(basis.columns().count(), 0);
}

#[test]
#[should_panic]
fn test_basis_matrix_get_out_of_bounds() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let basis = BasisMatrix::build(&x, &[3.0], 1);
    let _ = basis.get(0, 1);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Non-negative everywhere, zero whenever x[i] < knot[g].
#[test]
fn test_basis_nonnegative_and_onset() {
    let x: Vec<f64> = (0..40).map(|i| ((i * 7) % 40) as f64 * 0.25 - 3.0).collect();

    for order in 1..=5 {
        let knots = KnotGenerator::generate(&x, 6);
        let basis = BasisMatrix::build(&x, &knots, order);

        for (g, &knot) in knots.iter().enumerate() {
            for (i, &xi) in x.iter().enumerate() {
                let v = basis.get(i, g);
                assert!(v >= 0.0);
                if xi < knot {
                    assert_eq!(v, 0.0);
                }
            }
        }
    }
}

/// Onset compares against the knot value, not its index.
#[test]
fn test_basis_uses_knot_value_not_index() {
    // Knot index 0 sits at 50.0: points below 50 must be zero even though
    // they are far above the index 0.
    let x = vec![10.0, 20.0, 30.0, 40.0, 60.0, 70.0];
    let basis = BasisMatrix::build(&x, &[50.0], 1);

    assert_eq!(basis.column(0), &[0.0, 0.0, 0.0, 0.0, 10.0, 20.0]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_basis_parallel_matches_sequential() {
    let x: Vec<f64> = (0..500).map(|i| (i as f64 * 0.013).cos() * 4.0).collect();
    let knots = KnotGenerator::generate(&x, 40);

    let sequential = BasisMatrix::build(&x, &knots, 3);
    let parallel = BasisMatrix::build_parallel(&x, &knots, 3);
    assert_eq!(sequential, parallel);
}
