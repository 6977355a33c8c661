//! End-to-end tests through the public API.
//!
//! ## Test Organization
//!
//! 1. **Single Call** - `fit` on known data, error reporting
//! 2. **Builder** - Defaults, duplicate parameters, optional outputs
//! 3. **Fitted Model** - Re-evaluation, display
//! 4. **Precision and Determinism** - f32 input, repeated calls

use approx::assert_relative_eq;

use spline_rs::prelude::*;

fn linear_data() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    (x.clone(), x)
}

fn wave_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.2).collect();
    let y = x.iter().map(|&v| (v * 0.8).sin() + 0.05 * v).collect();
    (x, y)
}

// ============================================================================
// Single Call Tests
// ============================================================================

#[test]
fn test_fit_linear_data() {
    let (x, y) = linear_data();
    let fitted = fit(&x, &y, 3, 1).unwrap();

    assert_eq!(fitted.len(), 10);
    assert!(fitted[..5].iter().all(|&v| v == 0.0));
    assert_relative_eq!(fitted[9], 4.5 * 66.0 / 41.0, epsilon = 1e-12);
}

#[test]
fn test_fit_reports_first_error() {
    let (x, y) = linear_data();

    assert_eq!(
        fit(&x, &y[..9], 3, 1),
        Err(SplineError::LengthMismatch { x_len: 10, y_len: 9 })
    );
    assert_eq!(fit(&x, &y, 3, 6), Err(SplineError::InvalidPolynomialDegree(6)));
    assert_eq!(fit(&x, &y, 1, 1), Err(SplineError::InvalidKnotCount(1)));
    assert_eq!(
        fit(&x, &y, 4, 1),
        Err(SplineError::InsufficientDegreesOfFreedom { points: 10, knots: 4 })
    );
}

#[test]
fn test_fit_rejects_nan() {
    let (x, mut y) = linear_data();
    y[4] = f64::NAN;
    assert!(matches!(
        fit(&x, &y, 3, 1),
        Err(SplineError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let model = Spline::new().build().unwrap();
    assert_eq!(model.knots(), 4);
    assert_eq!(model.degree(), 3);

    let (x, y) = wave_data(30);
    let result = model.fit(&x, &y).unwrap();
    assert_eq!(result.knots.len(), 3);
    assert_eq!(result.degree, 3);
    assert!(result.residuals.is_none());
    assert!(!result.has_diagnostics());
}

#[test]
fn test_builder_matches_single_call() {
    let (x, y) = wave_data(40);
    let result = Spline::new().knots(5).degree(2).build().unwrap().fit(&x, &y).unwrap();
    let fitted = fit(&x, &y, 5, 2).unwrap();
    assert_eq!(result.y, fitted);
    assert_eq!(result.x, x);
}

#[test]
fn test_builder_duplicate_parameter() {
    assert_eq!(
        Spline::new().knots(3).knots(4).build(),
        Err(SplineError::DuplicateParameter { parameter: "knots" })
    );
    assert_eq!(
        Spline::new().degree(1).degree(2).build(),
        Err(SplineError::DuplicateParameter { parameter: "degree" })
    );
}

#[test]
fn test_builder_invalid_values_rejected_at_fit() {
    let model = Spline::new().knots(3).degree(0).build().unwrap();
    let (x, y) = linear_data();
    assert_eq!(model.fit(&x, &y), Err(SplineError::InvalidPolynomialDegree(0)));
}

#[test]
fn test_residuals_and_diagnostics() {
    let (x, y) = linear_data();
    let result = Spline::new()
        .knots(3)
        .degree(1)
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let residuals = result.residuals.as_ref().unwrap();
    for i in 0..10 {
        assert_relative_eq!(residuals[i], y[i] - result.y[i], epsilon = 1e-12);
    }

    let diag = result.diagnostics.unwrap();
    assert_eq!(diag.parameters, 1);
    assert_eq!(result.estimated_coefficients(), 1);
    assert!(diag.rmse > 0.0);
    assert!(diag.r_squared <= 1.0);
}

#[test]
fn test_diagnostics_without_residuals() {
    let (x, y) = wave_data(30);
    let result = Spline::new()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert!(result.has_diagnostics());
    assert!(result.residuals.is_none());
}

// ============================================================================
// Fitted Model Tests
// ============================================================================

#[test]
fn test_predict_training_points() {
    let (x, y) = wave_data(36);
    let result = Spline::new().knots(6).degree(3).build().unwrap().fit(&x, &y).unwrap();
    assert_eq!(result.predict(&x).unwrap(), result.y);
}

#[test]
fn test_predict_inside_range() {
    let (x, y) = linear_data();
    let result = Spline::new().knots(3).degree(1).build().unwrap().fit(&x, &y).unwrap();

    let values = result.predict(&[0.0, 5.5, 7.5]).unwrap();
    assert_eq!(values[0], 0.0);
    assert_eq!(values[1], 0.0);
    assert_relative_eq!(values[2], 2.0 * 66.0 / 41.0, epsilon = 1e-12);
}

#[test]
fn test_predict_beyond_range() {
    let (x, y) = linear_data();
    let result = Spline::new().knots(3).degree(1).build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(
        result.predict(&[11.0]),
        Err(SplineError::DegenerateBasis { knot_index: 1 })
    );
    assert!(matches!(
        result.predict(&[f64::NAN]),
        Err(SplineError::InvalidNumericValue(_))
    ));
}

#[test]
fn test_display() {
    let (x, y) = linear_data();
    let result = Spline::new()
        .knots(3)
        .degree(1)
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let text = result.to_string();

    assert!(text.contains("Summary:"));
    assert!(text.contains("Data points: 10"));
    assert!(text.contains("Spline Diagnostics:"));
    assert!(text.contains("Basis Functions:"));
    assert!(text.contains("inactive"));
    assert!(text.contains("Residual"));
}

#[test]
fn test_display_truncates_long_output() {
    let (x, y) = wave_data(50);
    let result = Spline::new().build().unwrap().fit(&x, &y).unwrap();
    assert!(result.to_string().contains("..."));
}

// ============================================================================
// Precision and Determinism Tests
// ============================================================================

#[test]
fn test_f32_input() {
    let x: Vec<f32> = (1..=10).map(|i| i as f32).collect();
    let fitted = fit(&x, &x, 3, 1).unwrap();
    assert_relative_eq!(fitted[9], 4.5 * 66.0 / 41.0, epsilon = 1e-4);
}

#[test]
fn test_repeated_calls_bit_identical() {
    let (x, y) = wave_data(45);
    let first = fit(&x, &y, 5, 3).unwrap();
    for _ in 0..5 {
        assert_eq!(fit(&x, &y, 5, 3).unwrap(), first);
    }
}

#[test]
fn test_mean_and_basis_exports() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(truncated_power(3.0, 1.0, 2), 4.0);
    assert_eq!(truncated_power(0.5, 1.0, 2), 0.0);
}
