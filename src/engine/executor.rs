//! Execution engine for spline fitting.
//!
//! ## Purpose
//!
//! This module runs the fitting pipeline in a single deterministic pass:
//! validation, knot placement, basis construction, coefficient estimation and
//! prediction. Each stage consumes the complete output of the previous one.
//!
//! ## Design notes
//!
//! * **Linear state progression**: [`FitStage`] advances
//!   `Unvalidated → Validated → KnotsComputed → BasisComputed →
//!   CoefficientsComputed → Predicted`. There is no retry or branch back.
//! * **Fail-Fast**: Any error terminates the run; the stage it happened in is
//!   logged and the error is returned unchanged.
//! * **Parallelism**: With the `parallel` feature and `parallel = true`, basis
//!   construction and coefficient estimation run across knots concurrently.
//!   Without the feature the hint is ignored.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * No derived structure is allocated before validation succeeds.
//! * Output vectors have the same length and order as the input data.
//!
//! ## Non-goals
//!
//! * This module does not format results (see `engine::output`).
//! * This module does not compute diagnostics (see `evaluation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::basis::BasisMatrix;
use crate::algorithms::coefficients::{Coefficient, CoefficientEstimator};
use crate::algorithms::knots::KnotGenerator;
use crate::algorithms::prediction::Predictor;
use crate::engine::validator::{FitInputs, Validator};
use crate::primitives::errors::SplineError;

// ============================================================================
// Fit Stage
// ============================================================================

/// Stage reached by a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FitStage {
    /// Inputs received, nothing checked yet.
    #[default]
    Unvalidated,
    /// All validation rules passed.
    Validated,
    /// Knot positions placed.
    KnotsComputed,
    /// Basis matrix built.
    BasisComputed,
    /// One coefficient per basis function.
    CoefficientsComputed,
    /// Fitted values produced.
    Predicted,
}

impl fmt::Display for FitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unvalidated => "unvalidated",
            Self::Validated => "validated",
            Self::KnotsComputed => "knots computed",
            Self::BasisComputed => "basis computed",
            Self::CoefficientsComputed => "coefficients computed",
            Self::Predicted => "predicted",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplineConfig {
    /// Knot count `k`.
    pub knots: usize,

    /// Polynomial order `l`.
    pub degree: usize,

    /// Parallel execution hint.
    pub parallel: bool,
}

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Knot positions.
    pub knots: Vec<T>,

    /// One coefficient per knot.
    pub coefficients: Vec<Coefficient<T>>,

    /// Fitted values, one per input point.
    pub fitted: Vec<T>,

    /// Final stage reached (always `Predicted`).
    pub stage: FitStage,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates the spline fitting pipeline.
pub struct SplineExecutor;

impl SplineExecutor {
    /// Run the full pipeline on `x` and `y`.
    pub fn run<T: Float + Debug + Send + Sync>(
        x: &[T],
        y: &[T],
        config: &SplineConfig,
    ) -> Result<ExecutorOutput<T>, SplineError> {
        let mut stage = FitStage::Unvalidated;
        let result = Self::run_stages(x, y, config, &mut stage);

        match &result {
            Ok(out) => log::debug!(
                "spline fit: {} points, {} knots, degree {}, {} estimated coefficients",
                x.len(),
                out.knots.len(),
                config.degree,
                out.coefficients.iter().filter(|c| c.is_estimated()).count()
            ),
            Err(err) => log::debug!("spline fit failed after stage '{}': {}", stage, err),
        }

        result
    }

    fn run_stages<T: Float + Debug + Send + Sync>(
        x: &[T],
        y: &[T],
        config: &SplineConfig,
        stage: &mut FitStage,
    ) -> Result<ExecutorOutput<T>, SplineError> {
        Validator::validate(&FitInputs {
            x,
            y,
            knots: config.knots,
            degree: config.degree,
        })?;
        Self::advance(stage, FitStage::Validated);

        let knots = KnotGenerator::generate(x, config.knots);
        Self::advance(stage, FitStage::KnotsComputed);

        let basis = Self::build_basis(x, &knots, config);
        Self::advance(stage, FitStage::BasisComputed);

        let boundary = Self::boundary_index(x, &knots);
        let coefficients = Self::estimate_coefficients(&basis, y, boundary, config)?;
        if let Some(g) = boundary.filter(|&g| !coefficients[g].is_estimated()) {
            log::debug!("boundary knot {} vanishes on the data; coefficient left undefined", g);
        }
        Self::advance(stage, FitStage::CoefficientsComputed);

        let fitted = Predictor::predict(&basis, &coefficients);
        Self::advance(stage, FitStage::Predicted);

        Ok(ExecutorOutput {
            knots,
            coefficients,
            fitted,
            stage: *stage,
        })
    }

    #[inline]
    fn advance(stage: &mut FitStage, next: FitStage) {
        log::trace!("spline stage: {} -> {}", stage, next);
        *stage = next;
    }

    /// Index of the knot pinned to `max(x)`, when the data range is non-degenerate.
    fn boundary_index<T: Float>(x: &[T], knots: &[T]) -> Option<usize> {
        let (min, max) = KnotGenerator::range(x)?;
        let last = knots.len().checked_sub(1)?;
        (min < max && knots[last] == max).then_some(last)
    }

    // ========================================================================
    // Stage Dispatch
    // ========================================================================

    #[cfg(feature = "parallel")]
    fn build_basis<T: Float + Send + Sync>(
        x: &[T],
        knots: &[T],
        config: &SplineConfig,
    ) -> BasisMatrix<T> {
        if config.parallel {
            BasisMatrix::build_parallel(x, knots, config.degree)
        } else {
            BasisMatrix::build(x, knots, config.degree)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn build_basis<T: Float>(x: &[T], knots: &[T], config: &SplineConfig) -> BasisMatrix<T> {
        BasisMatrix::build(x, knots, config.degree)
    }

    #[cfg(feature = "parallel")]
    fn estimate_coefficients<T: Float + Send + Sync>(
        basis: &BasisMatrix<T>,
        y: &[T],
        boundary: Option<usize>,
        config: &SplineConfig,
    ) -> Result<Vec<Coefficient<T>>, SplineError> {
        if config.parallel {
            CoefficientEstimator::estimate_all_parallel(basis, y, boundary)
        } else {
            CoefficientEstimator::estimate_all(basis, y, boundary)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn estimate_coefficients<T: Float>(
        basis: &BasisMatrix<T>,
        y: &[T],
        boundary: Option<usize>,
        _config: &SplineConfig,
    ) -> Result<Vec<Coefficient<T>>, SplineError> {
        CoefficientEstimator::estimate_all(basis, y, boundary)
    }
}
