//! Dual-path weight computation and comparison.
//!
//! The least-squares and pseudoinverse paths are deliberately kept as two
//! separate functions over the same data. With full column rank they agree
//! to floating tolerance; under rank deficiency they may diverge, and that
//! divergence is part of the diagnostic output rather than an error.

use nalgebra::{DMatrix, DVector};

use crate::domain::{LstsqFit, WeightComparison, WeightDelta};
use crate::error::ModelError;
use crate::math::{solve_least_squares, solve_pseudoinverse};

/// Run both solve paths on the same system.
pub fn solve_both(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
) -> Result<(LstsqFit, DVector<f64>), ModelError> {
    let lstsq = solve_least_squares(x, y)?;
    let pinv = solve_pseudoinverse(x, y)?;
    Ok((lstsq, pinv))
}

/// Per-feature comparison of two weight vectors over the same feature list.
pub fn compare_weights(
    feature_names: &[String],
    w_lstsq: &DVector<f64>,
    w_pinv: &DVector<f64>,
) -> Result<WeightComparison, ModelError> {
    if feature_names.len() != w_lstsq.len() || feature_names.len() != w_pinv.len() {
        return Err(ModelError::dimension(format!(
            "Comparison over {} features got weight vectors of length {} and {}.",
            feature_names.len(),
            w_lstsq.len(),
            w_pinv.len()
        )));
    }

    let mut rows = Vec::with_capacity(feature_names.len());
    let mut max_abs_difference = 0.0_f64;
    for (j, name) in feature_names.iter().enumerate() {
        let difference = w_lstsq[j] - w_pinv[j];
        if difference.abs() > max_abs_difference {
            max_abs_difference = difference.abs();
        }
        rows.push(WeightDelta {
            feature: name.clone(),
            lstsq: w_lstsq[j],
            pinv: w_pinv[j],
            difference,
        });
    }

    Ok(WeightComparison {
        rows,
        max_abs_difference,
    })
}

/// Weights sorted by descending |w| for interpretation.
///
/// Ties keep feature order (stable sort).
pub fn order_by_magnitude(feature_names: &[String], w: &DVector<f64>) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = feature_names
        .iter()
        .cloned()
        .zip(w.iter().copied())
        .collect();
    out.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
