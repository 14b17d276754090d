//! Goodness-of-fit diagnostics.

use crate::error::ModelError;

/// Coefficient of determination, `R² = 1 − SS_res/SS_tot`.
///
/// A constant target makes `SS_tot` zero and R² undefined; that case is
/// reported as `DegenerateTarget` rather than producing a NaN.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Result<f64, ModelError> {
    if actual.len() != predicted.len() {
        return Err(ModelError::dimension(format!(
            "Actual has {} entries but predicted has {}.",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(ModelError::empty_input(
            "Cannot compute R² over zero observations.",
        ));
    }

    let n = actual.len() as f64;
    let mean = actual.iter().sum::<f64>() / n;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, p)| (y - p) * (y - p))
        .sum();
    let ss_tot: f64 = actual.iter().map(|y| (y - mean) * (y - mean)).sum();

    if ss_tot == 0.0 {
        return Err(ModelError::degenerate_target(
            "All target values are identical; R² is undefined.",
        ));
    }

    Ok(1.0 - ss_res / ss_tot)
}
