//! Minimum-norm least squares via SVD.
//!
//! We solve linear scoring problems of the form:
//!
//! ```text
//! minimize ‖Xw − y‖₂
//! ```
//!
//! Implementation choices:
//! - SVD solves the least-squares problem robustly even when the design
//!   matrix is tall (more rows than columns) or rank-deficient, in which
//!   case the minimum-norm solution is returned.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - Rank, singular values, and the residual sum come from the same
//!   decomposition, so diagnostics are always consistent with the solution.
//! - The singular-value cut-off follows the usual `max(n, f)·ε·σ_max`
//!   convention.

use nalgebra::{DMatrix, DVector};

use crate::domain::{LstsqFit, SolveReport};
use crate::error::ModelError;

/// Validate the shapes shared by both solve paths.
pub(crate) fn check_system(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<(), ModelError> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ModelError::empty_input(format!(
            "Cannot solve a {}x{} system.",
            x.nrows(),
            x.ncols()
        )));
    }
    if x.nrows() != y.len() {
        return Err(ModelError::dimension(format!(
            "Matrix has {} rows but target vector has {} entries.",
            x.nrows(),
            y.len()
        )));
    }
    Ok(())
}

/// Cut-off below which singular values are treated as zero.
pub(crate) fn svd_cutoff(nrows: usize, ncols: usize, max_singular_value: f64) -> f64 {
    max_singular_value * nrows.max(ncols) as f64 * f64::EPSILON
}

/// Solve `argmin_w ‖Xw − y‖₂` (minimum-norm when rank-deficient).
///
/// Returns the weight vector together with the residual sum of squares, the
/// numerical rank, and the singular values of X.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<LstsqFit, ModelError> {
    check_system(x, y)?;

    let svd = x.clone().svd(true, true);
    let max_sv = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let tol = svd_cutoff(x.nrows(), x.ncols(), max_sv);

    let weights = svd
        .solve(y, tol)
        .map_err(|msg| ModelError::dimension(format!("SVD solve failed: {msg}")))?;

    let rank = svd.rank(tol);
    let singular_values: Vec<f64> = svd.singular_values.iter().copied().collect();
    let residual_sum_squares = (x * &weights - y).norm_squared();

    Ok(LstsqFit {
        weights,
        report: SolveReport {
            residual_sum_squares,
            rank,
            singular_values,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let fit = solve_least_squares(&x, &y).unwrap();
        assert!((fit.weights[0] - 2.0).abs() < 1e-10);
        assert!((fit.weights[1] - 3.0).abs() < 1e-10);
        assert!(fit.report.residual_sum_squares < 1e-18);
        assert_eq!(fit.report.rank, 2);
        assert_eq!(fit.report.singular_values.len(), 2);
    }

    #[test]
    fn identity_like_system_recovers_exact_weights() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let y = DVector::from_row_slice(&[2.0, 3.0, 5.0]);

        let fit = solve_least_squares(&x, &y).unwrap();
        assert!((fit.weights[0] - 2.0).abs() < 1e-9);
        assert!((fit.weights[1] - 3.0).abs() < 1e-9);
        assert!(fit.report.residual_sum_squares < 1e-18);
    }

    #[test]
    fn rank_deficiency_is_reported_not_raised() {
        // Second column duplicates the first, so rank is 1.
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);

        let fit = solve_least_squares(&x, &y).unwrap();
        assert_eq!(fit.report.rank, 1);
        assert!(fit.weights.iter().all(|w| w.is_finite()));
        // Minimum-norm solution splits the coefficient across both columns.
        assert!((fit.weights[0] - 1.0).abs() < 1e-9);
        assert!((fit.weights[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_rows_is_a_dimension_error() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        let err = solve_least_squares(&x, &y).unwrap_err();
        assert!(matches!(err, ModelError::Dimension(_)));
    }

    #[test]
    fn empty_system_is_an_empty_input_error() {
        let x = DMatrix::<f64>::zeros(0, 3);
        let y = DVector::<f64>::zeros(0);
        let err = solve_least_squares(&x, &y).unwrap_err();
        assert!(matches!(err, ModelError::EmptyInput(_)));
    }
}
