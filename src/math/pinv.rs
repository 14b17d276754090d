//! Moore–Penrose pseudoinverse solve.
//!
//! An independent numerical path from `lstsq`: the pseudoinverse `X⁺` is
//! formed explicitly (SVD with near-zero singular values discarded) and the
//! weights are `w = X⁺y`. Keeping the two paths separate makes their
//! agreement, or divergence under rank deficiency, an observable property.

use nalgebra::{DMatrix, DVector};

use crate::error::ModelError;
use crate::math::lstsq::{check_system, svd_cutoff};

/// Compute `X⁺`, the Moore–Penrose pseudoinverse of X.
pub fn pseudo_inverse(x: &DMatrix<f64>) -> Result<DMatrix<f64>, ModelError> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ModelError::empty_input(format!(
            "Cannot invert a {}x{} matrix.",
            x.nrows(),
            x.ncols()
        )));
    }

    let svd = x.clone().svd(true, true);
    let max_sv = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let tol = svd_cutoff(x.nrows(), x.ncols(), max_sv);

    svd.pseudo_inverse(tol)
        .map_err(|msg| ModelError::dimension(format!("Pseudoinverse failed: {msg}")))
}

/// Solve `w = X⁺y`.
pub fn solve_pseudoinverse(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, ModelError> {
    check_system(x, y)?;
    let pinv = pseudo_inverse(x)?;
    Ok(pinv * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::solve_least_squares;

    #[test]
    fn pseudo_inverse_of_identity_is_identity() {
        let x = DMatrix::<f64>::identity(3, 3);
        let pinv = pseudo_inverse(&x).unwrap();
        assert!((pinv - DMatrix::<f64>::identity(3, 3)).norm() < 1e-12);
    }

    #[test]
    fn agrees_with_least_squares_on_full_column_rank() {
        let x = DMatrix::from_row_slice(
            4,
            2,
            &[1.0, 0.5, 1.0, 1.5, 1.0, 2.5, 1.0, 4.0],
        );
        let y = DVector::from_row_slice(&[1.0, 2.1, 2.9, 4.2]);

        let w_lstsq = solve_least_squares(&x, &y).unwrap().weights;
        let w_pinv = solve_pseudoinverse(&x, &y).unwrap();

        let max_diff = (w_lstsq - w_pinv).abs().max();
        assert!(max_diff < 1e-10, "paths diverged by {max_diff}");
    }

    #[test]
    fn rank_deficient_solve_returns_minimum_norm_weights() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);

        let w = solve_pseudoinverse(&x, &y).unwrap();
        assert!((w[0] - 1.0).abs() < 1e-9);
        assert!((w[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_rows_is_a_dimension_error() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        let y = DVector::from_row_slice(&[1.0]);
        let err = solve_pseudoinverse(&x, &y).unwrap_err();
        assert!(matches!(err, ModelError::Dimension(_)));
    }
}
