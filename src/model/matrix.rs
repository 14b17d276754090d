//! Design-matrix construction from a validated table.

use nalgebra::{DMatrix, DVector};

use crate::domain::{DataTable, FeatureMatrix};
use crate::error::ModelError;

/// Split a table into a feature matrix and a target vector.
///
/// Features are all columns except `target_column`, kept in their original
/// relative order. The loader guarantees row width, so the only schema
/// failure left here is an unknown target column.
pub fn build_design(
    table: &DataTable,
    target_column: &str,
) -> Result<(FeatureMatrix, DVector<f64>), ModelError> {
    let Some(target_idx) = table.column_index(target_column) else {
        return Err(ModelError::schema(format!(
            "Target column '{target_column}' not found; available columns: {}",
            table.columns.join(", ")
        )));
    };

    let feature_names: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != target_idx)
        .map(|(_, name)| name.clone())
        .collect();

    let n = table.n_rows();
    let f = feature_names.len();

    let mut x = DMatrix::<f64>::zeros(n, f);
    let mut y = DVector::<f64>::zeros(n);

    for (i, row) in table.rows.iter().enumerate() {
        debug_assert_eq!(row.len(), table.n_cols());
        let mut k = 0;
        for (j, &value) in row.iter().enumerate() {
            if j == target_idx {
                y[i] = value;
            } else {
                x[(i, k)] = value;
                k += 1;
            }
        }
    }

    Ok((
        FeatureMatrix {
            feature_names,
            values: x,
        },
        y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable {
            columns: vec![
                "age".to_string(),
                "decision".to_string(),
                "skill".to_string(),
            ],
            rows: vec![vec![30.0, 1.0, 80.0], vec![45.0, 0.0, 60.0]],
        }
    }

    #[test]
    fn splits_target_and_preserves_feature_order() {
        let (features, y) = build_design(&table(), "decision").unwrap();

        assert_eq!(features.feature_names, vec!["age", "skill"]);
        assert_eq!(features.n_rows(), 2);
        assert_eq!(features.n_features(), 2);
        assert_eq!(features.values[(0, 0)], 30.0);
        assert_eq!(features.values[(0, 1)], 80.0);
        assert_eq!(features.values[(1, 0)], 45.0);
        assert_eq!(features.values[(1, 1)], 60.0);
        assert_eq!(y.as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn missing_target_column_is_a_schema_error() {
        let err = build_design(&table(), "hired").unwrap_err();
        assert!(matches!(err, ModelError::Schema(_)));
        assert!(format!("{err}").contains("'hired'"));
    }

    #[test]
    fn target_in_last_position_leaves_features_untouched() {
        let t = DataTable {
            columns: vec!["a".to_string(), "b".to_string(), "y".to_string()],
            rows: vec![vec![1.0, 2.0, 9.0]],
        };
        let (features, y) = build_design(&t, "y").unwrap();
        assert_eq!(features.feature_names, vec!["a", "b"]);
        assert_eq!(features.values[(0, 0)], 1.0);
        assert_eq!(features.values[(0, 1)], 2.0);
        assert_eq!(y[0], 9.0);
    }
}
