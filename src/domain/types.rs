//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory during solving and ranking
//! - exported to JSON/CSV
//! - reloaded later by downstream tooling

use std::collections::BTreeMap;
use std::path::PathBuf;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// A validated numeric table: ordered column names plus row-major values.
///
/// Invariant (guaranteed by the loader/generator): every row has exactly one
/// value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl DataTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Feature matrix with positionally aligned column names.
///
/// Column `j` of `values` always corresponds to `feature_names[j]`.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub feature_names: Vec<String>,
    pub values: DMatrix<f64>,
}

impl FeatureMatrix {
    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.values.ncols()
    }
}

/// Diagnostics from the least-squares path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// `‖Xw − y‖²` at the returned solution.
    pub residual_sum_squares: f64,
    /// Numerical rank of X at the singular-value cut-off.
    pub rank: usize,
    /// Singular values of X, largest first.
    pub singular_values: Vec<f64>,
}

/// Weight vector plus diagnostics from the least-squares solve.
#[derive(Debug, Clone)]
pub struct LstsqFit {
    pub weights: DVector<f64>,
    pub report: SolveReport,
}

/// One row of the per-feature comparison between the two solve paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightDelta {
    pub feature: String,
    pub lstsq: f64,
    pub pinv: f64,
    pub difference: f64,
}

/// Per-feature comparison of the two solve paths.
///
/// Disagreement is a diagnostic, not a failure: under rank deficiency the
/// two methods may legitimately return different minimum-norm solutions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightComparison {
    pub rows: Vec<WeightDelta>,
    pub max_abs_difference: f64,
}

/// One ranked candidate row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    /// Original 0-based row index in the score vector.
    pub row: usize,
    pub score: f64,
    /// 1-based rank position (1 = highest score).
    pub position: usize,
}

/// Where an inserted score lands in the combined ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: usize,
    pub total: usize,
}

/// A named candidate not present in the dataset.
///
/// Keys must match the model's feature names exactly; resolution is by name
/// lookup, never positional. Missing and unknown keys are both rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

/// A saved model file (JSON).
///
/// This is the "portable" snapshot of a run: both weight vectors with their
/// aligned feature names, the solve diagnostics, and the fit quality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub generated: String,
    pub target_column: String,
    pub feature_names: Vec<String>,
    pub weights_lstsq: Vec<f64>,
    pub weights_pinv: Vec<f64>,
    pub max_abs_difference: f64,
    pub rank: usize,
    pub singular_values: Vec<f64>,
    pub r_squared: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Dataset CSV; when absent, a synthetic sample is generated.
    pub csv_path: Option<PathBuf>,
    pub target_column: String,
    pub top_n: usize,

    pub sample_count: usize,
    pub sample_seed: u64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_model: Option<PathBuf>,

    /// Optional candidate JSON evaluated against the fitted model.
    pub candidate: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_is_exact_match() {
        let table = DataTable {
            columns: vec!["age".to_string(), "skill_score".to_string()],
            rows: vec![vec![30.0, 80.0]],
        };
        assert_eq!(table.column_index("skill_score"), Some(1));
        assert_eq!(table.column_index("skill"), None);
    }

    #[test]
    fn candidate_profile_json_is_a_flat_object() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"age": 32, "skill_score": 80.5}"#).unwrap();
        assert_eq!(profile.values.len(), 2);
        assert_eq!(profile.values["age"], 32.0);
        assert_eq!(profile.values["skill_score"], 80.5);
    }
}
