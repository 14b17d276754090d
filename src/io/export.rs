//! Exports: per-candidate results CSV, dataset CSV, and model JSON.
//!
//! The CSV exports are meant to be easy to consume in spreadsheets or
//! downstream scripts; the model JSON is the portable snapshot of a run.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::domain::{
    DataTable, LstsqFit, ModelFile, RankingEntry, WeightComparison,
};
use crate::error::ModelError;

/// Write one row per candidate: original values plus score and rank position.
pub fn write_results_csv(
    path: &Path,
    table: &DataTable,
    scores: &[f64],
    ranking: &[RankingEntry],
) -> Result<(), ModelError> {
    if scores.len() != table.n_rows() || ranking.len() != table.n_rows() {
        return Err(ModelError::dimension(format!(
            "Export expected {} scored and ranked rows, got {} scores and {} entries.",
            table.n_rows(),
            scores.len(),
            ranking.len()
        )));
    }

    let mut file = File::create(path).map_err(|e| {
        ModelError::io(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "row,{},score,rank_position", table.columns.join(","))
        .map_err(|e| ModelError::io(format!("Failed to write export CSV header: {e}")))?;

    let mut position = vec![0usize; table.n_rows()];
    for entry in ranking {
        position[entry.row] = entry.position;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(
            file,
            "{},{},{:.6},{}",
            i + 1,
            cells.join(","),
            scores[i],
            position[i]
        )
        .map_err(|e| ModelError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a plain dataset CSV (used by `linscore sample`).
pub fn write_table_csv(path: &Path, table: &DataTable) -> Result<(), ModelError> {
    let mut file = File::create(path).map_err(|e| {
        ModelError::io(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "{}", table.columns.join(","))
        .map_err(|e| ModelError::io(format!("Failed to write CSV header: {e}")))?;
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(file, "{}", cells.join(","))
            .map_err(|e| ModelError::io(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}

/// Assemble the serializable model snapshot, stamped with the local time.
pub fn build_model_file(
    target_column: &str,
    feature_names: &[String],
    lstsq: &LstsqFit,
    weights_pinv: &[f64],
    comparison: &WeightComparison,
    r_squared: f64,
) -> ModelFile {
    ModelFile {
        tool: "linscore".to_string(),
        generated: Local::now().to_rfc3339(),
        target_column: target_column.to_string(),
        feature_names: feature_names.to_vec(),
        weights_lstsq: lstsq.weights.iter().copied().collect(),
        weights_pinv: weights_pinv.to_vec(),
        max_abs_difference: comparison.max_abs_difference,
        rank: lstsq.report.rank,
        singular_values: lstsq.report.singular_values.clone(),
        r_squared,
    }
}

/// Write a model JSON file.
pub fn write_model_json(path: &Path, model: &ModelFile) -> Result<(), ModelError> {
    let file = File::create(path).map_err(|e| {
        ModelError::io(format!(
            "Failed to create model JSON '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::to_writer_pretty(file, model)
        .map_err(|e| ModelError::io(format!("Failed to write model JSON: {e}")))?;
    Ok(())
}

/// Read a model JSON file back.
pub fn read_model_json(path: &Path) -> Result<ModelFile, ModelError> {
    let file = File::open(path).map_err(|e| {
        ModelError::io(format!(
            "Failed to open model JSON '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::from_reader(file)
        .map_err(|e| ModelError::io(format!("Invalid model JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolveReport;
    use nalgebra::DVector;

    #[test]
    fn model_file_roundtrips_through_json() {
        let lstsq = LstsqFit {
            weights: DVector::from_row_slice(&[1.5, -0.5]),
            report: SolveReport {
                residual_sum_squares: 0.25,
                rank: 2,
                singular_values: vec![3.0, 1.0],
            },
        };
        let comparison = WeightComparison {
            rows: vec![],
            max_abs_difference: 1e-9,
        };
        let names = vec!["age".to_string(), "skill".to_string()];

        let model = build_model_file("decision", &names, &lstsq, &[1.5, -0.5], &comparison, 0.85);
        let json = serde_json::to_string(&model).unwrap();
        let back: ModelFile = serde_json::from_str(&json).unwrap();

        assert_eq!(back.tool, "linscore");
        assert_eq!(back.feature_names, names);
        assert_eq!(back.weights_lstsq, vec![1.5, -0.5]);
        assert_eq!(back.rank, 2);
        assert_eq!(back.r_squared, 0.85);
    }
}
