//! CSV ingest and validation.
//!
//! This module turns a candidate CSV into a validated `DataTable`.
//!
//! Design goals:
//! - **Strict schema**: every cell must parse as a number; ragged rows are
//!   rejected, not padded
//! - **Row-level errors** carrying the 1-based CSV line number
//! - **Separation of concerns**: no modeling logic here

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::{CandidateProfile, DataTable};
use crate::error::ModelError;

/// Load and validate a dataset CSV.
pub fn load_table(path: &Path) -> Result<DataTable, ModelError> {
    let file = File::open(path).map_err(|e| {
        ModelError::io(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    load_table_from_reader(file)
}

/// Load a dataset from any reader.
///
/// Kept separate from `load_table` so tests can feed in-memory bytes.
pub fn load_table_from_reader<R: Read>(reader: R) -> Result<DataTable, ModelError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ModelError::io(format!("Failed to read CSV headers: {e}")))?;
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    if columns.len() < 2 {
        return Err(ModelError::schema(
            "CSV needs at least one feature column and one target column.",
        ));
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;

        let record =
            result.map_err(|e| ModelError::io(format!("CSV parse error at line {line}: {e}")))?;
        if record.len() != columns.len() {
            return Err(ModelError::schema(format!(
                "Line {line} has {} values, expected {}.",
                record.len(),
                columns.len()
            )));
        }

        let mut row = Vec::with_capacity(columns.len());
        for (j, cell) in record.iter().enumerate() {
            let value: f64 = cell.parse().map_err(|_| {
                ModelError::schema(format!(
                    "Non-numeric value '{}' in column '{}' at line {line}.",
                    cell, columns[j]
                ))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ModelError::schema("CSV contains no data rows."));
    }

    Ok(DataTable { columns, rows })
}

/// Load a candidate profile JSON: a flat object of feature name to number.
pub fn load_candidate(path: &Path) -> Result<CandidateProfile, ModelError> {
    let file = File::open(path).map_err(|e| {
        ModelError::io(format!(
            "Failed to open candidate JSON '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::from_reader(file)
        .map_err(|e| ModelError::schema(format!("Invalid candidate JSON: {e}")))
}
