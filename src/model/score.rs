//! Score computation: dot products of candidate rows with the weight vector.

use std::collections::BTreeSet;

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::domain::CandidateProfile;
use crate::error::ModelError;

/// Score every row of `x`: `score[i] = x[i] · w`.
///
/// Rows are scored in parallel; output order always matches row order.
pub fn score_matrix(x: &DMatrix<f64>, w: &DVector<f64>) -> Result<Vec<f64>, ModelError> {
    if x.ncols() != w.len() {
        return Err(ModelError::dimension(format!(
            "Matrix has {} feature columns but weight vector has {} entries.",
            x.ncols(),
            w.len()
        )));
    }

    Ok((0..x.nrows())
        .into_par_iter()
        .map(|i| {
            x.row(i)
                .iter()
                .zip(w.iter())
                .map(|(a, b)| a * b)
                .sum::<f64>()
        })
        .collect())
}

/// Score a single feature row.
pub fn score_row(row: &[f64], w: &DVector<f64>) -> Result<f64, ModelError> {
    if row.len() != w.len() {
        return Err(ModelError::dimension(format!(
            "Feature row has {} values but weight vector has {} entries.",
            row.len(),
            w.len()
        )));
    }
    Ok(row.iter().zip(w.iter()).map(|(a, b)| a * b).sum())
}

/// Resolve a named candidate profile into a feature-ordered vector.
///
/// Keys must cover the feature list exactly. Missing and unknown keys are
/// both schema errors; resolution is by name, never positional.
pub fn candidate_vector(
    profile: &CandidateProfile,
    feature_names: &[String],
) -> Result<DVector<f64>, ModelError> {
    let mut missing = Vec::new();
    let mut values = Vec::with_capacity(feature_names.len());
    for name in feature_names {
        match profile.values.get(name) {
            Some(&v) => values.push(v),
            None => missing.push(name.as_str()),
        }
    }
    if !missing.is_empty() {
        return Err(ModelError::schema(format!(
            "Candidate is missing features: {}",
            missing.join(", ")
        )));
    }

    let known: BTreeSet<&str> = feature_names.iter().map(|s| s.as_str()).collect();
    let extra: Vec<&str> = profile
        .values
        .keys()
        .map(|k| k.as_str())
        .filter(|k| !known.contains(k))
        .collect();
    if !extra.is_empty() {
        return Err(ModelError::schema(format!(
            "Candidate has unknown features: {}",
            extra.join(", ")
        )));
    }

    Ok(DVector::from_vec(values))
}
