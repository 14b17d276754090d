//! Shared pipeline logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! data -> design matrix -> dual solve -> comparison -> scores -> ranking -> R²
//!
//! Subcommands then focus on presentation (which sections to print).

use nalgebra::DVector;

use crate::data::generate_sample;
use crate::domain::{
    CandidateProfile, DataTable, LstsqFit, Placement, RankingEntry, RunConfig, WeightComparison,
};
use crate::error::ModelError;
use crate::io::{load_candidate, load_table};
use crate::model::{
    build_design, candidate_vector, compare_weights, insert_and_rank, order_by_magnitude,
    r_squared, rank, score_matrix, score_row, solve_both,
};

/// Evaluation outcome for an ad-hoc candidate.
#[derive(Debug, Clone)]
pub struct CandidateOutcome {
    pub profile: CandidateProfile,
    pub score: f64,
    pub placement: Placement,
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub table: DataTable,
    pub feature_names: Vec<String>,
    pub targets: DVector<f64>,
    pub lstsq: LstsqFit,
    pub weights_pinv: DVector<f64>,
    pub comparison: WeightComparison,
    pub importance: Vec<(String, f64)>,
    pub scores: Vec<f64>,
    pub ranking: Vec<RankingEntry>,
    pub r_squared: f64,
    pub candidate: Option<CandidateOutcome>,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, ModelError> {
    let table = match &config.csv_path {
        Some(path) => load_table(path)?,
        None => generate_sample(config.sample_count, config.sample_seed)?,
    };
    run_fit_with_table(config, table)
}

/// Execute the pipeline on an already-loaded table.
///
/// This is useful for tests and embedders that build tables in memory.
pub fn run_fit_with_table(config: &RunConfig, table: DataTable) -> Result<RunOutput, ModelError> {
    let (features, targets) = build_design(&table, &config.target_column)?;

    let (lstsq, weights_pinv) = solve_both(&features.values, &targets)?;
    let comparison = compare_weights(&features.feature_names, &lstsq.weights, &weights_pinv)?;
    let importance = order_by_magnitude(&features.feature_names, &lstsq.weights);

    // Scoring, ranking, and fit quality all use the least-squares weights;
    // the pseudoinverse path exists for cross-checking.
    let scores = score_matrix(&features.values, &lstsq.weights)?;
    let ranking = rank(&scores);
    let r2 = r_squared(targets.as_slice(), &scores)?;

    let candidate = match &config.candidate {
        Some(path) => {
            let profile = load_candidate(path)?;
            let x_new = candidate_vector(&profile, &features.feature_names)?;
            let score = score_row(x_new.as_slice(), &lstsq.weights)?;
            let placement = insert_and_rank(&scores, score);
            Some(CandidateOutcome {
                profile,
                score,
                placement,
            })
        }
        None => None,
    };

    Ok(RunOutput {
        feature_names: features.feature_names,
        targets,
        lstsq,
        weights_pinv,
        comparison,
        importance,
        scores,
        ranking,
        r_squared: r2,
        candidate,
        table,
    })
}
