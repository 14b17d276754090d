//! Deterministic synthetic candidate generation.
//!
//! Candidates are drawn from a seeded RNG. The hiring decision comes from a
//! fixed latent linear model over the features plus Gaussian noise,
//! thresholded at the sample median so both classes are always present on
//! datasets with more than one row.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::DataTable;
use crate::error::ModelError;

/// Column order for generated datasets. The decision column is last.
pub const SAMPLE_COLUMNS: [&str; 9] = [
    "age",
    "experience_years",
    "education_level",
    "previous_companies",
    "distance_km",
    "interview_score",
    "skill_score",
    "personality_score",
    "hiring_decision",
];

/// Noise level of the latent decision model.
const LATENT_NOISE_STD: f64 = 0.35;

/// Generate `count` synthetic candidates.
pub fn generate_sample(count: usize, seed: u64) -> Result<DataTable, ModelError> {
    if count == 0 {
        return Err(ModelError::schema("Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, LATENT_NOISE_STD)
        .map_err(|e| ModelError::schema(format!("Noise distribution error: {e}")))?;

    let mut rows = Vec::with_capacity(count);
    let mut latent = Vec::with_capacity(count);

    for _ in 0..count {
        let age = rng.gen_range(21..=60) as f64;
        let experience = rng.gen_range(0.0..=25.0_f64).round();
        let education = rng.gen_range(1..=4) as f64;
        let companies = rng.gen_range(0..=6) as f64;
        let distance = (rng.gen_range(1.0..=50.0_f64) * 10.0).round() / 10.0;
        let interview = rng.gen_range(0.0..=100.0_f64).round();
        let skill = rng.gen_range(0.0..=100.0_f64).round();
        let personality = rng.gen_range(0.0..=100.0_f64).round();

        let z: f64 = noise.sample(&mut rng);
        latent.push(
            0.9 * interview / 100.0
                + 1.1 * skill / 100.0
                + 0.6 * personality / 100.0
                + 0.8 * experience / 25.0
                + 0.5 * education / 4.0
                - 0.3 * distance / 50.0
                + z,
        );

        rows.push(vec![
            age, experience, education, companies, distance, interview, skill, personality, 0.0,
        ]);
    }

    let cutoff = median(&latent).unwrap_or(0.0);
    for (row, &l) in rows.iter_mut().zip(latent.iter()) {
        let last = row.len() - 1;
        row[last] = if l > cutoff { 1.0 } else { 0.0 };
    }

    Ok(DataTable {
        columns: SAMPLE_COLUMNS.iter().map(|s| s.to_string()).collect(),
        rows,
    })
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_sample() {
        let a = generate_sample(25, 7).unwrap();
        let b = generate_sample(25, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_sample(25, 7).unwrap();
        let b = generate_sample(25, 8).unwrap();
        assert_ne!(a.rows, b.rows);
    }

    #[test]
    fn shape_and_schema_are_consistent() {
        let table = generate_sample(40, 42).unwrap();
        assert_eq!(table.n_rows(), 40);
        assert_eq!(table.n_cols(), SAMPLE_COLUMNS.len());
        assert_eq!(table.columns.last().map(String::as_str), Some("hiring_decision"));
        for row in &table.rows {
            assert_eq!(row.len(), table.n_cols());
        }
    }

    #[test]
    fn decision_is_binary_with_both_classes() {
        let table = generate_sample(50, 42).unwrap();
        let decision_idx = table.column_index("hiring_decision").unwrap();
        let mut hired = 0usize;
        for row in &table.rows {
            let d = row[decision_idx];
            assert!(d == 0.0 || d == 1.0);
            if d == 1.0 {
                hired += 1;
            }
        }
        assert!(hired > 0 && hired < table.n_rows());
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(matches!(
            generate_sample(0, 1).unwrap_err(),
            ModelError::Schema(_)
        ));
    }

    #[test]
    fn median_of_even_sets_averages_the_middle_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }
}
