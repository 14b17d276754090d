//! Reporting utilities: weight tables, rankings, and run summaries.
//!
//! We keep formatting code in one place so:
//! - the math/solving code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{
    CandidateProfile, DataTable, Placement, RankingEntry, SolveReport, WeightComparison,
};

/// Format the full run summary (dataset shape + solve diagnostics).
pub fn format_run_summary(
    table: &DataTable,
    target_column: &str,
    report: &SolveReport,
    comparison: &WeightComparison,
    r_squared: f64,
) -> String {
    let mut out = String::new();

    out.push_str("=== linscore - Linear Candidate Scoring ===\n");
    out.push_str(&format!("Rows (candidates): {}\n", table.n_rows()));
    out.push_str(&format!("Columns (features + target): {}\n", table.n_cols()));
    out.push_str(&format!("Target: {target_column}\n"));
    out.push_str(&format!(
        "Numerical rank: {} of {} features\n",
        report.rank,
        comparison.rows.len()
    ));
    out.push_str(&format!(
        "Residual sum of squares: {:.6}\n",
        report.residual_sum_squares
    ));
    out.push_str(&format!(
        "Singular values: {}\n",
        fmt_vec(&report.singular_values)
    ));
    out.push_str(&format!(
        "Max |w_lstsq - w_pinv|: {:.6e}\n",
        comparison.max_abs_difference
    ));
    out.push_str(&format!("R²: {:.3}\n", r_squared));

    out
}

/// Format the per-feature comparison of the two solve paths.
pub fn format_weight_comparison(comparison: &WeightComparison) -> String {
    let mut out = String::new();

    out.push_str("Weights by method:\n");
    out.push_str(&format!(
        "{:<25} {:>14} {:>14} {:>14}\n",
        "feature", "w_lstsq", "w_pinv", "difference"
    ));
    out.push_str(&format!(
        "{:-<25} {:-<14} {:-<14} {:-<14}\n",
        "", "", "", ""
    ));
    for row in &comparison.rows {
        out.push_str(&format!(
            "{:<25} {:>14.6} {:>14.6} {:>14.6e}\n",
            truncate(&row.feature, 25),
            row.lstsq,
            row.pinv,
            row.difference
        ));
    }
    out.push_str(&format!(
        "\nMax absolute difference: {:.6e}\n",
        comparison.max_abs_difference
    ));

    out
}

/// Format weights ordered by |w| (most influential first).
pub fn format_weight_importance(ordered: &[(String, f64)]) -> String {
    let mut out = String::new();

    out.push_str("Weights by importance (|w|):\n");
    out.push_str(&format!("{:<25} {:>14}\n", "feature", "weight"));
    out.push_str(&format!("{:-<25} {:-<14}\n", "", ""));
    for (name, w) in ordered {
        out.push_str(&format!("{:<25} {:>14.6}\n", truncate(name, 25), w));
    }

    out
}

/// Format the top-N ranking table with the actual target value per row.
pub fn format_ranking(ranking: &[RankingEntry], targets: &[f64], top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Top {top_n} candidates by score:\n"));
    out.push_str(&format!(
        "{:>6} {:>8} {:>14} {:>8}\n",
        "rank", "row", "score", "target"
    ));
    out.push_str(&format!("{:->6} {:->8} {:->14} {:->8}\n", "", "", "", ""));
    for entry in ranking.iter().take(top_n) {
        let target = targets.get(entry.row).copied().unwrap_or(f64::NAN);
        out.push_str(&format!(
            "{:>6} {:>8} {:>14.6} {:>8}\n",
            entry.position,
            entry.row + 1,
            entry.score,
            target
        ));
    }

    let decisions: Vec<String> = ranking
        .iter()
        .take(top_n)
        .filter_map(|e| targets.get(e.row))
        .map(|v| format!("{v}"))
        .collect();
    out.push_str(&format!(
        "\nTarget values of top {top_n}: [{}]\n",
        decisions.join(", ")
    ));

    out
}

/// Format the ad-hoc candidate evaluation section.
pub fn format_candidate_report(
    profile: &CandidateProfile,
    score: f64,
    placement: Placement,
) -> String {
    let mut out = String::new();

    out.push_str("=== New candidate ===\n");
    for (name, value) in &profile.values {
        out.push_str(&format!("  {name}: {value}\n"));
    }
    out.push_str(&format!("\nScore: {score:.6}\n"));
    out.push_str(&format!(
        "Ranking position: {} of {}\n",
        placement.position, placement.total
    ));

    out
}

fn fmt_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeightDelta;

    #[test]
    fn ranking_table_shows_positions_and_targets() {
        let ranking = vec![
            RankingEntry { row: 2, score: 9.5, position: 1 },
            RankingEntry { row: 0, score: 4.0, position: 2 },
            RankingEntry { row: 1, score: 1.0, position: 3 },
        ];
        let targets = [0.0, 0.0, 1.0];

        let text = format_ranking(&ranking, &targets, 2);
        assert!(text.contains("Top 2 candidates"));
        // Best row is shown 1-based with its target value.
        assert!(text.contains("     1        3       9.500000        1"));
        assert!(text.contains("Target values of top 2: [1, 0]"));
    }

    #[test]
    fn candidate_report_states_position_of_total() {
        let profile = CandidateProfile {
            values: [("age".to_string(), 32.0)].into_iter().collect(),
        };
        let text = format_candidate_report(
            &profile,
            5.0,
            Placement { position: 3, total: 4 },
        );
        assert!(text.contains("age: 32"));
        assert!(text.contains("Score: 5.000000"));
        assert!(text.contains("Ranking position: 3 of 4"));
    }

    #[test]
    fn comparison_table_lists_each_feature() {
        let comparison = WeightComparison {
            rows: vec![WeightDelta {
                feature: "skill_score".to_string(),
                lstsq: 0.5,
                pinv: 0.5,
                difference: 0.0,
            }],
            max_abs_difference: 0.0,
        };
        let text = format_weight_comparison(&comparison);
        assert!(text.contains("skill_score"));
        assert!(text.contains("Max absolute difference"));
    }

    #[test]
    fn truncate_caps_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd.");
    }
}
