//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grids), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Three charts:
//! - horizontal weight bars, one per feature
//! - score histogram with a fixed bin count
//! - scatter of predicted vs actual target values (`o` markers)

/// Render one horizontal bar per feature, scaled to the largest |w|.
pub fn render_weight_bars(weights: &[(String, f64)], width: usize) -> String {
    let width = width.max(10);
    let max_abs = weights.iter().map(|(_, w)| w.abs()).fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str("Weights by feature:\n");

    for (name, w) in weights {
        let len = if max_abs > 0.0 && w.is_finite() {
            ((w.abs() / max_abs) * width as f64).round() as usize
        } else {
            0
        };
        let bar: String = "#".repeat(len);
        let sign = if *w < 0.0 { '-' } else { '+' };
        out.push_str(&format!(
            "{:<22} {} {:<width$} {:>12.6}\n",
            truncate(name, 22),
            sign,
            bar,
            w,
            width = width
        ));
    }

    out
}

/// Render a horizontal histogram of the score distribution.
pub fn render_score_histogram(scores: &[f64], bins: usize, width: usize) -> String {
    let bins = bins.max(1);
    let width = width.max(10);

    let mut out = String::new();
    out.push_str(&format!("Score distribution (n={}):\n", scores.len()));

    let Some((min, max)) = finite_range(scores) else {
        out.push_str("  (no finite scores)\n");
        return out;
    };
    let span = if max > min { max - min } else { 1.0 };

    let mut counts = vec![0usize; bins];
    for &s in scores {
        if !s.is_finite() {
            continue;
        }
        let u = ((s - min) / span).clamp(0.0, 1.0);
        let idx = ((u * bins as f64) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in counts.iter().enumerate() {
        let lo = min + span * i as f64 / bins as f64;
        let hi = min + span * (i + 1) as f64 / bins as f64;
        let len = ((count as f64 / max_count as f64) * width as f64).round() as usize;
        let bar: String = "#".repeat(len);
        out.push_str(&format!(
            "{:>12.4} .. {:>12.4} | {:<width$} {:>6}\n",
            lo,
            hi,
            bar,
            count,
            width = width
        ));
    }

    out
}

/// Render a scatter of predicted (x) vs actual (y) values.
pub fn render_fit_scatter(
    predicted: &[f64],
    actual: &[f64],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = pad_range(finite_range(predicted).unwrap_or((0.0, 1.0)), 0.05);
    let (y_min, y_max) = pad_range(finite_range(actual).unwrap_or((0.0, 1.0)), 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for (&p, &a) in predicted.iter().zip(actual.iter()) {
        if !(p.is_finite() && a.is_finite()) {
            continue;
        }
        let x = map_x(p, x_min, x_max, width);
        let y = map_y(a, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Fit: predicted=[{x_min:.2}, {x_max:.2}] | actual=[{y_min:.2}, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range((min, max): (f64, f64), frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(v: f64, min: f64, max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((v - min) / (max - min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, min: f64, max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((v - min) / (max - min)).clamp(0.0, 1.0);
    // v = max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
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

    #[test]
    fn scatter_golden_snapshot_small() {
        let predicted = [0.0, 1.0];
        let actual = [0.0, 1.0];

        let txt = render_fit_scatter(&predicted, &actual, 10, 5);
        let expected = concat!(
            "Fit: predicted=[-0.05, 1.05] | actual=[-0.05, 1.05]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn weight_bars_scale_to_largest_magnitude() {
        let weights = vec![("a".to_string(), 2.0), ("b".to_string(), -1.0)];
        let txt = render_weight_bars(&weights, 10);

        assert!(txt.contains("##########"));
        assert!(!txt.contains("###########"));
        let b_line = txt.lines().find(|l| l.starts_with('b')).unwrap();
        assert!(b_line.contains("- #####"));
    }

    #[test]
    fn histogram_counts_every_finite_score() {
        let scores = [0.0, 0.1, 0.9, 1.0, f64::NAN];
        let txt = render_score_histogram(&scores, 2, 10);

        assert!(txt.contains("Score distribution (n=5)"));
        let counted: usize = txt
            .lines()
            .filter(|l| l.contains('|'))
            .filter_map(|l| l.split_whitespace().last())
            .filter_map(|v| v.parse::<usize>().ok())
            .sum();
        assert_eq!(counted, 4);
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let txt = render_score_histogram(&[f64::NAN], 5, 10);
        assert!(txt.contains("no finite scores"));

        let txt = render_fit_scatter(&[], &[], 10, 5);
        assert!(txt.starts_with("Fit: predicted=[-0.05, 1.05]"));
    }
}
