//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "linscore",
    version,
    about = "Linear candidate scoring and ranking"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the weight model, print diagnostics/rankings, optionally plot/export.
    Fit(FitArgs),
    /// Print the ranking table only (useful for scripting).
    Rank(FitArgs),
    /// Score a candidate JSON against the dataset and report its rank.
    ///
    /// Requires `--candidate`; the model is fitted on the same data source
    /// as `fit` would use.
    Eval(FitArgs),
    /// Write a synthetic candidate dataset CSV.
    Sample(SampleArgs),
}

/// Common options for fitting, ranking, and evaluation.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Candidate dataset CSV. When omitted, a synthetic sample is generated.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Name of the target column.
    #[arg(long, default_value = "hiring_decision")]
    pub target: String,

    /// Number of synthetic candidates when no CSV is given.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub sample_count: usize,

    /// Random seed for sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Show the top-N candidates.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Render ASCII plots (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-candidate results to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the fitted model to JSON.
    #[arg(long = "export-model", value_name = "JSON")]
    pub export_model: Option<PathBuf>,

    /// Candidate JSON (feature name to value) evaluated against the model.
    #[arg(long, value_name = "JSON")]
    pub candidate: Option<PathBuf>,
}

/// Options for synthetic dataset generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Output CSV path.
    #[arg(long, value_name = "CSV")]
    pub out: PathBuf,

    /// Number of candidates to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
