//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates the dataset
//! - runs the dual-path solve, scoring, ranking, and diagnostics
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, SampleArgs};
use crate::domain::RunConfig;
use crate::error::ModelError;

pub mod pipeline;

/// Entry point for the `linscore` binary.
pub fn run() -> Result<(), ModelError> {
    // We want `linscore` and `linscore --csv data.csv` to behave like
    // `linscore fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args, OutputMode::Full),
        Command::Rank(args) => handle_fit(args, OutputMode::RankOnly),
        Command::Eval(args) => handle_eval(args),
        Command::Sample(args) => handle_sample(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
}

fn handle_fit(args: FitArgs, mode: OutputMode) -> Result<(), ModelError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    match mode {
        OutputMode::Full => {
            println!(
                "{}",
                crate::report::format_run_summary(
                    &run.table,
                    &config.target_column,
                    &run.lstsq.report,
                    &run.comparison,
                    run.r_squared,
                )
            );
            println!("{}", crate::report::format_weight_comparison(&run.comparison));
            println!("{}", crate::report::format_weight_importance(&run.importance));
        }
        OutputMode::RankOnly => {}
    }

    println!(
        "{}",
        crate::report::format_ranking(&run.ranking, run.targets.as_slice(), config.top_n)
    );

    if let Some(candidate) = &run.candidate {
        println!(
            "{}",
            crate::report::format_candidate_report(
                &candidate.profile,
                candidate.score,
                candidate.placement,
            )
        );
    }

    if mode == OutputMode::Full && config.plot {
        println!(
            "{}",
            crate::plot::render_weight_bars(&run.importance, config.plot_width / 2)
        );
        println!(
            "{}",
            crate::plot::render_score_histogram(&run.scores, 10, config.plot_width / 2)
        );
        // Predicted values of the linear model are the scores themselves.
        println!(
            "{}",
            crate::plot::render_fit_scatter(
                &run.scores,
                run.targets.as_slice(),
                config.plot_width,
                config.plot_height,
            )
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::write_results_csv(path, &run.table, &run.scores, &run.ranking)?;
    }
    if let Some(path) = &config.export_model {
        let model = crate::io::build_model_file(
            &config.target_column,
            &run.feature_names,
            &run.lstsq,
            run.weights_pinv.as_slice(),
            &run.comparison,
            run.r_squared,
        );
        crate::io::write_model_json(path, &model)?;
    }

    Ok(())
}

fn handle_eval(args: FitArgs) -> Result<(), ModelError> {
    if args.candidate.is_none() {
        return Err(ModelError::schema("eval requires --candidate <JSON>."));
    }

    let config = run_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    let Some(candidate) = &run.candidate else {
        return Err(ModelError::schema("Candidate evaluation produced no result."));
    };
    println!(
        "{}",
        crate::report::format_candidate_report(
            &candidate.profile,
            candidate.score,
            candidate.placement,
        )
    );
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), ModelError> {
    let table = crate::data::generate_sample(args.count, args.seed)?;
    crate::io::write_table_csv(&args.out, &table)?;
    println!(
        "Wrote {} candidates ({} columns) to {}",
        table.n_rows(),
        table.n_cols(),
        args.out.display()
    );
    Ok(())
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    RunConfig {
        csv_path: args.csv.clone(),
        target_column: args.target.clone(),
        top_n: args.top,
        sample_count: args.sample_count,
        sample_seed: args.seed,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_model: args.export_model.clone(),
        candidate: args.candidate.clone(),
    }
}

/// Rewrite argv so `linscore` defaults to `linscore fit`.
///
/// Rules:
/// - `linscore`                     -> `linscore fit`
/// - `linscore --csv data.csv ...`  -> `linscore fit --csv data.csv ...`
/// - `linscore --help/--version`    -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "rank" | "eval" | "sample");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
