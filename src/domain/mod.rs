//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated input table (`DataTable`)
//! - the numeric design inputs (`FeatureMatrix`)
//! - solve outputs and diagnostics (`SolveReport`, `WeightComparison`)
//! - ranking outputs (`RankingEntry`, `Placement`)
//! - the candidate record and model export (`CandidateProfile`, `ModelFile`)

pub mod types;

pub use types::*;
