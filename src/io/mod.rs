//! Input/output helpers.
//!
//! - CSV ingest + candidate JSON loading (`ingest`)
//! - result/dataset/model exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
