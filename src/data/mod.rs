//! Dataset sources.
//!
//! The tool runs self-contained: when no CSV is supplied, a deterministic
//! synthetic candidate sample is generated.

pub mod sample;

pub use sample::*;
