//! Numerical routines: SVD-based least squares and pseudoinverse.

pub mod lstsq;
pub mod pinv;

pub use lstsq::*;
pub use pinv::*;
