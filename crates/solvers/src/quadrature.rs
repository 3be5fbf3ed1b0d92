//! Numerical integration of definite integrals.
//!
//! # Rules
//!
//! - [`simpson`]: composite Simpson's rule on an even number of sub-intervals

pub mod simpson;
