//! Solvers for scalar equations, finding `x` such that `f(x) ≈ 0`.
//!
//! All solvers share one [`Config`] (iteration budget and tolerance), one
//! [`Error`] type, and one [`Event`]/[`Action`] pair for observation.
//!
//! # Solvers
//!
//! - [`bisection`]: halves a sign-change bracket; guaranteed progress
//! - [`false_position`]: secant-style interpolation inside a sign-change bracket
//! - [`newton_raphson`]: tangent steps using a caller-supplied derivative
//! - [`secant`]: tangent steps using a finite-difference slope
//!
//! # Example
//!
//! ```
//! use numkit_solvers::equation::{Config, Status, bisection};
//!
//! let f = |x: f64| x * x * x - x - 2.0;
//! let solution = bisection::solve_unobserved(&f, [1.0, 2.0], &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!(solution.residual.abs() < 1e-6);
//! # Ok::<(), numkit_solvers::equation::Error>(())
//! ```

mod bracket;
mod bracketing;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

pub mod bisection;
pub mod false_position;
pub mod newton_raphson;
pub mod secant;

pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};
