//! Fixed-step integrators for first-order scalar ODEs `dy/dx = f(x, y)`.
//!
//! A [`Grid`] fixes the nodes `x0, x0 + h, x0 + 2h, ...` up to `x_end`; an
//! integrator walks the grid from `y(x0) = y0` and returns a [`Trajectory`]
//! of step-aligned `(x, y)` samples.
//!
//! # Integrators
//!
//! - [`euler`]: explicit Euler, first order
//! - [`runge_kutta`]: classical fourth-order Runge-Kutta
//!
//! Both are fixed-step with no error control; divergence is not detected.
//!
//! # Example
//!
//! ```
//! use numkit_solvers::transient::{Grid, runge_kutta};
//!
//! let grid = Grid::new(0.0, 1.0, 0.1)?;
//! let solution = runge_kutta::solve_unobserved(&|_x: f64, y: f64| y, 1.0, &grid)?;
//!
//! let (x, y) = solution.trajectory.last().expect("non-empty");
//! assert!((x - 1.0).abs() < 1e-12);
//! assert!((y - std::f64::consts::E).abs() < 1e-5);
//! # Ok::<(), numkit_solvers::transient::Error>(())
//! ```

mod error;
mod event;
mod grid;
mod integrate;
mod solution;
mod trajectory;

pub mod euler;
pub mod runge_kutta;

pub use error::Error;
pub use event::{Action, Event};
pub use grid::{Grid, MAX_STEPS};
pub use integrate::{Method, integrate};
pub use solution::{Solution, Status};
pub use trajectory::Trajectory;
