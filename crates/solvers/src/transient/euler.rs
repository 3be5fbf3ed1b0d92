//! Explicit Euler integrator.
//!
//! Steps the solution forward along the slope at the start of each step:
//!
//! ```text
//! y_{n+1} = y_n + h * f(x_n, y_n)
//! ```
//!
//! # Example
//!
//! ```
//! use numkit_solvers::transient::{Grid, euler};
//!
//! let grid = Grid::new(0.0, 1.0, 0.5)?;
//! let solution = euler::solve_unobserved(&|x: f64, y: f64| x + y, 1.0, &grid)?;
//!
//! // y1 = 1 + 0.5 * (0 + 1) = 1.5, y2 = 1.5 + 0.5 * (0.5 + 1.5) = 2.5
//! assert_eq!(solution.trajectory.y(), [1.0, 1.5, 2.5]);
//! # Ok::<(), numkit_solvers::transient::Error>(())
//! ```

use numkit_core::{BivariateFunction, Observer};

use super::{Action, Error, Event, Grid, Method, Solution, integrate};

/// The explicit Euler step rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Method for Euler {
    fn step<F>(&self, f: &F, x: f64, y: f64, h: f64) -> f64
    where
        F: BivariateFunction + ?Sized,
    {
        y + h * f.eval(x, y)
    }
}

/// Integrates `dy/dx = f(x, y)` from `y(grid.x0()) = y0` using explicit Euler.
///
/// The observer receives an [`Event`] for the initial condition and after
/// each step, and may return [`Action::StopEarly`] to end the integration.
///
/// # Errors
///
/// Returns an error if `y0` is non-finite.
pub fn solve<F, Obs>(f: &F, y0: f64, grid: &Grid, observer: Obs) -> Result<Solution, Error>
where
    F: BivariateFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    integrate(&Euler, f, y0, grid, observer)
}

/// Integrates using explicit Euler without observation.
///
/// # Errors
///
/// Returns an error if `y0` is non-finite.
pub fn solve_unobserved<F>(f: &F, y0: f64, grid: &Grid) -> Result<Solution, Error>
where
    F: BivariateFunction + ?Sized,
{
    solve(f, y0, grid, ())
}
