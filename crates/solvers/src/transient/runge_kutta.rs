//! Classical fourth-order Runge-Kutta integrator.
//!
//! Each step combines four stage derivatives:
//!
//! ```text
//! k1 = h * f(x,         y)
//! k2 = h * f(x + h / 2, y + k1 / 2)
//! k3 = h * f(x + h / 2, y + k2 / 2)
//! k4 = h * f(x + h,     y + k3)
//! y_{n+1} = y_n + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```

use numkit_core::{BivariateFunction, Observer};

use super::{Action, Error, Event, Grid, Method, Solution, integrate};

/// The classical Runge-Kutta step rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RungeKutta4;

impl Method for RungeKutta4 {
    fn step<F>(&self, f: &F, x: f64, y: f64, h: f64) -> f64
    where
        F: BivariateFunction + ?Sized,
    {
        let half = 0.5 * h;

        let k1 = h * f.eval(x, y);
        let k2 = h * f.eval(x + half, y + 0.5 * k1);
        let k3 = h * f.eval(x + half, y + 0.5 * k2);
        let k4 = h * f.eval(x + h, y + k3);

        y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}

/// Integrates `dy/dx = f(x, y)` from `y(grid.x0()) = y0` using classical
/// fourth-order Runge-Kutta.
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
    integrate(&RungeKutta4, f, y0, grid, observer)
}

/// Integrates using classical Runge-Kutta without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::transient::{Status, euler};

    #[test]
    fn exact_for_cubic_solutions() {
        // y = x^3 solves dy/dx = 3x^2; RK4 integrates cubics in x exactly.
        let grid = Grid::new(0.0, 2.0, 0.5).expect("valid grid");

        let solution =
            solve_unobserved(&|x: f64, _y: f64| 3.0 * x * x, 0.0, &grid).expect("should solve");

        for (x, y) in solution.trajectory.iter() {
            assert_relative_eq!(y, x.powi(3), epsilon = 1e-12);
        }
    }

    #[test]
    fn single_step_stages() {
        // dy/dx = y with h = 1: k1 = 1, k2 = 1.5, k3 = 1.75, k4 = 2.75.
        let y = RungeKutta4.step(&|_x: f64, y: f64| y, 0.0, 1.0, 1.0);
        assert_relative_eq!(y, 1.0 + (1.0 + 3.0 + 3.5 + 2.75) / 6.0);
    }

    #[test]
    fn approximates_exponential() {
        let grid = Grid::new(0.0, 1.0, 0.01).expect("valid grid");

        let solution = solve_unobserved(&|_x: f64, y: f64| y, 1.0, &grid).expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.trajectory.len(), 101);
        let (_, y) = solution.trajectory.last().expect("non-empty");
        assert_relative_eq!(y, std::f64::consts::E, epsilon = 1e-9);
    }

    #[test]
    fn more_accurate_than_euler() {
        // dy/dx = x + y, y(0) = 1 has exact solution y = 2e^x - x - 1.
        let f = |x: f64, y: f64| x + y;
        let exact = |x: f64| 2.0 * x.exp() - x - 1.0;
        let grid = Grid::new(0.0, 1.0, 0.1).expect("valid grid");

        let rk4 = solve_unobserved(&f, 1.0, &grid).expect("should solve");
        let euler = euler::solve_unobserved(&f, 1.0, &grid).expect("should solve");

        for ((x, y_rk4), (_, y_euler)) in rk4.trajectory.iter().zip(euler.trajectory.iter()).skip(1)
        {
            assert!((y_rk4 - exact(x)).abs() < (y_euler - exact(x)).abs());
        }
    }
}
