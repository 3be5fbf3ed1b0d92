//! Command-line driver over the numkit solvers.
//!
//! Runs each method on a fixed problem and collects the results into a
//! [`Report`]. Expression parsing is out of scope, so the functions are
//! plain Rust:
//!
//! - root finders solve `x³ − x − 2 = 0` (derivative `3x² − 1`);
//! - Simpson's rule integrates `x²`;
//! - the integrators solve `dy/dx = x + y`.
//!
//! Inputs come from [`Params`]. A method that fails is reported with its
//! error message and does not stop the others.
//!
//! # Example
//!
//! ```
//! use numkit_demo::{Mode, Params, run};
//!
//! let report = run(Mode::All, &Params::default());
//!
//! assert_eq!(report.entries.len(), 7);
//! assert!(report.entries.iter().all(|entry| entry.outcome.is_ok()));
//! ```

mod mode;
mod params;
mod report;

use numkit_observers::Trace;
use numkit_solvers::{
    equation::{self, Config, bisection, false_position, newton_raphson, secant},
    quadrature::simpson,
    transient::{self, Grid, euler, runge_kutta},
};

pub use mode::{Method, Mode, UnknownMode};
pub use params::Params;
pub use report::{Entry, Outcome, Report};

/// The equation every root finder solves.
#[must_use]
pub fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

/// Derivative of [`cubic`].
#[must_use]
pub fn cubic_derivative(x: f64) -> f64 {
    3.0 * x * x - 1.0
}

/// The integrand for Simpson's rule.
#[must_use]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Right-hand side of the ODE `dy/dx = x + y`.
#[must_use]
pub fn slope(x: f64, y: f64) -> f64 {
    x + y
}

/// Runs every method selected by `mode` and collects the outcomes.
#[must_use]
pub fn run(mode: Mode, params: &Params) -> Report {
    let entries = mode
        .methods()
        .into_iter()
        .map(|method| Entry {
            method,
            outcome: run_method(method, params),
        })
        .collect();

    Report { entries }
}

fn run_method(method: Method, params: &Params) -> Outcome {
    match method {
        Method::Bisection => find_root(params, |config, trace| {
            bisection::solve(&cubic, params.bracket, config, trace)
        }),
        Method::NewtonRaphson => find_root(params, |config, trace| {
            newton_raphson::solve(&cubic, &cubic_derivative, params.guess, config, trace)
        }),
        Method::Secant => find_root(params, |config, trace| {
            secant::solve(&cubic, params.secant_start, config, trace)
        }),
        Method::FalsePosition => find_root(params, |config, trace| {
            false_position::solve(&cubic, params.bracket, config, trace)
        }),
        Method::Simpson => match simpson::integrate(&square, params.interval, params.intervals) {
            Ok(value) => Outcome::Integral { value },
            Err(error) => Outcome::failed(error.kind(), error),
        },
        Method::Euler => integrate(params, |grid| {
            euler::solve_unobserved(&slope, params.y0, grid)
        }),
        Method::RungeKutta4 => integrate(params, |grid| {
            runge_kutta::solve_unobserved(&slope, params.y0, grid)
        }),
    }
}

/// Builds the config, runs `solve` with a residual trace, and wraps the result.
fn find_root<S>(params: &Params, solve: S) -> Outcome
where
    S: FnOnce(&Config, &mut Trace<2>) -> Result<equation::Solution, equation::Error>,
{
    let result = Config::new(params.max_iters, params.tol)
        .map_err(equation::Error::from)
        .and_then(|config| {
            let mut trace = Trace::new(["x", "residual"]);
            solve(&config, &mut trace).map(|solution| (solution, trace))
        });

    match result {
        Ok((solution, trace)) => Outcome::Root {
            solution,
            history: trace.points(1).to_vec(),
        },
        Err(error) => Outcome::failed(error.kind(), error),
    }
}

/// Builds the grid, runs `solve`, and wraps the trajectory.
fn integrate<S>(params: &Params, solve: S) -> Outcome
where
    S: FnOnce(&Grid) -> Result<transient::Solution, transient::Error>,
{
    match Grid::new(params.x0, params.x_end, params.h).and_then(|grid| solve(&grid)) {
        Ok(solution) => Outcome::Trajectory {
            trajectory: solution.trajectory,
        },
        Err(error) => Outcome::failed(error.kind(), error),
    }
}
