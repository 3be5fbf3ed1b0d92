//! Bisection: repeatedly halve a sign-change bracket.
//!
//! Each iteration evaluates the midpoint `c = (a + b) / 2` and stops once
//! `|f(c)| < tol`. Otherwise the endpoint whose residual shares the sign of
//! `f(c)` moves to `c`. The reported root is the last midpoint evaluated.

use numkit_core::{Observer, ScalarFunction};

use super::{
    Action, Config, Error, Event, Solution,
    bracket::Bracket,
    bracketing::{Rule, search},
};

struct Midpoint;

impl Rule for Midpoint {
    fn next(&self, bracket: &Bracket) -> f64 {
        bracket.midpoint()
    }

    fn is_converged(&self, _bracket: &Bracket, residual: f64, tol: f64) -> bool {
        residual.abs() < tol
    }
}

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The endpoints may be given in either order. Observers see each midpoint
/// and the bracket it was drawn from.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// straddle a sign change; if `f` returns a non-finite value; or if
/// `config.max_iters()` midpoints pass without convergence.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(f, &Midpoint, bracket, config, observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(f, bracket, config, ())
}
