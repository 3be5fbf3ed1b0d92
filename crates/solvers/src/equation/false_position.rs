//! False position (regula falsi): chord interpolation inside a sign-change bracket.
//!
//! Each iteration evaluates `c = b - f(b) * (b - a) / (f(b) - f(a))`, where the
//! chord between the bracket endpoints crosses zero. The search stops once
//! `|f(c)| < tol` or the bracket it was drawn from is narrower than `tol`.
//! Bracket updates follow [`bisection`](super::bisection).
//!
//! One endpoint of a false-position bracket often never moves, so the width
//! test alone rarely fires; the residual test does most of the work.

use numkit_core::{Observer, ScalarFunction};

use super::{
    Action, Config, Error, Event, Solution,
    bracket::Bracket,
    bracketing::{Rule, search},
};

struct Chord;

impl Rule for Chord {
    fn next(&self, bracket: &Bracket) -> f64 {
        bracket.chord_root()
    }

    fn is_converged(&self, bracket: &Bracket, residual: f64, tol: f64) -> bool {
        residual.abs() < tol || bracket.width() < tol
    }
}

/// Finds a root of `f` inside `bracket` using false position.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// straddle a sign change; if `f` returns a non-finite value; or if
/// `config.max_iters()` iterations pass without convergence.
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
    search(f, &Chord, bracket, config, observer)
}

/// Runs false position without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::{BracketError, Status, bisection};

    #[test]
    fn linear_function_converges_in_one_step() {
        let f = |x: f64| 2.0 * x - 1.0;

        let solution =
            solve_unobserved(&f, [-3.0, 4.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 0.5);
    }

    #[test]
    fn finds_cubic_root() {
        let f = |x: f64| x * x * x - x - 2.0;

        let solution =
            solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.residual.abs() < 1e-6);
        assert_relative_eq!(solution.x, 1.521_379_706_804_567_6, epsilon = 1e-6);
    }

    #[test]
    fn beats_bisection_on_smooth_function() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::default();

        let chord = solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");
        let halving = bisection::solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");

        assert!(chord.iters < halving.iters);
    }

    #[test]
    fn first_estimate_is_chord_root() {
        let f = |x: f64| x * x - 4.0;

        let mut first = None;
        solve(&f, [0.0, 4.0], &Config::default(), |event: &Event| {
            first.get_or_insert(*event);
            None
        })
        .expect("should solve");

        // Chord from (0, -4) to (4, 12) crosses zero at x = 1.
        let first = first.expect("at least one event");
        assert_eq!(first.iter, 1);
        assert_relative_eq!(first.x, 1.0);
        assert_eq!(first.bracket, Some([0.0, 4.0]));
    }

    #[test]
    fn estimates_stay_inside_bracket() {
        let f = |x: f64| x.cos() - x;

        solve(&f, [2.0, -1.0], &Config::default(), |event: &Event| {
            assert!((-1.0..=2.0).contains(&event.x));
            None
        })
        .expect("should solve");
    }

    #[test]
    fn errors_on_no_sign_change() {
        let f = |x: f64| x * x + 1.0;

        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        );
    }

    #[test]
    fn errors_when_budget_runs_out() {
        let f = |x: f64| x.powi(10) - 0.5;
        let config = Config::new(2, 1e-12).expect("valid config");

        let result = solve_unobserved(&f, [0.0, 1.5], &config);

        assert!(matches!(result, Err(Error::MaxIters { iters: 2, .. })));
    }
}
