//! Secant method: Newton-style steps with a finite-difference slope.
//!
//! ```text
//! x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! The search stops once `|x2 - x1| < tol`; otherwise `(x0, x1)` shifts to
//! `(x1, x2)`. No bracket is maintained, so the iterates may leave the
//! interval spanned by the starting points.

use numkit_core::{Observer, ScalarFunction};

use super::{Action, Config, Error, Event, Solution, Status, evaluate};

/// Finds a root of `f` from the starting pair `[x0, x1]` using the secant method.
///
/// # Errors
///
/// Returns an error if a starting point is non-finite, if `f` returns a
/// non-finite value, if two consecutive residuals are exactly equal, or if
/// `config.max_iters()` steps pass without convergence.
#[allow(clippy::float_cmp)]
pub fn solve<F, Obs>(
    f: &F,
    start: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [mut x0, mut x1] = start;
    for value in start {
        if !value.is_finite() {
            return Err(Error::NonFiniteStart { value });
        }
    }

    let mut f0 = evaluate::residual(f, x0)?;
    let mut f1 = evaluate::residual(f, x1)?;

    for iter in 1..=config.max_iters() {
        if f1 == f0 {
            return Err(Error::DegenerateStep {
                x0,
                x1,
                residual: f1,
            });
        }

        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        let f2 = evaluate::residual(f, x2)?;

        let event = Event {
            iter,
            x: x2,
            residual: f2,
            bracket: None,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_event(&event, Status::StoppedByObserver));
        }

        if (x2 - x1).abs() < config.tol() {
            return Ok(Solution::from_event(&event, Status::Converged));
        }

        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        x: x1,
        residual: f1,
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F>(f: &F, start: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(f, start, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::ErrorKind;

    #[test]
    fn rejects_equal_residuals_after_a_step() {
        // Flat below -1: the first step lands on x = -1, where f matches f(-3).
        let f = |x: f64| x.max(-1.0);

        let mut iters = 0;
        let error = solve(&f, [1.0, -3.0], &Config::default(), |_event: &Event| {
            iters += 1;
            None
        })
        .expect_err("flat region");

        assert_eq!(iters, 1);
        assert_eq!(
            error,
            Error::DegenerateStep {
                x0: -3.0,
                x1: -1.0,
                residual: -1.0,
            }
        );
        assert_eq!(error.kind(), ErrorKind::DegenerateStep);
    }

    #[test]
    fn finds_cubic_root() {
        let f = |x: f64| x * x * x - x - 2.0;

        let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 1.521_379_706_804_567_6, epsilon = 1e-8);
    }

    #[test]
    fn start_points_need_not_bracket_the_root() {
        let f = |x: f64| x * x - 2.0;

        let solution = solve_unobserved(&f, [3.0, 4.0], &Config::default()).expect("should solve");

        assert_relative_eq!(solution.x, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn first_step_is_secant_intercept() {
        let f = |x: f64| x * x - 4.0;

        let mut steps = Vec::new();
        solve(&f, [0.0, 4.0], &Config::default(), |event: &Event| {
            steps.push(*event);
            None
        })
        .expect("should solve");

        // Secant through (0, -4) and (4, 12) crosses zero at x = 1.
        assert_relative_eq!(steps[0].x, 1.0);
        assert_relative_eq!(steps[0].residual, -3.0);
        assert!(steps.iter().all(|event| event.bracket.is_none()));
    }

    #[test]
    fn errors_on_equal_residuals() {
        // Symmetric points on an even function.
        let f = |x: f64| x * x - 1.0;

        let result = solve_unobserved(&f, [-2.0, 2.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::DegenerateStep {
                x0: -2.0,
                x1: 2.0,
                residual: 3.0,
            })
        );
    }

    #[test]
    fn errors_on_non_finite_start() {
        let f = |x: f64| x;

        let result = solve_unobserved(&f, [0.0, f64::INFINITY], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));
    }

    #[test]
    fn errors_when_budget_runs_out() {
        let f = |x: f64| x * x * x - x - 2.0;
        let config = Config::new(2, 1e-12).expect("valid config");

        let result = solve_unobserved(&f, [1.0, 2.0], &config);

        assert!(matches!(result, Err(Error::MaxIters { iters: 2, .. })));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let f = |x: f64| x.exp() - 3.0;
        let config = Config::default();

        let first = solve_unobserved(&f, [0.0, 2.0], &config);
        let second = solve_unobserved(&f, [0.0, 2.0], &config);

        assert_eq!(first, second);
    }
}
