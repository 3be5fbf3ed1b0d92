//! Newton-Raphson: tangent-line steps from a single starting guess.
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The search stops once `|x_{n+1} - x_n| < tol`. The derivative is supplied
//! by the caller as a separate [`ScalarFunction`]; a zero derivative is
//! reported as [`Error::ZeroDerivative`] rather than dividing by zero.

use numkit_core::{Observer, ScalarFunction};

use super::{Action, Config, Error, Event, Solution, Status, evaluate};

/// Finds a root of `f` starting from `x0` using Newton-Raphson.
///
/// Each [`Event`] reports the new estimate and its residual; `bracket` is
/// always `None`.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, if `f` or `derivative` returns a
/// non-finite value, if the derivative is exactly zero at an iterate, or if
/// `config.max_iters()` steps pass without convergence.
#[allow(clippy::float_cmp)]
pub fn solve<F, D, Obs>(
    f: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { value: x0 });
    }

    let mut x = x0;
    let mut residual = evaluate::residual(f, x)?;

    for iter in 1..=config.max_iters() {
        let slope = derivative.eval(x);

        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }
        if !slope.is_finite() {
            return Err(Error::NonFiniteDerivative {
                x,
                derivative: slope,
            });
        }

        let next = x - residual / slope;
        let next_residual = evaluate::residual(f, next)?;

        let event = Event {
            iter,
            x: next,
            residual: next_residual,
            bracket: None,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_event(&event, Status::StoppedByObserver));
        }

        if (next - x).abs() < config.tol() {
            return Ok(Solution::from_event(&event, Status::Converged));
        }

        x = next;
        residual = next_residual;
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        x,
        residual,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
{
    solve(f, derivative, x0, config, ())
}
