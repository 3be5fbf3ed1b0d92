use numkit_core::{Observer, ScalarFunction};

use super::{
    Action, Config, Error, Event, Solution, Status,
    bracket::{Bounds, Bracket},
    evaluate,
};

/// How a bracketing solver picks its next estimate and tests convergence.
pub(super) trait Rule {
    /// Returns the next estimate, which must lie inside the bracket.
    fn next(&self, bracket: &Bracket) -> f64;

    /// Returns true if the estimate with `residual` ends the search.
    ///
    /// `bracket` is the bracket the estimate was drawn from.
    fn is_converged(&self, bracket: &Bracket, residual: f64, tol: f64) -> bool;
}

/// Runs a sign-change bracket search driven by `rule`.
///
/// Both endpoints are evaluated first; their residuals must have strictly
/// opposite signs. Each iteration evaluates the rule's next estimate, emits
/// an [`Event`], tests convergence, then replaces the endpoint whose residual
/// shares the estimate's sign.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a residual is non-finite, or
/// the iteration budget runs out.
pub(super) fn search<F, R, Obs>(
    f: &F,
    rule: &R,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    R: Rule,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();
    let left_residual = evaluate::residual(f, left)?;
    let right_residual = evaluate::residual(f, right)?;
    let mut bracket = Bracket::new(bounds, left_residual, right_residual)?;

    // Reported on budget exhaustion; starts at the better endpoint.
    let mut last = if left_residual.abs() <= right_residual.abs() {
        (left, left_residual)
    } else {
        (right, right_residual)
    };

    for iter in 1..=config.max_iters() {
        let x = rule.next(&bracket);
        let residual = evaluate::residual(f, x)?;

        let event = Event {
            iter,
            x,
            residual,
            bracket: Some(bracket.as_array()),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_event(&event, Status::StoppedByObserver));
        }

        if rule.is_converged(&bracket, residual, config.tol()) {
            return Ok(Solution::from_event(&event, Status::Converged));
        }

        bracket.shrink(x, residual);
        last = (x, residual);
    }

    let (x, residual) = last;
    Err(Error::MaxIters {
        iters: config.max_iters(),
        x,
        residual,
    })
}
