use numkit_core::Observer;

use crate::traits::{CanStopEarly, HasResidual, HasStep};

/// Stops a solver once its residual drops below a threshold.
///
/// The threshold is only checked from step `min_iters` onward, which keeps an
/// early lucky estimate from ending the search. Works with any solver whose
/// events report a residual and a step number.
///
/// # Example
///
/// ```
/// use numkit_observers::ResidualThreshold;
/// use numkit_solvers::equation::{Config, Status, bisection};
///
/// let f = |x: f64| x * x - 2.0;
/// let observer = ResidualThreshold::new(1e-3, 0);
///
/// let solution = bisection::solve(&f, [0.0, 2.0], &Config::default(), observer)?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.residual.abs() < 1e-3);
/// # Ok::<(), numkit_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualThreshold {
    threshold: f64,
    min_iters: usize,
}

impl ResidualThreshold {
    /// Creates an observer that stops once `|residual| < threshold` at or
    /// after step `min_iters`.
    #[must_use]
    pub fn new(threshold: f64, min_iters: usize) -> Self {
        Self {
            threshold,
            min_iters,
        }
    }

    /// Returns the residual threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the first step at which the threshold is checked.
    #[must_use]
    pub fn min_iters(&self) -> usize {
        self.min_iters
    }
}

impl<E, A> Observer<E, A> for ResidualThreshold
where
    E: HasResidual + HasStep,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.step() >= self.min_iters && event.residual().abs() < self.threshold)
            .then(A::stop_early)
    }
}
