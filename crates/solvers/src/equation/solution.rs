use super::Event;

/// Indicates how a successful solve terminated.
///
/// Exhausting the iteration budget is not a status; it is reported as
/// [`Error::MaxIters`](super::Error::MaxIters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an equation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution from the event of the final iteration.
    pub(super) fn from_event(event: &Event, status: Status) -> Self {
        Self {
            status,
            x: event.x,
            residual: event.residual,
            iters: event.iter,
        }
    }
}
