/// Iteration event emitted by every equation solver.
///
/// One event is emitted per iteration, after the new estimate has been
/// evaluated and before the convergence test runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Root estimate produced by this iteration.
    pub x: f64,

    /// Residual `f(x)` at the estimate.
    pub residual: f64,

    /// Bracket the estimate was drawn from, for bracketing solvers.
    pub bracket: Option<[f64; 2]>,
}

/// Control actions supported by the equation solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    StopEarly,
}
