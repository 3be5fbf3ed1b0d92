/// Event emitted by the integrators for each grid node.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// Grid node.
    pub x: f64,

    /// Solution estimate at `x`.
    pub y: f64,
}

/// Control actions supported by the integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integrator early and return the trajectory so far.
    StopEarly,
}
