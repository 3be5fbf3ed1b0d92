use super::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Completed every step of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an ODE integration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Samples from each completed step, including the initial condition.
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,
}
