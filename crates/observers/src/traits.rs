//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasStep`]: events that carry an iteration or step number
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numkit_core::Observer;
//! use numkit_observers::traits::{CanStopEarly, HasResidual, HasStep};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasResidual + HasStep, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.step() >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use numkit_solvers::{equation, transient};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a step or iteration number.
pub trait HasStep {
    /// Returns the step number for this event.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasResidual ---

impl HasResidual for equation::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- HasStep ---

impl HasStep for equation::Event {
    fn step(&self) -> usize {
        self.iter
    }
}

impl HasStep for transient::Event {
    fn step(&self) -> usize {
        self.step
    }
}

// --- CanStopEarly ---

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
