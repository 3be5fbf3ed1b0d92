//! Reusable observers for the numkit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the equation solvers and the integrators.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ResidualThreshold`]: stops a solver once its residual is small enough
//! - [`Trace`]: records named series of points for later display
//!
//! [`Observer`]: numkit_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod threshold;
mod trace;

pub use threshold::ResidualThreshold;
pub use trace::{Trace, Traceable};
