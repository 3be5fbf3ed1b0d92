//! Numerical solvers for numkit.
//!
//! Every solver is a pure function over caller-owned inputs. Iterative solvers
//! accept an [`Observer`] so callers can watch progress or stop early.
//!
//! # Modules
//!
//! - [`equation`]: root finding: bisection, false position, Newton-Raphson, secant
//! - [`quadrature`]: definite integrals with composite Simpson's rule
//! - [`transient`]: fixed-step Euler and Runge-Kutta integration of `dy/dx = f(x, y)`
//!
//! [`Observer`]: numkit_core::Observer

mod kind;

pub mod equation;
pub mod quadrature;
pub mod transient;

pub use kind::ErrorKind;
