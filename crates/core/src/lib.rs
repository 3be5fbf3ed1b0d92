//! Core traits for numkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`]: a callable mapping one real number to another,
//!   consumed by root finders and quadrature
//! - [`BivariateFunction`]: a callable mapping `(x, y)` to a real number,
//!   consumed as the right-hand side of `dy/dx = f(x, y)`
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{BivariateFunction, ScalarFunction};
pub use observer::Observer;
