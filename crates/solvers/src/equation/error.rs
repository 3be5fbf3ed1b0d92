use thiserror::Error;

use crate::ErrorKind;

use super::{BracketError, ConfigError};

/// Errors that can occur while solving a scalar equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("non-finite starting point: {value}")]
    NonFiniteStart { value: f64 },

    #[error("no convergence after {iters} iterations: last x = {x}, residual = {residual}")]
    MaxIters { iters: usize, x: f64, residual: f64 },

    #[error("zero derivative at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("degenerate secant step: f({x0}) == f({x1}) == {residual}")]
    DegenerateStep { x0: f64, x1: f64, residual: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl Error {
    /// Returns the broad classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig(_) | Self::InvalidBracket(_) | Self::NonFiniteStart { .. } => {
                ErrorKind::Precondition
            }
            Self::MaxIters { .. }
            | Self::NonFiniteDerivative { .. }
            | Self::NonFiniteResidual { .. } => ErrorKind::Convergence,
            Self::ZeroDerivative { .. } => ErrorKind::ZeroDerivative,
            Self::DegenerateStep { .. } => ErrorKind::DegenerateStep,
        }
    }
}
