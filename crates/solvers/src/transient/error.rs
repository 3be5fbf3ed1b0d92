use thiserror::Error;

use crate::ErrorKind;

/// Errors that can occur when building a grid or starting an integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("non-finite interval bound: {value}")]
    NonFiniteBound { value: f64 },

    #[error("end of interval ({x_end}) must be greater than start ({x0})")]
    EmptySpan { x0: f64, x_end: f64 },

    #[error("step size must be finite and positive, got {h}")]
    InvalidStep { h: f64 },

    #[error("interval of length {span} is too small for step size {h}")]
    StepExceedsSpan { span: f64, h: f64 },

    #[error("interval of length {span} needs too many steps of size {h}")]
    TooManySteps { span: f64, h: f64 },

    #[error("non-finite initial value: {y0}")]
    NonFiniteInitial { y0: f64 },
}

impl Error {
    /// Returns the broad classification of this error.
    ///
    /// Every transient error is a precondition failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Precondition
    }
}
