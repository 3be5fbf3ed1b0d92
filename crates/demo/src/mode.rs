use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A single numerical method the demo can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Bisection,
    NewtonRaphson,
    Secant,
    FalsePosition,
    Simpson,
    Euler,
    RungeKutta4,
}

impl Method {
    /// Every method, in the order `Mode::All` runs them.
    pub const ALL: [Method; 7] = [
        Method::Bisection,
        Method::NewtonRaphson,
        Method::Secant,
        Method::FalsePosition,
        Method::Simpson,
        Method::Euler,
        Method::RungeKutta4,
    ];

    /// Returns the human-readable method name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Bisection => "Bisection Method",
            Method::NewtonRaphson => "Newton-Raphson Method",
            Method::Secant => "Secant Method",
            Method::FalsePosition => "False Position Method",
            Method::Simpson => "Simpson's Rule",
            Method::Euler => "Euler Method",
            Method::RungeKutta4 => "Runge-Kutta Method",
        }
    }
}

/// Which methods a demo run covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    All,
    Only(Method),
}

impl Mode {
    /// Returns the methods this mode runs, in order.
    #[must_use]
    pub fn methods(self) -> Vec<Method> {
        match self {
            Mode::All => Method::ALL.to_vec(),
            Mode::Only(method) => vec![method],
        }
    }
}

/// The command-line mode did not name a known method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "unknown mode `{0}`, expected one of: all, bisect, newton, secant, false-position, simpson, euler, rk4"
)]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = match s {
            "all" => return Ok(Mode::All),
            "bisect" => Method::Bisection,
            "newton" => Method::NewtonRaphson,
            "secant" => Method::Secant,
            "false-position" => Method::FalsePosition,
            "simpson" => Method::Simpson,
            "euler" => Method::Euler,
            "rk4" => Method::RungeKutta4,
            other => return Err(UnknownMode(other.to_owned())),
        };
        Ok(Mode::Only(method))
    }
}
