#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Inputs for every method the demo runs.
///
/// Missing fields in a parameter file fall back to [`Params::default`], which
/// brackets the real root of `x³ − x − 2`, integrates `x²` over `[0, 1]`, and
/// integrates `dy/dx = x + y` from `y(0) = 1` to `x = 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Sign-change bracket for bisection and false position.
    pub bracket: [f64; 2],

    /// Starting guess for Newton-Raphson.
    pub guess: f64,

    /// Starting points for the secant method.
    pub secant_start: [f64; 2],

    /// Iteration budget for every root finder.
    pub max_iters: usize,

    /// Convergence tolerance for every root finder.
    pub tol: f64,

    /// Bounds for Simpson's rule.
    pub interval: [f64; 2],

    /// Number of Simpson sub-intervals; must be even.
    pub intervals: usize,

    /// Start of the ODE interval.
    pub x0: f64,

    /// End of the ODE interval.
    pub x_end: f64,

    /// ODE step size.
    pub h: f64,

    /// Initial value `y(x0)`.
    pub y0: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            bracket: [1.0, 2.0],
            guess: 1.5,
            secant_start: [1.0, 2.0],
            max_iters: 100,
            tol: 1e-6,
            interval: [0.0, 1.0],
            intervals: 10,
            x0: 0.0,
            x_end: 1.0,
            h: 0.1,
            y0: 1.0,
        }
    }
}

impl Params {
    /// Parses parameters from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed, has a field of the wrong
    /// type, or names a field `Params` does not have.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
