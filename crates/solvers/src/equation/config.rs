use thiserror::Error;

/// Iteration budget shared by all equation solvers.
///
/// `tol` is compared against the residual `|f(x)|` by the bracketing solvers
/// and against the step `|x_new - x|` by Newton-Raphson and secant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating an equation solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config with a validated budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(Config::new(config.max_iters(), config.tol()), Ok(config));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
    }
}
