use std::fmt;

use numkit_solvers::{ErrorKind, equation, transient::Trajectory};
use serde::Serialize;

use crate::Method;

/// Results of a demo run, one entry per method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
}

/// The outcome of running a single method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub method: Method,
    pub outcome: Outcome,
}

/// What a method produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A root finder succeeded.
    ///
    /// `history` holds `(iteration, residual)` for every iteration.
    Root {
        solution: equation::Solution,
        history: Vec<[f64; 2]>,
    },

    /// A quadrature rule succeeded.
    Integral { value: f64 },

    /// An integrator succeeded.
    Trajectory { trajectory: Trajectory },

    /// The method returned an error.
    Failed { kind: ErrorKind, message: String },
}

impl Outcome {
    pub(crate) fn failed(kind: ErrorKind, message: impl fmt::Display) -> Self {
        Outcome::Failed {
            kind,
            message: message.to_string(),
        }
    }

    /// Returns true unless the method returned an error.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.method.label();
        match &self.outcome {
            Outcome::Root { solution, .. } => writeln!(
                f,
                "Root found using {label}: {} ({} iterations)",
                solution.x, solution.iters
            ),
            Outcome::Integral { value } => writeln!(f, "Integral computed using {label}: {value}"),
            Outcome::Trajectory { trajectory } => {
                writeln!(f, "{label} Results:")?;
                for (x, y) in trajectory.iter() {
                    writeln!(f, "  x = {x:>8.4}  y = {y:.6}")?;
                }
                Ok(())
            }
            Outcome::Failed { message, .. } => writeln!(f, "{label} Error: {message}"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_entries_echo_the_error() {
        let entry = Entry {
            method: Method::Simpson,
            outcome: Outcome::failed(ErrorKind::Precondition, "intervals must be even, got 3"),
        };

        assert!(!entry.outcome.is_ok());
        assert_eq!(entry.to_string(), "Simpson's Rule Error: intervals must be even, got 3\n");
    }

    #[test]
    fn integral_entries_print_the_value() {
        let entry = Entry {
            method: Method::Simpson,
            outcome: Outcome::Integral { value: 0.5 },
        };

        assert_eq!(entry.to_string(), "Integral computed using Simpson's Rule: 0.5\n");
    }

    #[test]
    fn outcomes_serialize_with_a_tag() {
        let entry = Entry {
            method: Method::RungeKutta4,
            outcome: Outcome::failed(ErrorKind::Precondition, "step size must be positive"),
        };

        let json = serde_json::to_value(&entry).expect("serializable");

        assert_eq!(json["method"], "runge-kutta4");
        assert_eq!(json["outcome"]["outcome"], "failed");
        assert_eq!(json["outcome"]["kind"], "Precondition");
    }
}
