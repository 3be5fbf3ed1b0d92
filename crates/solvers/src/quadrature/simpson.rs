//! Composite Simpson's rule.
//!
//! Splits `[a, b]` into `n` equal sub-intervals of width `h = (b - a) / n`,
//! samples `f` at the `n + 1` nodes, and combines the samples with weights
//! `1, 4, 2, 4, ..., 2, 4, 1` scaled by `h / 3`. `n` must be even because the
//! rule fits one parabola across each pair of sub-intervals.
//!
//! # Example
//!
//! ```
//! use numkit_solvers::quadrature::simpson;
//!
//! let area = simpson::integrate(&|x: f64| x * x, [0.0, 1.0], 10)?;
//! assert!((area - 1.0 / 3.0).abs() < 1e-12);
//! # Ok::<(), simpson::Error>(())
//! ```

use numkit_core::ScalarFunction;
use thiserror::Error;

use crate::ErrorKind;

/// Errors that can occur when applying Simpson's rule.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("intervals must be positive")]
    ZeroIntervals,

    #[error("intervals must be even, got {intervals}")]
    OddIntervals { intervals: usize },

    #[error("non-finite integration bound: {value}")]
    NonFiniteBound { value: f64 },
}

impl Error {
    /// Returns the broad classification of this error.
    ///
    /// Every Simpson error is a precondition failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Precondition
    }
}

/// Integrates `f` over `bounds` with `intervals` equal sub-intervals.
///
/// Bounds may be given in either order; reversing them negates the result,
/// and equal bounds give zero.
///
/// # Errors
///
/// Returns an error if `intervals` is zero or odd, or if a bound is non-finite.
pub fn integrate<F>(f: &F, bounds: [f64; 2], intervals: usize) -> Result<f64, Error>
where
    F: ScalarFunction + ?Sized,
{
    if intervals == 0 {
        return Err(Error::ZeroIntervals);
    }
    if intervals % 2 == 1 {
        return Err(Error::OddIntervals { intervals });
    }

    let [a, b] = bounds;
    for value in bounds {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { value });
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / intervals as f64;

    let interior: f64 = (1..intervals)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = a + i as f64 * h;
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f.eval(x)
        })
        .sum();

    Ok(h / 3.0 * (f.eval(a) + interior + f.eval(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn integrates_square() {
        let area = integrate(&|x: f64| x * x, [0.0, 1.0], 10).expect("even intervals");
        assert_abs_diff_eq!(area, 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn exact_for_cubics() {
        // Simpson's rule has zero error for polynomials up to degree three.
        let f = |x: f64| x * x * x - 2.0 * x + 1.0;
        let area = integrate(&f, [-1.0, 2.0], 2).expect("even intervals");
        // x^4/4 - x^2 + x from -1 to 2: (4 - 4 + 2) - (1/4 - 1 - 1) = 3.75
        assert_relative_eq!(area, 3.75, epsilon = 1e-12);
    }

    #[test]
    fn integrates_sine_over_half_period() {
        let area = integrate(&f64::sin, [0.0, PI], 100).expect("even intervals");
        assert_abs_diff_eq!(area, 2.0, epsilon = 1e-7);
    }

    #[test]
    fn reversed_bounds_negate_result() {
        let f = |x: f64| x.exp();
        let forward = integrate(&f, [0.0, 1.0], 20).expect("even intervals");
        let backward = integrate(&f, [1.0, 0.0], 20).expect("even intervals");
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn equal_bounds_give_zero() {
        let area = integrate(&|x: f64| x + 1.0, [3.0, 3.0], 4).expect("even intervals");
        assert_abs_diff_eq!(area, 0.0);
    }

    #[test]
    fn rejects_odd_intervals() {
        for intervals in [1, 3, 9, 101] {
            assert_eq!(
                integrate(&|x: f64| x, [0.0, 1.0], intervals),
                Err(Error::OddIntervals { intervals })
            );
        }
    }

    #[test]
    fn rejects_zero_intervals() {
        assert_eq!(
            integrate(&|x: f64| x, [0.0, 1.0], 0),
            Err(Error::ZeroIntervals)
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let result = integrate(&|x: f64| x, [0.0, f64::INFINITY], 10);
        assert!(matches!(result, Err(Error::NonFiniteBound { .. })));
        assert_eq!(
            result.map_err(|error| error.kind()),
            Err(ErrorKind::Precondition)
        );
    }
}
