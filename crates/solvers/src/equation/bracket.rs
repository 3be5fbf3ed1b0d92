use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Residuals at the endpoints are not of strictly opposite sign.
    #[error("residuals do not change sign across the bracket")]
    NoSignChange,
}

/// Ordered finite bounds for a bracketing solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    #[allow(clippy::float_cmp)]
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// Current bracket bounds and the residuals at each end.
///
/// The residuals always have strictly opposite signs, so a continuous
/// function has a root somewhere inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_residual: f64,
    right_residual: f64,
}

impl Bracket {
    /// Creates a validated bracket from bounds and their residuals.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless the residuals have strictly
    /// opposite signs. A zero residual at an endpoint does not qualify.
    pub(super) fn new(
        bounds: Bounds,
        left_residual: f64,
        right_residual: f64,
    ) -> Result<Self, BracketError> {
        let opposite = (left_residual < 0.0 && right_residual > 0.0)
            || (left_residual > 0.0 && right_residual < 0.0);
        if !opposite {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_residual,
            right_residual,
        })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the point where the chord between the endpoints crosses zero.
    ///
    /// Computed as `b - f(b) * (b - a) / (f(b) - f(a))`. The denominator is
    /// never zero because the residuals have opposite signs.
    pub(super) fn chord_root(&self) -> f64 {
        let (a, b) = (self.left, self.right);
        let (fa, fb) = (self.left_residual, self.right_residual);
        b - fb * (b - a) / (fb - fa)
    }

    /// Returns the bracket width.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Replaces the endpoint whose residual shares the sign of `residual`.
    ///
    /// If `f(left) * residual < 0` the root lies in `[left, x]` so `right`
    /// moves; otherwise `left` moves.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if (self.left_residual < 0.0) == (residual < 0.0) {
            self.left = x;
            self.left_residual = residual;
        } else {
            self.right = x;
            self.right_residual = residual;
        }
    }
}
