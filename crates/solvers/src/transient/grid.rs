use super::Error;

/// Relative distance from an integer within which a span/step ratio counts
/// as that integer, so `0.3 / 0.1` gives 3 steps rather than 2.
const SNAP_TOL: f64 = 1e-9;

/// Largest step count a grid accepts.
pub const MAX_STEPS: usize = 10_000_000;

/// A validated fixed-step grid `x0, x0 + h, ..., x0 + steps * h`.
///
/// The step count is `floor((x_end - x0) / h)`, so the grid holds
/// `steps + 1` nodes. `x_end` itself is a node only when the span is a whole
/// number of steps; otherwise the last node falls short of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    x0: f64,
    x_end: f64,
    h: f64,
    steps: usize,
}

impl Grid {
    /// Creates a grid covering `[x0, x_end]` with step `h`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is non-finite, if `x_end <= x0`, if `h` is
    /// not finite and positive, if the span is shorter than one step, or if
    /// it needs more than [`MAX_STEPS`] steps.
    pub fn new(x0: f64, x_end: f64, h: f64) -> Result<Self, Error> {
        for value in [x0, x_end] {
            if !value.is_finite() {
                return Err(Error::NonFiniteBound { value });
            }
        }
        if x_end <= x0 {
            return Err(Error::EmptySpan { x0, x_end });
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(Error::InvalidStep { h });
        }

        let span = x_end - x0;
        let ratio = span / h;
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_STEPS as f64;
        if !ratio.is_finite() || ratio.floor() > limit {
            return Err(Error::TooManySteps { span, h });
        }

        let steps = step_count(ratio);
        if steps == 0 {
            return Err(Error::StepExceedsSpan { span, h });
        }

        Ok(Self {
            x0,
            x_end,
            h,
            steps,
        })
    }

    /// Returns the first node.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Returns the requested end of the interval.
    #[must_use]
    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// Returns the step size.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns the number of steps between the first and last node.
    ///
    /// The grid holds `steps + 1` nodes. The count is between 1 and
    /// [`MAX_STEPS`].
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns node `i`, computed as `x0 + i * h` rather than by accumulation.
    #[must_use]
    pub fn node(&self, i: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        self.x0 + i * self.h
    }

    /// Returns an iterator over every node in order.
    pub fn nodes(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(|i| self.node(i))
    }
}

/// Floors a span/step ratio, snapping ratios within `SNAP_TOL` of an integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_count(ratio: f64) -> usize {
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= SNAP_TOL * nearest.max(1.0) {
        nearest as usize
    } else {
        ratio.floor() as usize
    }
}
