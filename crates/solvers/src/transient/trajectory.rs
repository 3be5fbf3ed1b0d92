/// Ordered `(x, y)` samples produced by an integrator.
///
/// Stored as two parallel sequences so callers can hand `x()` and `y()`
/// straight to a plotting or tabulation layer. Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Trajectory {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Returns the grid nodes.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the solution estimates at each node.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the last sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        self.x.last().copied().zip(self.y.last().copied())
    }

    /// Returns an iterator over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Consumes the trajectory and returns the `(x, y)` sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
