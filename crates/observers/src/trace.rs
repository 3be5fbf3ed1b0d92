//! Recording observer that captures solver progress as named series.
//!
//! See [`Trace`] and [`Traceable`] for usage.

use numkit_core::Observer;
use numkit_solvers::{equation, transient};

/// Extracts traceable data from a solver event.
///
/// Implement this on an event type to pass a [`Trace`] directly as a solver
/// observer. Return `None` from [`x`][Traceable::x] to skip the event
/// entirely; return `None` in a trace slot to skip that trace for the event.
///
/// Implemented for [`equation::Event`] as two traces (estimate and residual
/// against iteration) and for [`transient::Event`] as one trace (`y` against
/// `x`).
pub trait Traceable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl Traceable<2> for equation::Event {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x), Some(self.residual)]
    }
}

impl Traceable<1> for transient::Event {
    fn x(&self) -> Option<f64> {
        Some(self.x)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.y)]
    }
}

/// An observer that collects named series of `(x, y)` points during a solve.
///
/// The const generic `N` is the number of traces. Create with
/// [`Trace::new`], passing the trace names. Record data by either:
///
/// - **Direct path**: pass `&mut Trace` as the solver observer for any event
///   type implementing [`Traceable<N>`][Traceable].
/// - **Closure path**: wrap `&mut Trace` in a closure and call
///   [`record`][Trace::record] with whatever values the caller wants.
///
/// The collected points are what a presentation layer would hand to a
/// plotting backend; rendering is left to the caller.
///
/// # Example
///
/// ```
/// use numkit_observers::Trace;
/// use numkit_solvers::equation::{Config, bisection};
///
/// let mut trace = Trace::new(["x", "residual"]);
/// let solution =
///     bisection::solve(&|x: f64| x * x - 2.0, [0.0, 2.0], &Config::default(), &mut trace)?;
///
/// assert_eq!(trace.points(0).len(), solution.iters);
/// assert_eq!(trace.points(1).last(), Some(&[solution.iters as f64, solution.residual]));
/// # Ok::<(), numkit_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> Trace<N> {
    /// Creates a new `Trace` with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Returns the trace names in order.
    #[must_use]
    pub fn names(&self) -> &[String; N] {
        &self.names
    }

    /// Returns the points recorded for trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Returns an iterator over `(name, points)` for every trace.
    pub fn series(&self) -> impl Iterator<Item = (&str, &[[f64; 2]])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().map(Vec::as_slice))
    }
}

impl<const N: usize, E, A> Observer<E, A> for Trace<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut Trace<N>` to be passed to solvers that take an observer by
/// value, so the points can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut Trace<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
