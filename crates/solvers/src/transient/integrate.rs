use numkit_core::{BivariateFunction, Observer};

use super::{Action, Error, Event, Grid, Solution, Status, Trajectory};

/// A single-step rule that advances `y` by one grid step.
///
/// Implemented by [`Euler`](super::euler::Euler) and
/// [`RungeKutta4`](super::runge_kutta::RungeKutta4).
pub trait Method {
    /// Returns `y` at `x + h` given `y` at `x`.
    fn step<F>(&self, f: &F, x: f64, y: f64, h: f64) -> f64
    where
        F: BivariateFunction + ?Sized;
}

/// Integrates `dy/dx = f(x, y)` with `y(grid.x0()) = y0` across `grid`.
///
/// # Algorithm
///
/// 1. Record the initial condition and emit step 0.
/// 2. For each step `i` in `1..=grid.steps()`:
///    - Advance `y` from node `i - 1` to node `i` with `method`.
///    - Record the sample and emit an [`Event`].
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Errors
///
/// Returns `Error::NonFiniteInitial` if `y0` is NaN or infinite.
pub fn integrate<M, F, Obs>(
    method: &M,
    f: &F,
    y0: f64,
    grid: &Grid,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Method,
    F: BivariateFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !y0.is_finite() {
        return Err(Error::NonFiniteInitial { y0 });
    }

    let mut trajectory = Trajectory::with_capacity(grid.steps() + 1);
    let mut y = y0;

    let x0 = grid.node(0);
    trajectory.push(x0, y);

    let event = Event { step: 0, x: x0, y };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        });
    }

    for step in 1..=grid.steps() {
        y = method.step(f, grid.node(step - 1), y, grid.h());
        let x = grid.node(step);
        trajectory.push(x, y);

        let event = Event { step, x, y };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps: grid.steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Ignores `f` and adds a constant each step.
    struct AddOne;

    impl Method for AddOne {
        fn step<F>(&self, _f: &F, _x: f64, y: f64, _h: f64) -> f64
        where
            F: BivariateFunction + ?Sized,
        {
            y + 1.0
        }
    }

    fn zero(_x: f64, _y: f64) -> f64 {
        0.0
    }

    #[test]
    fn walks_every_node() {
        let grid = Grid::new(0.0, 1.0, 0.25).expect("valid grid");

        let solution = integrate(&AddOne, &zero, 10.0, &grid, ()).expect("should integrate");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 4);
        assert_eq!(solution.trajectory.len(), 5);
        assert_eq!(solution.trajectory.x(), [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(solution.trajectory.y(), [10.0, 11.0, 12.0, 13.0, 14.0]);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let grid = Grid::new(0.0, 1.0, 0.25).expect("valid grid");

        let mut steps = Vec::new();
        integrate(&AddOne, &zero, 0.0, &grid, |event: &Event| {
            steps.push(event.step);
            None
        })
        .expect("should integrate");

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn observer_can_stop_early() {
        let grid = Grid::new(0.0, 10.0, 0.1).expect("valid grid");

        let solution = integrate(&AddOne, &zero, 0.0, &grid, |event: &Event| {
            (event.step >= 5).then_some(Action::StopEarly)
        })
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 6);
        assert_relative_eq!(solution.trajectory.y()[5], 5.0);
    }

    #[test]
    fn observer_can_stop_before_first_step() {
        let grid = Grid::new(0.0, 1.0, 0.5).expect("valid grid");

        let solution = integrate(&AddOne, &zero, 3.0, &grid, |_event: &Event| {
            Some(Action::StopEarly)
        })
        .expect("should stop early");

        assert_eq!(solution.steps, 0);
        assert_eq!(solution.trajectory.last(), Some((0.0, 3.0)));
    }

    #[test]
    fn rejects_non_finite_initial_value() {
        let grid = Grid::new(0.0, 1.0, 0.5).expect("valid grid");

        let result = integrate(&AddOne, &zero, f64::NAN, &grid, ());

        assert!(matches!(result, Err(Error::NonFiniteInitial { .. })));
    }
}
