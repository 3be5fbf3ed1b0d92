/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling progress reporting, early stopping, or recording iterates for
/// display.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive(observer: &mut impl Observer<usize, Action>, events: &[usize]) -> Option<usize> {
        events
            .iter()
            .find(|&event| observer.observe(event) == Some(Action::Stop))
            .copied()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive(&mut (), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some(Action::Stop)
        };

        assert_eq!(drive(&mut observer, &[1, 2, 3]), Some(2));
        assert_eq!(seen, vec![1, 2]);
    }
}
