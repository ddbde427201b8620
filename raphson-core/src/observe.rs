/// Watches solver events and may steer the iteration.
///
/// A solver hands each event `E` to its observer, which either returns
/// `Some(action)` to request a solver-specific control action `A` or `None`
/// to let the iteration continue unchanged. This keeps monitoring concerns
/// (logging, early stopping, custom policies) out of the solver API itself.
pub trait Observer<E, A> {
    /// Inspects one solver event, optionally requesting an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures with the right shape are observers.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// The unit type is the no-op observer: it never requests an action.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
