use super::IterationRecord;

/// Control actions supported by the Newton-Raphson solver.
pub enum Action {
    /// Stop the solver after the current step, keeping everything computed
    /// so far.
    StopEarly,
}

/// Iteration event emitted once per completed Newton step.
pub struct Event<'a> {
    /// Iteration counter (1-based within the solve loop).
    pub iter: usize,
    /// The step that just completed.
    pub record: &'a IterationRecord,
}
