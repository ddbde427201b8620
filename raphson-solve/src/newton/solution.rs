use super::Trace;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step size dropped below the configured tolerance.
    Converged,
    /// Reached the iteration cap without converging. For a fixed-count run
    /// this is the normal outcome: every requested step ran.
    MaxIters,
    /// The derivative evaluated to exactly zero, leaving the Newton update
    /// undefined at the current estimate.
    DerivativeVanished,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
///
/// The final estimate is returned for every status, including
/// non-convergence, so callers can inspect how close the iteration got.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Final estimate of the root.
    pub x: f64,
    /// Number of completed steps; always equals `trace.len()`.
    pub iters: usize,
    /// Per-step diagnostic record of the whole run.
    pub trace: Trace,
}

impl Solution {
    /// Builds a solution, deriving the iteration count from the trace.
    pub(super) fn new(status: Status, x: f64, trace: Trace) -> Self {
        let iters = trace.len();
        Self {
            status,
            x,
            iters,
            trace,
        }
    }
}
