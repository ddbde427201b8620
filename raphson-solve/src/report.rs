//! Pure textual rendering of a finished solve.
//!
//! The solver performs no I/O of its own; callers that want the classic
//! per-iteration console layout wrap a [`Solution`] in a [`Report`] and
//! print it. Everything renders through `fmt::Write`, so the output can go
//! to a terminal, a string, or a log sink unchanged.

use std::fmt;

use crate::newton::{Solution, Status};

/// Renders a [`Solution`] in the per-iteration console layout:
/// iteration index, function value at the pre-update point, derivative
/// value, step size, and updated estimate, followed by a line describing
/// the terminal status.
pub struct Report<'a> {
    solution: &'a Solution,
}

impl<'a> Report<'a> {
    /// Wraps a solution for display.
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.solution.trace {
            writeln!(f, "Iteration {}:", record.iter)?;
            writeln!(f, "Current value: {}", record.f_x)?;
            writeln!(f, "Jacobian (f'(x)): {}", record.df_x)?;
            writeln!(f, "Delta x: {}", record.delta_x)?;
            writeln!(f, "Updated x: {}", record.x_next)?;
            writeln!(f, "--------------")?;
        }

        match self.solution.status {
            Status::Converged => {
                writeln!(f, "Converged after {} iterations.", self.solution.iters)
            }
            Status::MaxIters => {
                writeln!(f, "Maximum iterations reached without convergence.")
            }
            Status::DerivativeVanished => {
                writeln!(f, "Derivative vanished at x = {}.", self.solution.x)
            }
            Status::StoppedByObserver => {
                writeln!(
                    f,
                    "Stopped by observer after {} iterations.",
                    self.solution.iters
                )
            }
        }
    }
}
