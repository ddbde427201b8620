//! Newton-Raphson iteration for a scalar function with a caller-supplied
//! derivative.
//!
//! The solver runs one update rule, `x_next = x - f(x) / df(x)`, under a
//! [`Termination`] policy: either a fixed number of traced steps or
//! iteration to a step-size tolerance with a hard cap. Every completed step
//! is appended to the returned [`Trace`]; observers see each step as it
//! happens and may stop the solve early.
//!
//! Terminal numeric outcomes are data, not errors: callers branch on
//! [`Status`] rather than catching anything. [`Error`] only rejects invalid
//! policies or a non-finite initial guess before iteration begins.

mod config;
mod error;
mod event;
mod record;
mod solution;


pub use config::{Termination, Tolerance};
pub use error::Error;
pub use event::{Action, Event};
pub use record::{IterationRecord, Trace};
pub use solution::{Solution, Status};

use raphson_core::{Observer, ScalarFn};

/// Runs Newton-Raphson iteration from `x0` under the given termination
/// policy. Observers see each completed step.
///
/// Each call is self-contained: all state lives on the stack of this
/// function, so independent solves never interfere.
///
/// # Errors
///
/// Returns an error if the termination policy is invalid or `x0` is not
/// finite. Everything that can go wrong numerically during iteration is
/// reported through [`Solution::status`] instead.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    termination: Termination,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    D: ScalarFn,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    termination
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { value: x0 });
    }

    let mut trace = Trace::new();
    let mut x = x0;

    for iter in 1..=termination.iteration_cap() {
        let f_x = f.eval(x);
        let df_x = df.eval(x);

        // The update is undefined when the derivative is zero, so the
        // failing step records nothing.
        #[allow(clippy::float_cmp)]
        if df_x == 0.0 {
            return Ok(Solution::new(Status::DerivativeVanished, x, trace));
        }

        let delta_x = -f_x / df_x;
        let x_next = x + delta_x;

        let record = IterationRecord {
            iter,
            x,
            f_x,
            df_x,
            delta_x,
            x_next,
        };
        let action = observer.observe(&Event {
            iter,
            record: &record,
        });
        trace.push(record);
        x = x_next;

        if let Some(Action::StopEarly) = action {
            return Ok(Solution::new(Status::StoppedByObserver, x, trace));
        }

        if termination.is_converged(delta_x) {
            return Ok(Solution::new(Status::Converged, x, trace));
        }
    }

    Ok(Solution::new(Status::MaxIters, x, trace))
}

/// Runs Newton-Raphson iteration without observation.
///
/// # Errors
///
/// Returns an error if the termination policy is invalid or `x0` is not
/// finite.
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    termination: Termination,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    D: ScalarFn,
{
    solve(f, df, x0, termination, ())
}

/// Runs exactly `steps` Newton steps from `x0`, tracing each one.
///
/// No tolerance is tested, so the returned status is never
/// [`Status::Converged`]; a run that completes reports
/// [`Status::MaxIters`] with a trace of length `steps`.
///
/// # Errors
///
/// Returns an error if `steps` is zero or `x0` is not finite.
pub fn run_fixed<F, D>(f: &F, df: &D, x0: f64, steps: usize) -> Result<Solution, Error>
where
    F: ScalarFn,
    D: ScalarFn,
{
    solve_unobserved(f, df, x0, Termination::FixedCount { steps })
}

/// Iterates from `x0` until the step size drops below `tolerance.tol` or
/// `tolerance.max_iters` steps have run, whichever comes first.
///
/// [`Tolerance::default`] supplies the conventional `tol = 1e-6`,
/// `max_iters = 100`.
///
/// # Errors
///
/// Returns an error if the tolerance parameters are invalid or `x0` is not
/// finite.
pub fn run_to_convergence<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    tolerance: Tolerance,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    D: ScalarFn,
{
    solve_unobserved(f, df, x0, Termination::Tolerance(tolerance))
}
