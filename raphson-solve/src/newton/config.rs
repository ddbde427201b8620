/// Tolerance-driven termination: iterate until the step size drops below
/// `tol` or `max_iters` steps have run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Convergence threshold on `|delta_x|`. The comparison is strict: a
    /// step whose size equals `tol` exactly does not converge.
    pub tol: f64,
    /// Hard upper bound on steps, guaranteeing termination even without
    /// convergence.
    pub max_iters: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 100,
        }
    }
}

/// Termination policy for the Newton-Raphson loop.
///
/// Both variants share the same update rule; only the decision to keep
/// stepping differs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Run exactly `steps` iterations regardless of step size. This mode
    /// exists to trace solver behavior and never reports convergence.
    FixedCount {
        /// Number of steps to run.
        steps: usize,
    },
    /// Iterate until `|delta_x| < tol`, capped at `max_iters` steps.
    Tolerance(Tolerance),
}

impl Termination {
    /// Validates the policy parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the step count or iteration cap is zero, or if
    /// the tolerance is non-finite or not strictly positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self {
            Self::FixedCount { steps } => {
                if *steps == 0 {
                    return Err("step count must be positive");
                }
            }
            Self::Tolerance(Tolerance { tol, max_iters }) => {
                if !tol.is_finite() || *tol <= 0.0 {
                    return Err("tol must be finite and positive");
                }
                if *max_iters == 0 {
                    return Err("max_iters must be positive");
                }
            }
        }
        Ok(())
    }

    /// Returns the hard bound on iterations for this policy.
    pub(super) fn iteration_cap(&self) -> usize {
        match self {
            Self::FixedCount { steps } => *steps,
            Self::Tolerance(Tolerance { max_iters, .. }) => *max_iters,
        }
    }

    /// Whether a step of size `delta_x` satisfies this policy's convergence
    /// test. Fixed-count runs never converge by definition.
    pub(super) fn is_converged(&self, delta_x: f64) -> bool {
        match self {
            Self::FixedCount { .. } => false,
            Self::Tolerance(Tolerance { tol, .. }) => delta_x.abs() < *tol,
        }
    }
}
