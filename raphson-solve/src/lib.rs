//! Newton-Raphson root finding for scalar functions.
//!
//! Given a differentiable function, its analytic derivative, and an initial
//! guess, the [`newton`] module iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)`
//! under a caller-chosen termination policy and returns the full
//! per-iteration trace alongside the final estimate.
//!
//! # Modules
//!
//! - [`newton`] — the solver loop, its termination policies, and its result
//!   types.
//! - [`report`] — pure textual rendering of a finished solve.
//!
//! # Example
//!
//! ```
//! use raphson_solve::newton::{self, Status, Tolerance};
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let solution = newton::run_to_convergence(&f, &df, 1.0, Tolerance::default())
//!     .expect("policy is valid");
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-6);
//! ```

pub mod newton;
pub mod report;

pub use raphson_core::{Observer, ScalarFn};
