/// A scalar function of one real variable.
///
/// Solvers evaluate implementors at the points they visit, so an
/// implementation must be defined for every input the solver can reach and
/// must return the same output for the same input within one solve.
///
/// Derivatives are expressed through the same contract: a solver that needs
/// `f'` takes a second `ScalarFn` supplied by the caller rather than
/// differentiating anything itself.
///
/// Closures automatically implement `ScalarFn`:
///
/// ```
/// use raphson_core::ScalarFn;
///
/// let f = |x: f64| x * x - 2.0;
/// assert_eq!(f.eval(2.0), 2.0);
/// ```
pub trait ScalarFn {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation so plain closures work as scalar functions.
impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
