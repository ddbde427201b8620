use thiserror::Error;

/// Errors that reject a solve before any Newton step runs.
///
/// Numeric outcomes of the iteration itself (convergence, hitting the cap,
/// a vanishing derivative) are not errors; they are reported through
/// [`Status`](super::Status) so callers can branch on them as data.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid termination policy: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },
}
