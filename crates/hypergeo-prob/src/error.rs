use thiserror::Error;

/// Errors produced by the probability engine.
///
/// Only two failure modes exist. The engine performs no I/O, so both are
/// caused by the call itself: either the arguments lie outside the
/// hypergeometric domain, or an intermediate binomial coefficient left
/// finite `f64` range. Neither is retryable with the same arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbabilityError {
    /// A precondition on the caller's arguments was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A binomial coefficient exceeded `f64` range during evaluation.
    #[error("C({a}, {b}) exceeds f64 range; retry with smaller arguments")]
    NumericOverflow { a: i64, b: i64 },
}

impl ProbabilityError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ProbabilityError::InvalidArgument(reason.into())
    }
}
