//! Contract violations raised by the checked construction surface.
//!
//! A [`ContractViolation`] is never a represented failure. It reports that a
//! caller broke the construction contract (for example by handing over a
//! vacant payload) and is meant to be propagated with `?` rather than folded
//! into an [`Outcome`](crate::Outcome).

use thiserror::Error;

/// Errors reported when an outcome cannot be constructed from the supplied
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A required argument was absent.
    #[error("invalid argument: '{parameter}' must be present")]
    InvalidArgument {
        /// Name of the parameter that carried no value.
        parameter: &'static str,
    },
}

impl ContractViolation {
    /// Construct a [`ContractViolation::InvalidArgument`] for `parameter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::ContractViolation;
    ///
    /// let err = ContractViolation::invalid_argument("success");
    /// assert_eq!(err.to_string(), "invalid argument: 'success' must be present");
    /// ```
    #[must_use]
    pub const fn invalid_argument(parameter: &'static str) -> Self {
        Self::InvalidArgument { parameter }
    }

    /// Name of the offending parameter.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter } => *parameter,
        }
    }
}

/// Result alias for operations that may break the construction contract.
pub type OutcomeResult<T> = Result<T, ContractViolation>;

/// Unwrap a possibly vacant argument, logging and rejecting `None`.
pub(crate) fn require<T>(value: Option<T>, parameter: &'static str) -> OutcomeResult<T> {
    value.ok_or_else(|| {
        tracing::debug!(parameter, "rejected vacant payload");
        ContractViolation::invalid_argument(parameter)
    })
}
