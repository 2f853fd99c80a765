//! The [`Outcome`] sum type and its read-only projections.
//!
//! Combinators live in sibling modules: `ensure` adds the conditional
//! failure combinator and `conversions` the construction sugar and
//! `std::result::Result` interop.

mod conversions;
mod ensure;

pub use conversions::{Failed, Succeeded};

use crate::error::{OutcomeResult, require};

/// Either the expected success of an action or its possible failure.
///
/// An outcome holds exactly one payload. It is created once and never
/// mutated; combinators such as [`Outcome::ensure`] consume the receiver and
/// return a new outcome.
///
/// There is no empty state. `Outcome` deliberately has no [`Default`]
/// implementation:
///
/// ```compile_fail
/// use outcome::Outcome;
///
/// let outcome: Outcome<u8, String> = Default::default();
/// ```
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let found: Outcome<u32, &str> = Outcome::Success(42);
/// assert!(found.is_successful());
/// assert_eq!(found.success(), Some(&42));
///
/// let missing: Outcome<u32, &str> = Outcome::Failure("not found");
/// assert!(missing.is_failed());
/// assert_eq!(missing.failure(), Some(&"not found"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a failed outcome carries a failure that should be handled"]
pub enum Outcome<S, F> {
    /// The action produced its expected value.
    Success(S),
    /// The action produced a failure instead.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Builds a successful outcome from a possibly vacant value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidArgument`](crate::ContractViolation::InvalidArgument)
    /// naming `success` when `success` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{ContractViolation, Outcome};
    ///
    /// let outcome = Outcome::<_, String>::try_success(Some(7))?;
    /// assert_eq!(outcome, Outcome::Success(7));
    ///
    /// let err = Outcome::<u8, String>::try_success(None).unwrap_err();
    /// assert_eq!(err.parameter(), "success");
    /// # Ok::<(), ContractViolation>(())
    /// ```
    pub fn try_success(success: Option<S>) -> OutcomeResult<Self> {
        require(success, "success").map(Self::Success)
    }

    /// Builds a failed outcome from a possibly vacant value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidArgument`](crate::ContractViolation::InvalidArgument)
    /// naming `failure` when `failure` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{ContractViolation, Outcome};
    ///
    /// let outcome = Outcome::<u8, _>::try_failure(Some("offline"))?;
    /// assert_eq!(outcome, Outcome::Failure("offline"));
    ///
    /// let err = Outcome::<u8, &str>::try_failure(None).unwrap_err();
    /// assert_eq!(err, ContractViolation::invalid_argument("failure"));
    /// # Ok::<(), ContractViolation>(())
    /// ```
    pub fn try_failure(failure: Option<F>) -> OutcomeResult<Self> {
        require(failure, "failure").map(Self::Failure)
    }

    /// Returns `true` when the outcome holds a success.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the outcome holds a failure.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success payload, or `None` for a failed outcome.
    #[must_use]
    pub const fn success(&self) -> Option<&S> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure payload, or `None` for a successful outcome.
    #[must_use]
    pub const fn failure(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Consumes the outcome, keeping only the success payload.
    #[must_use]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, keeping only the failure payload.
    #[must_use]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Converts `&Outcome<S, F>` into `Outcome<&S, &F>`.
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(success) => Outcome::Success(success),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}
