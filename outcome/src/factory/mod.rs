//! Construction helpers for [`Outcome`].
//!
//! Every public way of obtaining an outcome lives here. Each operation has a
//! single closure-based core; value-taking variants are thin wrappers for
//! callers that already hold the payload.
//!
//! | Operation              | Functions                                |
//! |------------------------|------------------------------------------|
//! | success                | [`succeed_with`], [`succeed`]            |
//! | failure                | [`fail_with`], [`fail`]                  |
//! | checked construction   | [`try_succeed_with`], [`try_fail_with`]  |
//! | conditional failure    | [`ensure`], [`ensure_with_auxiliary`]    |
//! | error or panic capture | [`catch`], [`try_catch`], [`catch_panic`] |

mod catch;
mod ensure;

pub use catch::{catch, catch_panic, try_catch};
pub use ensure::{ensure, ensure_with_auxiliary};

use crate::Outcome;
use crate::error::{OutcomeResult, require};

/// Creates a successful outcome.
///
/// # Examples
///
/// ```
/// use outcome::factory;
///
/// let outcome = factory::succeed::<_, &str>(42);
/// assert_eq!(outcome.success(), Some(&42));
/// ```
pub const fn succeed<S, F>(success: S) -> Outcome<S, F> {
    Outcome::Success(success)
}

/// Creates a successful outcome from the value returned by `make_success`.
///
/// `make_success` is invoked exactly once.
pub fn succeed_with<S, F>(make_success: impl FnOnce() -> S) -> Outcome<S, F> {
    Outcome::Success(make_success())
}

/// Creates a failed outcome.
///
/// # Examples
///
/// ```
/// use outcome::factory;
///
/// let outcome = factory::fail::<u32, _>("not found");
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.failure(), Some(&"not found"));
/// ```
pub const fn fail<S, F>(failure: F) -> Outcome<S, F> {
    Outcome::Failure(failure)
}

/// Creates a failed outcome from the value returned by `make_failure`.
///
/// `make_failure` is invoked exactly once.
pub fn fail_with<S, F>(make_failure: impl FnOnce() -> F) -> Outcome<S, F> {
    Outcome::Failure(make_failure())
}

/// Creates a successful outcome from a producer that may yield nothing.
///
/// # Errors
///
/// Returns [`ContractViolation::InvalidArgument`](crate::ContractViolation::InvalidArgument)
/// naming `make_success` when the producer returns `None`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use outcome::{ContractViolation, factory};
///
/// let ports = HashMap::from([("http", 80_u16)]);
/// let outcome = factory::try_succeed_with::<_, String>(|| ports.get("http").copied())?;
/// assert_eq!(outcome.success(), Some(&80));
///
/// let err = factory::try_succeed_with::<u16, String>(|| ports.get("gopher").copied()).unwrap_err();
/// assert_eq!(err, ContractViolation::invalid_argument("make_success"));
/// # Ok::<(), ContractViolation>(())
/// ```
pub fn try_succeed_with<S, F>(
    make_success: impl FnOnce() -> Option<S>,
) -> OutcomeResult<Outcome<S, F>> {
    require(make_success(), "make_success").map(Outcome::Success)
}

/// Creates a failed outcome from a producer that may yield nothing.
///
/// # Errors
///
/// Returns [`ContractViolation::InvalidArgument`](crate::ContractViolation::InvalidArgument)
/// naming `make_failure` when the producer returns `None`.
///
/// # Examples
///
/// ```
/// use outcome::{ContractViolation, factory};
///
/// let outcome = factory::try_fail_with::<u8, _>(|| "disk full".strip_prefix("disk "))?;
/// assert_eq!(outcome.failure(), Some(&"full"));
/// # Ok::<(), ContractViolation>(())
/// ```
pub fn try_fail_with<S, F>(
    make_failure: impl FnOnce() -> Option<F>,
) -> OutcomeResult<Outcome<S, F>> {
    require(make_failure(), "make_failure").map(Outcome::Failure)
}
