//! Capture of typed errors and panics as represented failures.
//!
//! Capture is typed. [`catch`] only sees the error type the producer
//! declares and never intercepts panics. [`catch_panic`] intercepts panics
//! whose payload has the requested type and resumes every other panic.
//! [`try_catch`] additionally rejects a vacant success.

use std::any::{Any, type_name};
use std::panic::{self, UnwindSafe};

use crate::Outcome;
use crate::error::{OutcomeResult, require};

/// Runs `make_success`, converting an `Err` into a failed outcome.
///
/// `Ok` values become successes. Panics raised by `make_success` propagate
/// to the caller.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, factory};
///
/// #[derive(Debug)]
/// struct DivideByZero;
///
/// let divide = |a: i32, b: i32| a.checked_div(b).ok_or(DivideByZero);
///
/// let outcome = factory::catch(|| divide(10, 0), |_| "division error");
/// assert_eq!(outcome, Outcome::Failure("division error"));
///
/// let outcome = factory::catch(|| divide(10, 2), |_| "division error");
/// assert_eq!(outcome, Outcome::Success(5));
/// ```
pub fn catch<S, F, E>(
    make_success: impl FnOnce() -> Result<S, E>,
    failure_from_error: impl FnOnce(E) -> F,
) -> Outcome<S, F> {
    match make_success() {
        Ok(success) => Outcome::Success(success),
        Err(error) => {
            tracing::trace!(error = type_name::<E>(), "captured error as failure");
            Outcome::Failure(failure_from_error(error))
        }
    }
}

/// Like [`catch`], for producers whose success may be vacant.
///
/// An `Err` still becomes a failed outcome. An `Ok(None)` breaks the
/// construction contract instead of producing an outcome.
///
/// # Errors
///
/// Returns [`ContractViolation::InvalidArgument`](crate::ContractViolation::InvalidArgument)
/// naming `make_success` when the producer returns `Ok(None)`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use outcome::{ContractViolation, Outcome, factory};
///
/// let config = HashMap::from([("port", "8080"), ("retries", "many")]);
/// let read = |key: &str| config.get(key).map(|raw| raw.parse::<u16>()).transpose();
///
/// let port = factory::try_catch(|| read("port"), |err| err.to_string())?;
/// assert_eq!(port, Outcome::Success(8080));
///
/// let retries = factory::try_catch(|| read("retries"), |err| err.to_string())?;
/// assert!(retries.is_failed());
///
/// let err = factory::try_catch(|| read("timeout"), |err| err.to_string()).unwrap_err();
/// assert_eq!(err.parameter(), "make_success");
/// # Ok::<(), ContractViolation>(())
/// ```
pub fn try_catch<S, F, E>(
    make_success: impl FnOnce() -> Result<Option<S>, E>,
    failure_from_error: impl FnOnce(E) -> F,
) -> OutcomeResult<Outcome<S, F>> {
    match catch(make_success, failure_from_error) {
        Outcome::Success(success) => require(success, "make_success").map(Outcome::Success),
        Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
    }
}

/// Runs `make_success`, converting a panic whose payload is a `P` into a
/// failed outcome.
///
/// A panic carrying any other payload type is resumed unchanged with
/// [`std::panic::resume_unwind`]. The installed panic hook still runs for
/// captured panics, so the default hook prints the panic message.
///
/// # Examples
///
/// ```
/// use std::panic::panic_any;
/// use outcome::{Outcome, factory};
///
/// struct DivideByZero;
///
/// let outcome = factory::catch_panic::<DivideByZero, i32, _>(
///     || panic_any(DivideByZero),
///     |_| "division error",
/// );
/// assert_eq!(outcome, Outcome::Failure("division error"));
/// ```
pub fn catch_panic<P, S, F>(
    make_success: impl FnOnce() -> S + UnwindSafe,
    failure_from_panic: impl FnOnce(P) -> F,
) -> Outcome<S, F>
where
    P: Any + Send,
{
    match panic::catch_unwind(make_success) {
        Ok(success) => Outcome::Success(success),
        Err(payload) => match payload.downcast::<P>() {
            Ok(captured) => {
                tracing::trace!(payload = type_name::<P>(), "captured panic as failure");
                Outcome::Failure(failure_from_panic(*captured))
            }
            Err(foreign) => {
                tracing::debug!(
                    expected = type_name::<P>(),
                    "resuming panic with unexpected payload"
                );
                panic::resume_unwind(foreign)
            }
        },
    }
}
