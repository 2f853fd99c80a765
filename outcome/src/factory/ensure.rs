//! Conditional construction: build a success unless a predicate flags it.

use crate::Outcome;

/// Creates a failed outcome if `predicate` holds for the value produced by
/// `make_success`; otherwise, creates a successful outcome from that value.
///
/// `make_success` runs once. `make_failure` runs only when the predicate
/// returns `true`. Literal arguments are passed as `|| value` and
/// `|_| failure`.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, factory};
///
/// let outcome = factory::ensure(|| -5, |x| *x < 0, |_| "negative");
/// assert_eq!(outcome, Outcome::Failure("negative"));
///
/// let outcome = factory::ensure(|| 10, |x| *x < 0, |_| "negative");
/// assert_eq!(outcome, Outcome::Success(10));
/// ```
pub fn ensure<S, F>(
    make_success: impl FnOnce() -> S,
    predicate: impl FnOnce(&S) -> bool,
    make_failure: impl FnOnce(&S) -> F,
) -> Outcome<S, F> {
    Outcome::Success(make_success()).ensure_with(predicate, make_failure)
}

/// Like [`ensure`], with an auxiliary value shared by the predicate and the
/// failure constructor.
///
/// `make_success` runs first, then `make_auxiliary`; each runs exactly once.
/// The auxiliary value is dropped before returning.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use outcome::{Outcome, factory};
///
/// let taken: HashSet<&str> = HashSet::from(["orion", "lyra"]);
/// let outcome = factory::ensure_with_auxiliary(
///     || "lyra",
///     || taken.len(),
///     |name, _| taken.contains(name),
///     |name, count| format!("{name} is one of {count} reserved names"),
/// );
/// assert_eq!(
///     outcome,
///     Outcome::Failure("lyra is one of 2 reserved names".to_owned())
/// );
/// ```
pub fn ensure_with_auxiliary<S, A, F>(
    make_success: impl FnOnce() -> S,
    make_auxiliary: impl FnOnce() -> A,
    predicate: impl FnOnce(&S, &A) -> bool,
    make_failure: impl FnOnce(&S, &A) -> F,
) -> Outcome<S, F> {
    let success = make_success();
    let auxiliary = make_auxiliary();
    if predicate(&success, &auxiliary) {
        Outcome::Failure(make_failure(&success, &auxiliary))
    } else {
        Outcome::Success(success)
    }
}
