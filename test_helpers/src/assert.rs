//! Assertions that check both status flags as well as the payload.
//!
//! Reading the payload alone is not enough: the projection for the inactive
//! side is `None`, so each helper first confirms the flags agree.
//!
//! # Examples
//!
//! ```
//! use outcome::Outcome;
//! use outcome_test_helpers::assert::{assert_failed, assert_successful};
//!
//! assert_successful(&3, &Outcome::<_, String>::Success(3));
//! assert_failed(&"boom", &Outcome::<u8, _>::Failure("boom"));
//! ```

use std::fmt::Debug;

use outcome::Outcome;

/// Asserts that `actual` is successful and carries `expected`.
///
/// # Panics
///
/// Panics when `actual` is failed or its success differs from `expected`.
#[track_caller]
pub fn assert_successful<S, F>(expected: &S, actual: &Outcome<S, F>)
where
    S: Debug + PartialEq,
    F: Debug,
{
    assert!(
        actual.is_successful() && !actual.is_failed(),
        "expected a successful outcome, got {actual:?}"
    );
    assert_eq!(actual.success(), Some(expected));
}

/// Asserts that `actual` is failed and carries `expected`.
///
/// # Panics
///
/// Panics when `actual` is successful or its failure differs from `expected`.
#[track_caller]
pub fn assert_failed<S, F>(expected: &F, actual: &Outcome<S, F>)
where
    S: Debug,
    F: Debug + PartialEq,
{
    assert!(
        actual.is_failed() && !actual.is_successful(),
        "expected a failed outcome, got {actual:?}"
    );
    assert_eq!(actual.failure(), Some(expected));
}
