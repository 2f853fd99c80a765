//! Conversions into and out of [`Outcome`].
//!
//! A bare `S` or `F` cannot convert into an outcome on its own because the
//! two payload types may coincide, leaving the side ambiguous. The
//! [`Succeeded`] and [`Failed`] markers name the side explicitly.
//!
//! ```compile_fail
//! use outcome::Outcome;
//!
//! let outcome: Outcome<String, String> = String::from("ambiguous").into();
//! ```

use super::Outcome;

/// Marks a value as the success side of an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, Succeeded};
///
/// let outcome: Outcome<String, String> = Succeeded("ready".to_owned()).into();
/// assert!(outcome.is_successful());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Succeeded<S>(pub S);

/// Marks a value as the failure side of an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome::{Failed, Outcome};
///
/// let outcome: Outcome<String, String> = Failed("offline".to_owned()).into();
/// assert!(outcome.is_failed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Failed<F>(pub F);

impl<S, F> From<Succeeded<S>> for Outcome<S, F> {
    fn from(Succeeded(success): Succeeded<S>) -> Self {
        Self::Success(success)
    }
}

impl<S, F> From<Failed<F>> for Outcome<S, F> {
    fn from(Failed(failure): Failed<F>) -> Self {
        Self::Failure(failure)
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(success) => Self::Success(success),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S, F> Outcome<S, F> {
    /// Converts the outcome into a [`Result`], mapping success to `Ok` and
    /// failure to `Err`.
    ///
    /// This lets callers propagate a represented failure with `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure payload of a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn double(outcome: Outcome<u8, String>) -> Result<u16, String> {
    ///     let value = outcome.into_result()?;
    ///     Ok(u16::from(value) * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::Success(4)), Ok(8));
    /// assert_eq!(double(Outcome::Failure("nope".into())), Err("nope".into()));
    /// ```
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(success) => Ok(success),
            Self::Failure(failure) => Err(failure),
        }
    }
}
