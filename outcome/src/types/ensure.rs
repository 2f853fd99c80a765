//! Conditional failure combinator for existing outcomes.

use super::Outcome;

impl<S, F> Outcome<S, F> {
    /// Turns a successful outcome into a failure when `predicate` holds.
    ///
    /// A failed receiver is returned unchanged without consulting
    /// `predicate`. A successful receiver whose value does not satisfy
    /// `predicate` is also returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let positive: Outcome<i32, &str> = Outcome::Success(10);
    /// assert_eq!(positive.ensure(|x| *x < 0, "negative"), Outcome::Success(10));
    ///
    /// let negative: Outcome<i32, &str> = Outcome::Success(-5);
    /// assert_eq!(negative.ensure(|x| *x < 0, "negative"), Outcome::Failure("negative"));
    ///
    /// let prior: Outcome<i32, &str> = Outcome::Failure("prior");
    /// assert_eq!(prior.ensure(|_| true, "negative"), Outcome::Failure("prior"));
    /// ```
    pub fn ensure<P>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        self.ensure_with(predicate, |_| failure)
    }

    /// Like [`Outcome::ensure`], but builds the failure from the success value.
    ///
    /// `make_failure` runs only when `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<u16, String> = Outcome::Success(7000);
    /// let checked = outcome.ensure_with(|port| *port > 1024, |port| format!("port {port} is unprivileged"));
    /// assert_eq!(checked.failure().map(String::as_str), Some("port 7000 is unprivileged"));
    /// ```
    pub fn ensure_with<P, M>(self, predicate: P, make_failure: M) -> Self
    where
        P: FnOnce(&S) -> bool,
        M: FnOnce(&S) -> F,
    {
        match self {
            Self::Success(success) => {
                if predicate(&success) {
                    Self::Failure(make_failure(&success))
                } else {
                    Self::Success(success)
                }
            }
            failed @ Self::Failure(_) => failed,
        }
    }
}
