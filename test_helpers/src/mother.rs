//! Ready-made outcomes over the canonical [`fixture`](crate::fixture) payloads.

use outcome::Outcome;

use crate::fixture::{self, Constellation};

/// Outcome type used throughout the shared fixtures.
pub type ConstellationOutcome = Outcome<Constellation, String>;

/// A successful outcome carrying [`fixture::success`].
pub fn succeed() -> ConstellationOutcome {
    succeed_with(fixture::success())
}

/// A successful outcome carrying `success`.
pub const fn succeed_with(success: Constellation) -> ConstellationOutcome {
    Outcome::Success(success)
}

/// A failed outcome carrying `failure`.
pub fn fail(failure: &str) -> ConstellationOutcome {
    Outcome::Failure(failure.to_owned())
}
