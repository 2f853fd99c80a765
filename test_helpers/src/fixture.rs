//! Canonical payloads used across the test suites.

/// Sample success payload with a little structure to compare.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constellation {
    /// Name of the constellation.
    pub name: String,
    /// Number of named stars.
    pub stars: u32,
}

impl Constellation {
    /// Builds a constellation from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, stars: u32) -> Self {
        Self {
            name: name.into(),
            stars,
        }
    }
}

/// Failure payload shared by most tests.
pub const FAILURE: &str = "failure";

/// A failure distinct from [`FAILURE`], for asserting that one failure was
/// not replaced by another.
pub const OTHER_FAILURE: &str = "other failure";

/// The default success payload.
#[must_use]
pub fn success() -> Constellation {
    Constellation::new("Orion", 7)
}

/// A success payload distinct from [`success`].
#[must_use]
pub fn other_success() -> Constellation {
    Constellation::new("Lyra", 5)
}
