//! `rstest-bdd` scaffolding for `outcome`.
//!
//! The modules register the scenario-state fixture, the step
//! implementations, and the binding of `tests/features/outcome.feature`, so
//! the behavioural suite runs under the stock `cargo test` harness.

mod fixtures;
mod steps;
