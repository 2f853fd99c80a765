//! Shared fixtures for the `rstest-bdd` behavioural suite.

use std::cell::Cell;

use outcome::{ContractViolation, Outcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Outcome shape exercised by the behavioural scenarios.
pub type ScenarioOutcome = Outcome<i32, String>;

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeState {
    /// Outcome built or transformed by the most recent step.
    pub outcome: Slot<ScenarioOutcome>,
    /// Contract violation reported by a checked constructor.
    pub violation: Slot<ContractViolation>,
    /// Number of times an auxiliary producer ran.
    pub auxiliary_calls: Slot<u32>,
}

/// Creates a clean state for each scenario.
#[fixture]
pub fn outcome_state() -> OutcomeState {
    OutcomeState::default()
}

/// Counts invocations of a producer so steps can assert it ran once.
#[derive(Debug, Default)]
pub struct CallCounter(Cell<u32>);

impl CallCounter {
    /// Records one invocation.
    pub fn record(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Number of recorded invocations.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.0.get()
    }
}
