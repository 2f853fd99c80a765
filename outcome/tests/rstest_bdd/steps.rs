//! Step definitions for outcome construction, validation, and capture.

use std::panic::panic_any;

use anyhow::{Result, anyhow, ensure};
use outcome::{Outcome, factory};
use rstest_bdd_macros::{given, then, when};

use crate::fixtures::{CallCounter, OutcomeState, ScenarioOutcome};

/// Marker raised or returned by the division helpers.
#[derive(Debug)]
struct DivideByZero;

const DIVISION_ERROR: &str = "division error";

fn current(outcome_state: &OutcomeState) -> Result<ScenarioOutcome> {
    outcome_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome has been built"))
}

#[given("a successful outcome holding {value}")]
fn successful_outcome(outcome_state: &OutcomeState, value: i32) -> Result<()> {
    ensure!(
        outcome_state.outcome.is_empty(),
        "outcome already initialised"
    );
    outcome_state.outcome.set(factory::succeed(value));
    Ok(())
}

#[given("a failed outcome with \"{failure}\"")]
fn failed_outcome(outcome_state: &OutcomeState, failure: String) -> Result<()> {
    ensure!(
        outcome_state.outcome.is_empty(),
        "outcome already initialised"
    );
    outcome_state.outcome.set(factory::fail(failure));
    Ok(())
}

#[when("negative values are rejected with \"{failure}\"")]
fn reject_negative(outcome_state: &OutcomeState, failure: String) -> Result<()> {
    let outcome = current(outcome_state)?;
    outcome_state
        .outcome
        .set(outcome.ensure(|value| *value < 0, failure));
    Ok(())
}

#[when("every value is rejected with \"{failure}\"")]
fn reject_everything(outcome_state: &OutcomeState, failure: String) -> Result<()> {
    let outcome = current(outcome_state)?;
    outcome_state.outcome.set(outcome.ensure(|_| true, failure));
    Ok(())
}

#[when("{value} is checked against a limit of {limit}")]
fn check_against_limit(outcome_state: &OutcomeState, value: i32, limit: i32) {
    let counter = CallCounter::default();
    let outcome = factory::ensure_with_auxiliary(
        || value,
        || {
            counter.record();
            limit
        },
        |candidate, ceiling| candidate > ceiling,
        |candidate, ceiling| format!("{candidate} exceeds {ceiling}"),
    );
    outcome_state.outcome.set(outcome);
    outcome_state.auxiliary_calls.set(counter.count());
}

#[when("{dividend} is divided by {divisor} under capture")]
fn divide_under_capture(outcome_state: &OutcomeState, dividend: i32, divisor: i32) {
    let outcome = factory::catch(
        || dividend.checked_div(divisor).ok_or(DivideByZero),
        |_| DIVISION_ERROR.to_owned(),
    );
    outcome_state.outcome.set(outcome);
}

#[when("a division panic is captured")]
fn capture_division_panic(outcome_state: &OutcomeState) {
    let outcome = factory::catch_panic::<DivideByZero, i32, _>(
        || panic_any(DivideByZero),
        |_| DIVISION_ERROR.to_owned(),
    );
    outcome_state.outcome.set(outcome);
}

#[when("a vacant success is produced")]
fn produce_vacant_success(outcome_state: &OutcomeState) -> Result<()> {
    let violation = factory::try_succeed_with::<i32, String>(|| None)
        .err()
        .ok_or_else(|| anyhow!("vacant success was accepted"))?;
    outcome_state.violation.set(violation);
    Ok(())
}

#[then("the outcome is successful with {expected}")]
fn assert_successful(outcome_state: &OutcomeState, expected: i32) -> Result<()> {
    let outcome = current(outcome_state)?;
    ensure!(
        outcome.is_successful() && !outcome.is_failed(),
        "expected success, got {outcome:?}"
    );
    ensure!(
        outcome == Outcome::Success(expected),
        "expected success {expected}, got {outcome:?}"
    );
    Ok(())
}

#[then("the outcome is failed with \"{expected}\"")]
fn assert_failed(outcome_state: &OutcomeState, expected: String) -> Result<()> {
    let outcome = current(outcome_state)?;
    ensure!(
        outcome.is_failed() && !outcome.is_successful(),
        "expected failure, got {outcome:?}"
    );
    ensure!(
        outcome.failure() == Some(&expected),
        "expected failure {expected:?}, got {outcome:?}"
    );
    Ok(())
}

#[then("the limit was computed once")]
fn assert_limit_computed_once(outcome_state: &OutcomeState) -> Result<()> {
    let calls = outcome_state
        .auxiliary_calls
        .take()
        .ok_or_else(|| anyhow!("auxiliary producer was never observed"))?;
    ensure!(calls == 1, "expected one auxiliary call, saw {calls}");
    Ok(())
}

#[then("the contract violation names \"{parameter}\"")]
fn assert_violation(outcome_state: &OutcomeState, parameter: String) -> Result<()> {
    let violation = outcome_state
        .violation
        .take()
        .ok_or_else(|| anyhow!("no contract violation was recorded"))?;
    ensure!(
        violation.parameter() == parameter,
        "expected violation for {parameter:?}, got {violation}"
    );
    Ok(())
}
