//! The run driver: fixture setup, case execution, teardown, in strict
//! sequence.
//!
//! A run is single-threaded and phase-ordered:
//!
//! 1. **Setup**: fixtures set up in registration order; the first failure is
//!    recorded as a fixture-level failure and stops further setups.
//! 2. **Cases**: executed in registration order, or recorded as skipped when
//!    a fixture failed and the policy says so. Every registered case gets an
//!    outcome either way.
//! 3. **Teardown**: fixtures that completed setup are torn down in reverse
//!    order, on the failure path too.
//!
//! Panics in setup or in a case body are caught and folded into the
//! matching failure category, so one misbehaving participant cannot take
//! down the rest of the run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::{RunConfig, SetupFailurePolicy};
use crate::errors::SetupError;
use crate::fixture::GlobalFixture;
use crate::report::{CaseRecord, FixtureFailure, RunReport};
use crate::streams::RunStreams;
use crate::suite::{Suite, TestCase};

/// Drives a [`Suite`] through one complete run.
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Executes the suite and returns the structured report.
    ///
    /// This never aborts early: by the time it returns, every registered
    /// case has a passed/failed/skipped record, and any fixture failure is
    /// recorded in its own category.
    pub fn run(&self, suite: &mut Suite, streams: &mut dyn RunStreams) -> RunReport {
        let mut fixture_failures = Vec::new();
        let mut active = Vec::new();
        let mut failed_fixture = None;

        for idx in 0..suite.fixture_count() {
            let fixture = &mut suite.fixtures_mut()[idx];
            match run_setup(fixture.as_mut(), streams) {
                Ok(()) => active.push(idx),
                Err(err) => {
                    let name = fixture.name().to_string();
                    fixture_failures.push(FixtureFailure {
                        fixture: name.clone(),
                        message: err.message().to_string(),
                    });
                    failed_fixture = Some(name);
                    break;
                }
            }
        }

        let cases: Vec<CaseRecord> =
            match (&failed_fixture, self.config.on_setup_failure) {
                (Some(fixture), SetupFailurePolicy::SkipCases) => {
                    let reason = format!("global fixture '{fixture}' failed during setup");
                    suite
                        .cases_mut()
                        .iter()
                        .map(|case| CaseRecord::skipped(case.name(), reason.clone()))
                        .collect()
                }
                _ => suite.cases_mut().iter_mut().map(execute_case).collect(),
            };

        for idx in active.into_iter().rev() {
            suite.fixtures_mut()[idx].teardown(streams);
        }

        RunReport::new(suite.name(), cases, fixture_failures)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

fn run_setup(
    fixture: &mut dyn GlobalFixture,
    streams: &mut dyn RunStreams,
) -> Result<(), SetupError> {
    match panic::catch_unwind(AssertUnwindSafe(|| fixture.setup(streams))) {
        Ok(result) => result,
        Err(payload) => Err(SetupError::new(panic_message(payload))),
    }
}

fn execute_case(case: &mut TestCase) -> CaseRecord {
    match panic::catch_unwind(AssertUnwindSafe(|| case.invoke())) {
        Ok(Ok(())) => CaseRecord::passed(case.name()),
        Ok(Err(failure)) => CaseRecord::failed(case.name(), failure.message()),
        Err(payload) => CaseRecord::failed(case.name(), panic_message(payload)),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "panicked with a non-string payload".to_string()
    }
}
