//! The structured result of a run.
//!
//! A [`RunReport`] maps every registered test case to a
//! passed/failed/skipped record, carries fixture-level failures as their own
//! category, and classifies the whole run. Renderers live in submodules:
//! [`console`] for colored terminal output, [`junit`] for the XML shape
//! JUnit-style consumers parse, [`json`] for machine-readable output.

use std::fmt;

use serde::Serialize;

use crate::errors::GantryError;

pub mod console;
pub mod json;
pub mod junit;

// ============================================================================
// PER-CASE OUTCOMES
// ============================================================================

/// Outcome of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
    Skipped,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Passed => "passed",
            CaseStatus::Failed => "failed",
            CaseStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One test case's entry in the report.
///
/// `detail` holds the failure message for failed cases and the skip reason
/// for skipped ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub name: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CaseRecord {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CaseStatus::Passed,
            detail: None,
        }
    }

    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CaseStatus::Failed,
            detail: Some(reason.into()),
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CaseStatus::Skipped,
            detail: Some(reason.into()),
        }
    }
}

/// A fixture-level failure: never attributed to any test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureFailure {
    pub fixture: String,
    pub message: String,
}

// ============================================================================
// RUN CLASSIFICATION
// ============================================================================

/// Overall classification of a run.
///
/// `FixtureError` dominates: a run whose fixture setup failed classifies as
/// a fixture error even when the configured policy executed the cases and
/// some of those failed too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    AllPassed,
    SomeFailed,
    FixtureError,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::AllPassed => "all-passed",
            RunStatus::SomeFailed => "some-failed",
            RunStatus::FixtureError => "fixture-error",
        }
    }

    /// Process exit status for this classification.
    ///
    /// Fixture errors get their own non-zero code, separate from ordinary
    /// test failures, so callers can tell "the tests are red" apart from
    /// "the run never stood up".
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::AllPassed => 0,
            RunStatus::SomeFailed => 1,
            RunStatus::FixtureError => 2,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RUN REPORT
// ============================================================================

/// Structured result of one full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suite: String,
    pub cases: Vec<CaseRecord>,
    pub fixture_failures: Vec<FixtureFailure>,
    pub status: RunStatus,
}

impl RunReport {
    pub(crate) fn new(
        suite: impl Into<String>,
        cases: Vec<CaseRecord>,
        fixture_failures: Vec<FixtureFailure>,
    ) -> Self {
        let status = classify(&cases, &fixture_failures);
        Self {
            suite: suite.into(),
            cases,
            fixture_failures,
            status,
        }
    }

    /// Looks up a case's outcome by name (first registration wins when a
    /// name was registered twice).
    pub fn outcome_of(&self, name: &str) -> Option<&CaseRecord> {
        self.cases.iter().find(|record| record.name == name)
    }

    pub fn passed(&self) -> usize {
        self.count(CaseStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(CaseStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(CaseStatus::Skipped)
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    fn count(&self, status: CaseStatus) -> usize {
        self.cases.iter().filter(|r| r.status == status).count()
    }

    /// Converts a red run into an error for `Result`-shaped callers.
    ///
    /// Fixture failures take precedence over case failures, matching the
    /// run's own classification.
    pub fn ensure_clean(&self) -> Result<(), GantryError> {
        if let Some(failure) = self.fixture_failures.first() {
            return Err(GantryError::FixtureSetup {
                fixture: failure.fixture.clone(),
                message: failure.message.clone(),
            });
        }
        let failed = self.failed();
        if failed > 0 {
            return Err(GantryError::CasesFailed {
                failed,
                total: self.total(),
            });
        }
        Ok(())
    }
}

fn classify(cases: &[CaseRecord], fixture_failures: &[FixtureFailure]) -> RunStatus {
    if !fixture_failures.is_empty() {
        RunStatus::FixtureError
    } else if cases.iter().any(|r| r.status == CaseStatus::Failed) {
        RunStatus::SomeFailed
    } else {
        RunStatus::AllPassed
    }
}
