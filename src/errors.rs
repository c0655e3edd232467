//! Error types for the run driver.
//!
//! Two lightweight failure types travel through the run itself and end up in
//! the report: [`SetupError`] for global-fixture setup and [`CaseFailure`]
//! for test-case bodies. They are deliberately distinct types so a fixture
//! failure can never be mistaken for an ordinary assertion failure.
//!
//! [`GantryError`] is the crate-level error surfaced to callers that want a
//! `Result`-shaped API (CLI, `RunReport::ensure_clean`), rendered through
//! miette with `gantry::*` diagnostic codes.

use std::fmt;
use std::io;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// FAILURE CLASSIFICATION
// ============================================================================

/// Which layer of the run a failure belongs to.
///
/// `Setup` failures come from global fixtures and are never attributed to a
/// test case; `Case` failures are ordinary assertion failures; `Report`
/// covers problems producing the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Setup,
    Case,
    Report,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Setup => "setup",
            ErrorCategory::Case => "case",
            ErrorCategory::Report => "report",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RUN-LEVEL FAILURE TYPES
// ============================================================================

/// A global fixture's setup could not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SetupError {
    message: String,
}

impl SetupError {
    pub const CATEGORY: ErrorCategory = ErrorCategory::Setup;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for SetupError {
    fn from(err: io::Error) -> Self {
        Self::new(format!("stream write failed: {err}"))
    }
}

/// A test-case body reported failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CaseFailure {
    message: String,
}

impl CaseFailure {
    pub const CATEGORY: ErrorCategory = ErrorCategory::Case;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for CaseFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for CaseFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// CRATE-LEVEL ERROR
// ============================================================================

/// Unified error for callers that consume gantry through `Result`.
#[derive(Debug, Error)]
pub enum GantryError {
    #[error("global fixture '{fixture}' failed during setup: {message}")]
    FixtureSetup { fixture: String, message: String },

    #[error("{failed} of {total} test cases failed")]
    CasesFailed { failed: usize, total: usize },

    #[error("failed to write report to '{path}'")]
    ReportIo {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl GantryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GantryError::FixtureSetup { .. } => ErrorCategory::Setup,
            GantryError::CasesFailed { .. } => ErrorCategory::Case,
            GantryError::ReportIo { .. } => ErrorCategory::Report,
        }
    }

    const fn code_suffix(&self) -> &'static str {
        match self {
            GantryError::FixtureSetup { .. } => "fixture_setup",
            GantryError::CasesFailed { .. } => "cases_failed",
            GantryError::ReportIo { .. } => "report_io",
        }
    }
}

impl Diagnostic for GantryError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("gantry::{}", self.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &'static str = match self {
            GantryError::FixtureSetup { .. } => {
                "dependent test cases are skipped unless the run is configured to attempt them"
            }
            GantryError::CasesFailed { .. } => {
                "see the run report for per-case failure details"
            }
            GantryError::ReportIo { .. } => {
                "check that the report sink path exists and is writable"
            }
        };
        Some(Box::new(help))
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a GantryError with full miette diagnostics.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: GantryError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
