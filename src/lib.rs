//! Gantry: a small test-run driver with run-scoped global fixtures.
//!
//! A [`Suite`] owns global fixtures and test cases. The [`Runner`] sets the
//! fixtures up in registration order, executes the cases, and tears the
//! fixtures down in reverse order, collecting everything into a [`RunReport`]
//! that renders as console text, JUnit XML, or JSON. When a fixture's setup
//! fails, the remaining cases are skipped or attempted per
//! [`SetupFailurePolicy`], and the run classifies as a fixture error with a
//! non-zero exit code.
//!
//! All stream writes from fixtures and cases go through the [`RunStreams`]
//! seam, line-buffered and flushed per line, so output ordering is observable
//! both in-process (via [`CaptureStreams`]) and across a process boundary.

pub use crate::config::{RunConfig, SetupFailurePolicy};
pub use crate::errors::{CaseFailure, ErrorCategory, GantryError, SetupError};
pub use crate::fixture::GlobalFixture;
pub use crate::report::{
    CaseRecord, CaseStatus, FixtureFailure, RunReport, RunStatus,
};
pub use crate::runner::Runner;
pub use crate::streams::{
    CaptureStreams, NullStreams, ProcessStreams, RunStreams, StreamChannel, StreamEvent,
};
pub use crate::suite::{CaseResult, Suite, TestCase};

pub mod cli;
pub mod config;
pub mod errors;
pub mod fixture;
pub mod probe;
pub mod report;
pub mod runner;
pub mod streams;
pub mod suite;
