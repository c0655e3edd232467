//! The built-in probe scenario shipped with the `fixture_probe` binary.
//!
//! One suite, one global fixture, one trivially-passing case. The fixture
//! writes a line to each standard stream and then fails its setup, which
//! makes the scenario a compact end-to-end exercise of stream ordering,
//! setup-failure reporting, and the skip policy. Driver integrations test
//! against this scenario, so the strings here are load-bearing and must not
//! change spelling.

use crate::errors::SetupError;
use crate::fixture::GlobalFixture;
use crate::streams::RunStreams;
use crate::suite::Suite;

/// Line the probe fixture writes to stdout before failing.
pub const STDOUT_LINE: &str = "something on the stdout";

/// Line the probe fixture writes to stderr before failing.
pub const STDERR_LINE: &str = "something on the stderr";

/// Message the probe fixture fails its setup with.
pub const FAILURE_MESSAGE: &str = "This is a global fixture init failure";

/// Name of the probe suite's only test case.
pub const DUMMY_CASE: &str = "test_dummy";

/// Name of the probe suite and of the binary that runs it.
pub const SUITE_NAME: &str = "fixture_probe";

// ============================================================================
// PROBE FIXTURE
// ============================================================================

/// Global fixture that announces itself on both streams and then fails.
///
/// The stdout line is written and flushed before the stderr line, so a
/// capturing caller sees them in that order even when the two streams end
/// up interleaved in a single pipe.
#[derive(Debug, Default)]
pub struct NoisySetup {
    quiet: bool,
}

impl NoisySetup {
    pub fn new(quiet: bool) -> Self {
        NoisySetup { quiet }
    }
}

impl GlobalFixture for NoisySetup {
    fn name(&self) -> &str {
        "noisy-setup"
    }

    fn setup(&mut self, streams: &mut dyn RunStreams) -> Result<(), SetupError> {
        if !self.quiet {
            streams.line_out(STDOUT_LINE)?;
            streams.line_err(STDERR_LINE)?;
        }
        Err(SetupError::new(FAILURE_MESSAGE))
    }
}

// ============================================================================
// SCENARIO SUITE
// ============================================================================

/// Builds the probe suite: the [`NoisySetup`] fixture plus `test_dummy`.
///
/// `test_dummy` passes whenever it actually runs; under the default skip
/// policy it never does, because the fixture's setup always fails.
pub fn scenario_suite(quiet: bool) -> Suite {
    let mut suite = Suite::new(SUITE_NAME);
    suite.register_fixture(NoisySetup::new(quiet));
    suite.register_case(DUMMY_CASE, || Ok(()));
    suite
}

// ============================================================================
// TESTS
// ============================================================================
