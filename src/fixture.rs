//! Run-scoped global fixtures.
//!
//! A global fixture is set up once before any test case runs and torn down
//! once after all cases finish, so its lifecycle brackets the whole run
//! rather than a single case. Setup failure is signalled by an explicit
//! [`SetupError`] return instead of unwinding, which keeps the driver's
//! control flow a plain branch.

use crate::errors::SetupError;
use crate::streams::RunStreams;

/// One-time setup/teardown scoped to an entire test run.
///
/// Implementations may write diagnostic lines through `streams` during
/// either phase; every line is flushed immediately, so anything written
/// before a failure stays visible.
pub trait GlobalFixture {
    /// Stable identifier used in reports and skip reasons.
    fn name(&self) -> &str;

    /// Runs before any test case. Returning `Err` marks the whole run with
    /// a fixture-level failure, distinct from any case failure.
    fn setup(&mut self, streams: &mut dyn RunStreams) -> Result<(), SetupError>;

    /// Runs after all cases, only if `setup` succeeded for this fixture.
    /// Teardown order is the reverse of setup order.
    fn teardown(&mut self, streams: &mut dyn RunStreams) {
        let _ = streams;
    }
}
