//! Run configuration.

/// What to do with the registered test cases once a global fixture's setup
/// has failed.
///
/// The framework does not prescribe one answer: skipping matches the usual
/// "nothing is trustworthy without its fixture" stance, while attempting the
/// cases anyway can be useful when diagnosing the fixture itself. Either
/// way, every case still gets its own entry in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupFailurePolicy {
    /// Record every case as skipped, with a reason naming the failed fixture.
    #[default]
    SkipCases,
    /// Execute the cases anyway; the run still classifies as a fixture error.
    RunCases,
}

/// Configuration for run execution and report rendering.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub on_setup_failure: SetupFailurePolicy,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            on_setup_failure: SetupFailurePolicy::SkipCases,
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl RunConfig {
    pub fn with_policy(mut self, policy: SetupFailurePolicy) -> Self {
        self.on_setup_failure = policy;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}
