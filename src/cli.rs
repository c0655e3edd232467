//! Command-line entry point for the `fixture_probe` binary.
//!
//! Parses the flags, runs the built-in probe scenario through [`Runner`],
//! and writes the run report in the selected format to stdout or to a sink
//! file. The process exit code comes from `RunStatus::exit_code`, so a
//! fixture setup failure is visible to callers that never read the report.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, NoColor, StandardStream};

use crate::config::{RunConfig, SetupFailurePolicy};
use crate::errors::{print_error, GantryError};
use crate::probe;
use crate::report::{console, json, junit, RunReport};
use crate::runner::Runner;
use crate::streams::ProcessStreams;

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

/// The probe binary's argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "fixture_probe",
    version,
    about = "Runs the built-in global-fixture probe scenario and reports the outcome."
)]
pub struct ProbeArgs {
    /// What to do with the test cases after a global fixture fails its setup.
    #[arg(long = "on-setup-failure", value_enum, default_value_t = PolicyArg::Skip)]
    pub on_setup_failure: PolicyArg,

    /// Report format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write the report to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub sink: Option<PathBuf>,

    /// Suppress the probe fixture's stdout and stderr lines.
    #[arg(long = "quiet-fixture")]
    pub quiet_fixture: bool,

    /// Disable colored report output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// Skip policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Record the remaining cases as skipped without running them.
    Skip,
    /// Attempt the remaining cases anyway.
    Run,
}

impl PolicyArg {
    fn as_policy(self) -> SetupFailurePolicy {
        match self {
            PolicyArg::Skip => SetupFailurePolicy::SkipCases,
            PolicyArg::Run => SetupFailurePolicy::RunCases,
        }
    }
}

/// Report format as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable console report.
    Text,
    /// JUnit XML document.
    Junit,
    /// Pretty-printed JSON document.
    Json,
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// Runs the probe scenario and returns the process exit code.
pub fn run() -> i32 {
    let args = ProbeArgs::parse();

    let mut config = RunConfig::default().with_policy(args.on_setup_failure.as_policy());
    if args.no_color {
        config = config.with_colors(false);
    }

    let mut suite = probe::scenario_suite(args.quiet_fixture);
    let mut streams = ProcessStreams;
    let report = Runner::new(config.clone()).run(&mut suite, &mut streams);

    if let Err(err) = write_report(&report, args.format, args.sink.as_deref(), config.use_colors) {
        print_error(err);
        return report.status.exit_code().max(1);
    }

    report.status.exit_code()
}

// ============================================================================
// REPORT OUTPUT
// ============================================================================

fn write_report(
    report: &RunReport,
    format: FormatArg,
    sink: Option<&Path>,
    use_colors: bool,
) -> Result<(), GantryError> {
    match sink {
        Some(path) => {
            let result = File::create(path).and_then(|mut file| {
                render_plain(&mut file, report, format)?;
                file.flush()
            });
            result.map_err(|source| GantryError::ReportIo {
                path: path.display().to_string(),
                source,
            })
        }
        None => {
            let result = match format {
                FormatArg::Text => {
                    let choice = if use_colors {
                        ColorChoice::Auto
                    } else {
                        ColorChoice::Never
                    };
                    let mut out = StandardStream::stdout(choice);
                    console::render(&mut out, report).and_then(|()| out.flush())
                }
                FormatArg::Junit | FormatArg::Json => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    render_plain(&mut out, report, format).and_then(|()| out.flush())
                }
            };
            result.map_err(|source| GantryError::ReportIo {
                path: "stdout".to_string(),
                source,
            })
        }
    }
}

/// Renders to a colorless byte sink. Text format goes through
/// [`termcolor::NoColor`] so files never receive escape sequences.
fn render_plain<W: Write>(out: &mut W, report: &RunReport, format: FormatArg) -> io::Result<()> {
    match format {
        FormatArg::Text => console::render(&mut NoColor::new(out), report),
        FormatArg::Junit => junit::render(out, report),
        FormatArg::Json => json::render(out, report),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn argument_definition_is_internally_consistent() {
        ProbeArgs::command().debug_assert();
    }

    #[test]
    fn defaults_are_skip_text_stdout() {
        let args = ProbeArgs::parse_from(["fixture_probe"]);
        assert_eq!(args.on_setup_failure, PolicyArg::Skip);
        assert_eq!(args.format, FormatArg::Text);
        assert!(args.sink.is_none());
        assert!(!args.quiet_fixture);
        assert!(!args.no_color);
    }

    #[test]
    fn all_flags_parse_together() {
        let args = ProbeArgs::parse_from([
            "fixture_probe",
            "--on-setup-failure",
            "run",
            "--format",
            "junit",
            "--sink",
            "report.xml",
            "--quiet-fixture",
            "--no-color",
        ]);
        assert_eq!(args.on_setup_failure, PolicyArg::Run);
        assert_eq!(args.on_setup_failure.as_policy(), SetupFailurePolicy::RunCases);
        assert_eq!(args.format, FormatArg::Junit);
        assert_eq!(args.sink.as_deref(), Some(Path::new("report.xml")));
        assert!(args.quiet_fixture);
        assert!(args.no_color);
    }
}
