//! Human-readable console rendering of a [`RunReport`].
//!
//! One line per test case with a colored `PASS`/`FAIL`/`SKIP` label, a
//! `SETUP ERROR` block per failed global fixture, and a closing summary.
//! Writes through any [`WriteColor`] sink, so the same renderer serves a
//! color-capable terminal and a plain file (wrap the file in
//! [`termcolor::NoColor`]).

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::report::{CaseRecord, CaseStatus, RunReport, RunStatus};

// ============================================================================
// RENDERER
// ============================================================================

/// Renders the report as labelled per-case lines plus a summary.
///
/// Color escapes are best-effort: failures to set or reset a color are
/// ignored, failures to write content are propagated.
pub fn render<W: WriteColor>(out: &mut W, report: &RunReport) -> io::Result<()> {
    for failure in &report.fixture_failures {
        write_label(out, "SETUP ERROR", Color::Red, true)?;
        writeln!(out, ": {}: {}", failure.fixture, failure.message)?;
    }

    for case in &report.cases {
        write_case_line(out, case)?;
    }

    writeln!(out)?;
    write!(out, "Run summary: total {}, ", report.total())?;
    write_label(out, "passed", Color::Green, false)?;
    write!(out, " {}, ", report.passed())?;
    write_label(out, "failed", Color::Red, false)?;
    write!(out, " {}, ", report.failed())?;
    write_label(out, "skipped", Color::Yellow, false)?;
    writeln!(out, " {}, setup errors {}", report.skipped(), report.fixture_failures.len())?;

    write!(out, "Run status: ")?;
    let (status_color, bold) = match report.status {
        RunStatus::AllPassed => (Color::Green, false),
        RunStatus::SomeFailed => (Color::Red, false),
        RunStatus::FixtureError => (Color::Red, true),
    };
    write_label(out, report.status.as_str(), status_color, bold)?;
    writeln!(out)?;
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_case_line<W: WriteColor>(out: &mut W, case: &CaseRecord) -> io::Result<()> {
    match case.status {
        CaseStatus::Passed => {
            write_label(out, "PASS", Color::Green, false)?;
            writeln!(out, ": {}", case.name)?;
        }
        CaseStatus::Failed => {
            write_label(out, "FAIL", Color::Red, false)?;
            writeln!(out, ": {}", case.name)?;
            if let Some(detail) = &case.detail {
                writeln!(out, "  reason: {detail}")?;
            }
        }
        CaseStatus::Skipped => {
            write_label(out, "SKIP", Color::Yellow, false)?;
            match &case.detail {
                Some(reason) => writeln!(out, ": {} ({})", case.name, reason)?,
                None => writeln!(out, ": {}", case.name)?,
            }
        }
    }
    Ok(())
}

fn write_label<W: WriteColor>(out: &mut W, text: &str, color: Color, bold: bool) -> io::Result<()> {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    write!(out, "{text}")?;
    let _ = out.reset();
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;
    use crate::report::FixtureFailure;

    fn render_plain(report: &RunReport) -> String {
        let mut out = NoColor::new(Vec::new());
        render(&mut out, report).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn passing_run_lists_cases_and_totals() {
        let report = RunReport::new(
            "smoke",
            vec![
                CaseRecord::passed("first"),
                CaseRecord::passed("second"),
            ],
            Vec::new(),
        );
        let text = render_plain(&report);
        assert!(text.contains("PASS: first\n"));
        assert!(text.contains("PASS: second\n"));
        assert!(text.contains("Run summary: total 2, passed 2, failed 0, skipped 0, setup errors 0"));
        assert!(text.contains("Run status: all-passed"));
    }

    #[test]
    fn failed_case_detail_is_printed_on_its_own_line() {
        let report = RunReport::new(
            "smoke",
            vec![CaseRecord::failed("boundary", "expected 4, got 5")],
            Vec::new(),
        );
        let text = render_plain(&report);
        assert!(text.contains("FAIL: boundary\n  reason: expected 4, got 5\n"));
        assert!(text.contains("Run status: some-failed"));
    }

    #[test]
    fn fixture_failure_block_carries_the_message_verbatim() {
        let report = RunReport::new(
            "fixture_probe",
            vec![CaseRecord::skipped(
                "test_dummy",
                "global fixture 'noisy-setup' failed during setup",
            )],
            vec![FixtureFailure {
                fixture: "noisy-setup".to_string(),
                message: "This is a global fixture init failure".to_string(),
            }],
        );
        let text = render_plain(&report);
        assert!(text.contains(
            "SETUP ERROR: noisy-setup: This is a global fixture init failure\n"
        ));
        assert!(text.contains(
            "SKIP: test_dummy (global fixture 'noisy-setup' failed during setup)\n"
        ));
        assert!(text.contains("setup errors 1"));
        assert!(text.contains("Run status: fixture-error"));
    }
}
