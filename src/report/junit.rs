//! JUnit XML rendering of a [`RunReport`].
//!
//! Emits a `<testsuites>` document with one `<testsuite>` per run, in the
//! dialect most CI readers accept: `status="run"` for executed cases,
//! `status="notrun"` plus a `<skipped/>` child for cases withheld after a
//! fixture setup failure, a `<failure>` child per failed case, and one
//! synthetic `<testcase>` with an `<error>` child per failed global fixture
//! so setup problems survive into dashboards that only read test cases.

use std::io::{self, Write};

use crate::report::{CaseStatus, RunReport};

// ============================================================================
// RENDERER
// ============================================================================

/// Renders the report as a standalone JUnit XML document.
pub fn render<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, "<testsuites>")?;
    writeln!(
        out,
        r#"  <testsuite name="{}" tests="{}" failures="{}" errors="{}" skipped="{}">"#,
        escape(&report.suite),
        report.total(),
        report.failed(),
        report.fixture_failures.len(),
        report.skipped(),
    )?;

    for case in &report.cases {
        let name = escape(&case.name);
        match case.status {
            CaseStatus::Passed => {
                writeln!(out, r#"    <testcase name="{name}" status="run"/>"#)?;
            }
            CaseStatus::Failed => {
                let text = escape(case.detail.as_deref().unwrap_or("test case failed"));
                writeln!(out, r#"    <testcase name="{name}" status="run">"#)?;
                writeln!(out, r#"      <failure message="{text}">{text}</failure>"#)?;
                writeln!(out, "    </testcase>")?;
            }
            CaseStatus::Skipped => {
                writeln!(out, r#"    <testcase name="{name}" status="notrun">"#)?;
                match &case.detail {
                    Some(reason) => {
                        writeln!(out, r#"      <skipped message="{}"/>"#, escape(reason))?
                    }
                    None => writeln!(out, "      <skipped/>")?,
                }
                writeln!(out, "    </testcase>")?;
            }
        }
    }

    for failure in &report.fixture_failures {
        let name = escape(&failure.fixture);
        let text = escape(&failure.message);
        writeln!(out, r#"    <testcase name="{name}" status="notrun">"#)?;
        writeln!(out, r#"      <error message="{text}">{text}</error>"#)?;
        writeln!(out, "    </testcase>")?;
    }

    writeln!(out, "  </testsuite>")?;
    writeln!(out, "</testsuites>")?;
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

/// Escapes the five XML-reserved characters for attribute and text content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CaseRecord, FixtureFailure};

    fn render_to_string(report: &RunReport) -> String {
        let mut out = Vec::new();
        render(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn escape_handles_all_reserved_characters() {
        assert_eq!(
            escape(r#"<a & "b"> 'c'"#),
            "&lt;a &amp; &quot;b&quot;&gt; &apos;c&apos;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn passing_case_is_a_self_closing_run_element() {
        let report = RunReport::new("smoke", vec![CaseRecord::passed("adds")], Vec::new());
        let xml = render_to_string(&report);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<testsuite name="smoke" tests="1" failures="0" errors="0" skipped="0">"#));
        assert!(xml.contains(r#"<testcase name="adds" status="run"/>"#));
        assert!(xml.trim_end().ends_with("</testsuites>"));
    }

    #[test]
    fn failure_text_appears_as_both_attribute_and_body() {
        let report = RunReport::new(
            "smoke",
            vec![CaseRecord::failed("boundary", "expected <4> & got \"5\"")],
            Vec::new(),
        );
        let xml = render_to_string(&report);
        assert!(xml.contains(
            r#"<failure message="expected &lt;4&gt; &amp; got &quot;5&quot;">expected &lt;4&gt; &amp; got &quot;5&quot;</failure>"#
        ));
    }

    #[test]
    fn fixture_failure_becomes_a_notrun_error_entry() {
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
        let xml = render_to_string(&report);
        assert!(xml.contains(r#"tests="1" failures="0" errors="1" skipped="1""#));
        assert!(xml.contains(r#"<testcase name="test_dummy" status="notrun">"#));
        assert!(xml.contains(
            r#"<error message="This is a global fixture init failure">This is a global fixture init failure</error>"#
        ));
    }
}
