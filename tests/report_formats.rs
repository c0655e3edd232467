// Report renderer integration tests: runs real suites through the Runner
// and checks the console, JUnit, and JSON renderings of the same report.

use gantry::report::{console, json, junit};
use gantry::{NullStreams, RunReport, Runner, Suite};
use serde_json::Value;
use termcolor::NoColor;

fn mixed_report() -> RunReport {
    let mut suite = Suite::new("mixed");
    suite.register_case("adds", || Ok(()));
    suite.register_case("boundary", || Err("expected 4, got 5".into()));
    Runner::default().run(&mut suite, &mut NullStreams)
}

fn probe_report() -> RunReport {
    let mut suite = gantry::probe::scenario_suite(true);
    Runner::default().run(&mut suite, &mut NullStreams)
}

#[test]
fn console_rendering_of_a_mixed_run() {
    let report = mixed_report();
    let mut out = NoColor::new(Vec::new());
    console::render(&mut out, &report).unwrap();
    let text = String::from_utf8(out.into_inner()).unwrap();

    assert!(text.contains("PASS: adds\n"));
    assert!(text.contains("FAIL: boundary\n  reason: expected 4, got 5\n"));
    assert!(text.contains("Run summary: total 2, passed 1, failed 1, skipped 0, setup errors 0"));
    assert!(text.contains("Run status: some-failed"));
}

#[test]
fn console_rendering_of_the_probe_scenario() {
    let report = probe_report();
    let mut out = NoColor::new(Vec::new());
    console::render(&mut out, &report).unwrap();
    let text = String::from_utf8(out.into_inner()).unwrap();

    assert!(text.contains("SETUP ERROR: noisy-setup: This is a global fixture init failure\n"));
    assert!(text.contains("SKIP: test_dummy"));
    assert!(text.contains("Run status: fixture-error"));
}

#[test]
fn junit_rendering_of_the_probe_scenario() {
    let report = probe_report();
    let mut out = Vec::new();
    junit::render(&mut out, &report).unwrap();
    let xml = String::from_utf8(out).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(
        r#"<testsuite name="fixture_probe" tests="1" failures="0" errors="1" skipped="1">"#
    ));
    assert!(xml.contains(r#"<testcase name="test_dummy" status="notrun">"#));
    assert!(xml.contains(
        r#"<error message="This is a global fixture init failure">This is a global fixture init failure</error>"#
    ));
    assert!(xml.trim_end().ends_with("</testsuites>"));
}

#[test]
fn junit_rendering_of_a_mixed_run() {
    let report = mixed_report();
    let mut out = Vec::new();
    junit::render(&mut out, &report).unwrap();
    let xml = String::from_utf8(out).unwrap();

    assert!(xml.contains(r#"<testcase name="adds" status="run"/>"#));
    assert!(xml.contains(r#"<failure message="expected 4, got 5">expected 4, got 5</failure>"#));
    assert!(xml.contains(r#"tests="2" failures="1" errors="0" skipped="0""#));
}

#[test]
fn json_rendering_carries_status_and_details() {
    let report = probe_report();
    let mut out = Vec::new();
    json::render(&mut out, &report).unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["suite"], "fixture_probe");
    assert_eq!(value["status"], "fixture-error");
    assert_eq!(value["cases"][0]["name"], "test_dummy");
    assert_eq!(value["cases"][0]["status"], "skipped");
    assert_eq!(
        value["fixture_failures"][0]["message"],
        "This is a global fixture init failure"
    );
}

#[test]
fn every_renderer_reports_the_same_verbatim_failure_message() {
    let report = probe_report();
    let message = "This is a global fixture init failure";

    let mut text_out = NoColor::new(Vec::new());
    console::render(&mut text_out, &report).unwrap();
    assert!(String::from_utf8(text_out.into_inner()).unwrap().contains(message));

    let mut xml_out = Vec::new();
    junit::render(&mut xml_out, &report).unwrap();
    assert!(String::from_utf8(xml_out).unwrap().contains(message));

    let mut json_out = Vec::new();
    json::render(&mut json_out, &report).unwrap();
    assert!(String::from_utf8(json_out).unwrap().contains(message));
}
