// crates/lint-harness-report/src/parse/tests.rs
// ============================================================================
// Module: Report Parser Tests
// Description: Unit coverage for XML report parsing.
// Purpose: Pin order preservation and schema failure modes.
// Dependencies: lint-harness-report
// ============================================================================

//! ## Overview
//! Unit coverage for [`super::parse_report`].
//! Invariants:
//! - Document order survives parsing.
//! - Schema violations surface as typed errors, never as empty reports.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only panic-based assertions are permitted."
)]

use super::parse_report;
use crate::error::ReportError;
use crate::finding::Finding;
use crate::finding::Report;
use crate::finding::Severity;
use crate::write::render_report_xml;

const TOOL_OUTPUT: &str = r#"<?xml version="1.0" ?>
<results version="2">
    <cppcheck version="colobot-lint-0.1" />
    <errors>
        <error id="naked delete" severity="warning" msg="Naked delete called on type &apos;int&apos;" verbose="Naked delete called on type &apos;int&apos;">
            <location file="/tmp/x/src.cpp" line="3" />
        </error>
        <error id="whitespace" severity="style" msg="File should end with newline" verbose="File should end with newline">
            <location file="/tmp/x/src.cpp" line="1" />
        </error>
    </errors>
</results>
"#;

#[test]
fn parses_findings_in_document_order() {
    let report = parse_report(TOOL_OUTPUT).unwrap();
    assert_eq!(report.tool_version.as_deref(), Some("colobot-lint-0.1"));
    assert_eq!(
        report.findings,
        vec![
            Finding::new(
                "naked delete",
                Severity::Warning,
                "Naked delete called on type 'int'",
                "/tmp/x/src.cpp",
                3
            ),
            Finding::new(
                "whitespace",
                Severity::Style,
                "File should end with newline",
                "/tmp/x/src.cpp",
                1
            ),
        ]
    );
}

#[test]
fn empty_errors_container_yields_empty_report() {
    let report = parse_report("<results version=\"2\"><errors/></results>").unwrap();
    assert!(report.findings.is_empty());
    assert_eq!(report.tool_version, None);
}

#[test]
fn missing_errors_container_is_rejected() {
    let err = parse_report("<results version=\"2\"></results>").unwrap_err();
    assert!(matches!(err, ReportError::MissingElement("errors")));
}

#[test]
fn wrong_root_is_rejected() {
    let err = parse_report("<report><errors/></report>").unwrap_err();
    assert!(matches!(err, ReportError::UnexpectedRoot(name) if name == "report"));
}

#[test]
fn blank_payload_is_rejected() {
    assert!(matches!(parse_report("   \n").unwrap_err(), ReportError::Empty));
}

#[test]
fn truncated_payload_is_rejected() {
    let err = parse_report("<results><errors><error id=\"a\" severity=\"style\" msg=\"m\">").unwrap_err();
    assert!(matches!(err, ReportError::Xml(_)));
}

#[test]
fn garbage_payload_is_rejected() {
    assert!(parse_report("Segmentation fault (core dumped)").is_err());
}

#[test]
fn finding_without_location_is_rejected() {
    let err = parse_report(
        "<results><errors><error id=\"a\" severity=\"style\" msg=\"m\"/></errors></results>",
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::MissingElement("location")));
}

#[test]
fn missing_message_attribute_is_rejected() {
    let err = parse_report(
        "<results><errors><error id=\"a\" severity=\"style\"><location file=\"f\" line=\"1\"/></error></errors></results>",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReportError::MissingAttribute {
            element: "error",
            attribute: "msg"
        }
    ));
}

#[test]
fn unknown_severity_is_rejected() {
    let err = parse_report(
        "<results><errors><error id=\"a\" severity=\"fatal\" msg=\"m\"><location file=\"f\" line=\"1\"/></error></errors></results>",
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidSeverity(label) if label == "fatal"));
}

#[test]
fn non_numeric_line_is_rejected() {
    let err = parse_report(
        "<results><errors><error id=\"a\" severity=\"style\" msg=\"m\"><location file=\"f\" line=\"three\"/></error></errors></results>",
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidLine(raw) if raw == "three"));
}

#[test]
fn locationless_finding_keeps_line_zero() {
    let report = parse_report(
        r#"<results version="2"><errors>
        <error id="compile warning" severity="warning" msg="unknown argument: '-foo'"><location file="" line="0"/></error>
        <error id="naked delete" severity="warning" msg="Naked delete called on type 'int'"><location file="/w/src.cpp" line="3"/></error>
        </errors></results>"#,
    )
    .unwrap();
    assert_eq!(report.findings.len(), 2);
    assert_eq!(report.findings[0].location.file, "");
    assert_eq!(report.findings[0].location.line, 0);
    assert_eq!(report.findings[1].location.line, 3);
}

#[test]
fn negative_line_is_rejected() {
    let err = parse_report(
        "<results><errors><error id=\"a\" severity=\"style\" msg=\"m\"><location file=\"f\" line=\"-1\"/></error></errors></results>",
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidLine(raw) if raw == "-1"));
}

#[test]
fn missing_file_attribute_reads_as_empty() {
    let report = parse_report(
        "<results><errors><error id=\"a\" severity=\"error\" msg=\"m\"><location line=\"7\"/></error></errors></results>",
    )
    .unwrap();
    assert_eq!(report.findings[0].location.file, "");
    assert_eq!(report.findings[0].location.line, 7);
}

#[test]
fn unrelated_elements_are_ignored() {
    let report = parse_report(
        "<results><meta><error id=\"x\"/></meta><errors><error id=\"a\" severity=\"information\" msg=\"m\"><note/><location file=\"f\" line=\"2\"/><location file=\"g\" line=\"9\"/></error></errors></results>",
    )
    .unwrap();
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].location.file, "f");
    assert_eq!(report.findings[0].location.line, 2);
}

#[test]
fn rendered_report_parses_back_with_special_characters() {
    let report = Report {
        tool_version: Some("colobot-lint-test".to_string()),
        findings: vec![Finding::new(
            "include style",
            Severity::Style,
            "Expected \"a.h\" & <b.h> in order",
            "dir/file name.h",
            12,
        )],
    };
    let parsed = parse_report(&render_report_xml(&report)).unwrap();
    assert_eq!(parsed, report);
}
