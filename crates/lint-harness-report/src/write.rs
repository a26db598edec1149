// crates/lint-harness-report/src/write.rs
// ============================================================================
// Module: Report Writer
// Description: Renders findings in the colobot-lint XML report format.
// Purpose: Produce byte-stable reports for stub tools and fixtures.
// Dependencies: quick-xml
// ============================================================================

//! ## Overview
//! Emits the same document shape the analysis tool prints: an XML
//! declaration, `<results version="2">`, an optional `<cppcheck>` banner and
//! the `<errors>` container. The `verbose` attribute mirrors `msg`, as the
//! tool does.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::finding::Report;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a report as an XML document.
#[must_use]
pub fn render_report_xml(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?>\n");
    out.push_str("<results version=\"2\">\n");
    if let Some(version) = &report.tool_version {
        let _ = writeln!(out, "    <cppcheck version=\"{}\" />", escape(version.as_str()));
    }
    if report.findings.is_empty() {
        out.push_str("    <errors />\n");
    } else {
        out.push_str("    <errors>\n");
        for finding in &report.findings {
            let message = escape(finding.message.as_str());
            let _ = writeln!(
                out,
                "        <error id=\"{}\" severity=\"{}\" msg=\"{message}\" verbose=\"{message}\">",
                escape(finding.id.as_str()),
                finding.severity,
            );
            let _ = writeln!(
                out,
                "            <location file=\"{}\" line=\"{}\" />",
                escape(finding.location.file.as_str()),
                finding.location.line,
            );
            out.push_str("        </error>\n");
        }
        out.push_str("    </errors>\n");
    }
    out.push_str("</results>\n");
    out
}
