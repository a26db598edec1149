// crates/lint-harness-suites/src/whitespace.rs
// ============================================================================
// Module: Whitespace Suite
// Description: Cases for the WhitespaceRule.
// Purpose: Depend on byte-exact fixtures: tabs, CR line endings, trailing
//          spaces and the presence of a final newline.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! Whitespace findings spell out identifier and severity; the suite defines
//! rules only.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_report::Severity;

/// Fully specified whitespace expectation.
fn whitespace(message: &str, line: u32) -> ExpectedFinding {
    ExpectedFinding::new(message, line).with_id("whitespace").with_severity(Severity::Style)
}

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    Suite::new("whitespace", SuiteDefaults::new().with_rule("WhitespaceRule"))
        .with_case(ConformanceCase::single_file(
            "correct_whitespace",
            ["void Foo()", "{", "    int x = 0;", "}", ""],
        ))
        .with_case(
            ConformanceCase::single_file(
                "whitespace_at_end_of_line",
                ["void Foo()", "{", "    int x = 0;   ", "}", ""],
            )
            .expect(whitespace("Whitespace at end of line", 3)),
        )
        .with_case(
            ConformanceCase::single_file(
                "tab_character",
                ["void Foo()", "{", "\tint x = 0;", "\t\tint y = 0;", "}", ""],
            )
            .expect(whitespace("Tab character is not allowed as whitespace", 3))
            .expect(whitespace("Tab character is not allowed as whitespace", 4)),
        )
        .with_case(
            ConformanceCase::single_file(
                "dos_line_endings",
                ["void Foo()\r", "{\r", "    int x = 0;\r", "}", ""],
            )
            .expect(whitespace("File seems to have DOS style line endings", 1)),
        )
        .with_case(
            ConformanceCase::single_file(
                "no_newline_at_end_of_file",
                ["void Foo()", "{", "    int x = 0;", "}"],
            )
            .expect(whitespace("File should end with newline", 3)),
        )
}
