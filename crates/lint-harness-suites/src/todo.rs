// crates/lint-harness-suites/src/todo.rs
// ============================================================================
// Module: TODO Comment Suite
// Description: Cases for the TodoRule.
// Purpose: Check line and block comments, including multi-line blocks.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! Every `TODO:` inside a comment is reported on its own line.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_report::Severity;

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    let defaults = SuiteDefaults::new()
        .with_rule("TodoRule")
        .with_id("TODO comment")
        .with_severity(Severity::Information);
    Suite::new("todo", defaults)
        .with_case(ConformanceCase::single_file("normal_comment", ["// Comment"]))
        .with_case(
            ConformanceCase::single_file("single_comment", ["// TODO: comment"])
                .expect(ExpectedFinding::new("TODO: comment", 1)),
        )
        .with_case(
            ConformanceCase::single_file("two_comments", ["// TODO: comment1", "// TODO: comment2"])
                .expect(ExpectedFinding::new("TODO: comment1", 1))
                .expect(ExpectedFinding::new("TODO: comment2", 2)),
        )
        .with_case(ConformanceCase::single_file("normal_block_comment", ["/* comment */"]))
        .with_case(
            ConformanceCase::single_file("inline_block_comment", ["int /* TODO: comment */ x;"])
                .expect(ExpectedFinding::new("TODO: comment", 1)),
        )
        .with_case(
            ConformanceCase::single_file(
                "multi_line_block_comment",
                ["/* TODO: comment1", "Some text", "TODO: comment2 */"],
            )
            .expect(ExpectedFinding::new("TODO: comment1", 1))
            .expect(ExpectedFinding::new("TODO: comment2", 3)),
        )
}
