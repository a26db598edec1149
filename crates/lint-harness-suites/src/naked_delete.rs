// crates/lint-harness-suites/src/naked_delete.rs
// ============================================================================
// Module: Naked Delete Suite
// Description: Cases for the NakedDeleteRule.
// Purpose: Check the deleted type is named for builtin, user and array types.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! Naked `delete` findings name the pointee type of the deleted expression.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_report::Severity;

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    let defaults = SuiteDefaults::new()
        .with_rule("NakedDeleteRule")
        .with_id("naked delete")
        .with_severity(Severity::Warning);
    Suite::new("naked_delete", defaults)
        .with_case(ConformanceCase::single_file("no_delete", ["void f(int x)", "{", "}", ""]))
        .with_case(
            ConformanceCase::single_file("builtin_type", ["void f(int* x)", "{", "  delete x;", "}"])
                .expect(ExpectedFinding::new("Naked delete called on type 'int'", 3)),
        )
        .with_case(
            ConformanceCase::single_file(
                "user_type",
                ["class Foo", "{};", "void deleteMe(Foo* x)", "{", "  delete x;", "}"],
            )
            .expect(ExpectedFinding::new("Naked delete called on type 'class Foo'", 5)),
        )
        .with_case(
            ConformanceCase::single_file(
                "array_type",
                ["void deleteMe(char* x)", "{", "  delete[] x;", "}"],
            )
            .expect(ExpectedFinding::new("Naked delete called on type 'char'", 3)),
        )
}
