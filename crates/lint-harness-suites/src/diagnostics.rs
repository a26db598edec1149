// crates/lint-harness-suites/src/diagnostics.rs
// ============================================================================
// Module: Diagnostic Handler Suite
// Description: Compiler warnings and errors surfaced as findings.
// Purpose: Check compile problems are report content, not invocation failures.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! The tool exits 0 for code that does not compile; the compiler's
//! complaint arrives as an ordinary finding.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::case::PROJECT_INCLUDE_OPTION;
use lint_harness_core::substitution::WORKSPACE_PLACEHOLDER;
use lint_harness_report::Severity;

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    Suite::new("diagnostics", SuiteDefaults::new())
        .with_case(
            ConformanceCase::single_file("compile_warning", ["int Foo()", "{", "}", ""])
                .with_compile_flag("-Wall")
                .expect(
                    ExpectedFinding::new("control reaches end of non-void function", 3)
                        .with_id("compile warning")
                        .with_severity(Severity::Warning),
                ),
        )
        .with_case(
            ConformanceCase::single_file(
                "compile_error",
                ["void Foo()", "{", "   return Bar();", "}", ""],
            )
            .with_compile_flag("-Wall")
            .expect(
                ExpectedFinding::new("use of undeclared identifier 'Bar'", 3)
                    .with_id("compile error")
                    .with_severity(Severity::Error),
            ),
        )
        .with_case(
            ConformanceCase::new("compile_error_in_fake_header_source")
                .with_file("foo/bar.h", ["Bar Foo();", ""])
                .with_file("fake_header_sources/foo/bar.cpp", ["#include \"foo/bar.h\""])
                .with_database_file("fake_header_sources/foo/bar.cpp")
                .with_target("fake_header_sources/foo/bar.cpp")
                .with_compile_flag(format!("-I{WORKSPACE_PLACEHOLDER}"))
                .with_options([PROJECT_INCLUDE_OPTION, WORKSPACE_PLACEHOLDER])
                .expect(
                    ExpectedFinding::new(
                        "Including single header file should not result in compile error: \
                         unknown type name 'Bar'",
                        1,
                    )
                    .with_id("header file not self-contained")
                    .with_severity(Severity::Error),
                ),
        )
}
