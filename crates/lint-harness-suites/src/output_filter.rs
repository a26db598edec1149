// crates/lint-harness-suites/src/output_filter.rs
// ============================================================================
// Module: Output Filter Suite
// Description: Cases for the tool's `-output-filter` option.
// Purpose: Check findings outside the filtered line range are dropped.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! `-output-filter src.cpp:1:4` keeps findings on lines 1 to 4 of `src.cpp`.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_report::Severity;

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    Suite::new("output_filter", SuiteDefaults::new())
        .with_case(
            ConformanceCase::single_file(
                "line_range",
                [
                    "void deleteMeOne(int* x)",
                    "{",
                    "   delete x;",
                    "}",
                    "void deleteMeTwo(int* x)",
                    "{",
                    "   delete x;",
                    "}",
                ],
            )
            .with_options(["-output-filter", "src.cpp:1:4"])
            .with_rules(["NakedDeleteRule"])
            .expect(
                ExpectedFinding::new("Naked delete called on type 'int'", 3)
                    .with_id("naked delete")
                    .with_severity(Severity::Warning),
            ),
        )
}
