// crates/lint-harness-suites/src/naked_new.rs
// ============================================================================
// Module: Naked New Suite
// Description: Cases for the NakedNewRule.
// Purpose: Check the allocated type is named for builtin, user and array types.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! Naked `new` findings name the allocated type.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_report::Severity;

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    let defaults = SuiteDefaults::new()
        .with_rule("NakedNewRule")
        .with_id("naked new")
        .with_severity(Severity::Warning);
    Suite::new("naked_new", defaults)
        .with_case(
            ConformanceCase::single_file("builtin_type", ["int* x = new int;"])
                .expect(ExpectedFinding::new("Naked new called with type 'int'", 1)),
        )
        .with_case(
            ConformanceCase::single_file("user_type", ["class Foo", "{};", "Foo* foo = new Foo();"])
                .expect(ExpectedFinding::new("Naked new called with type 'class Foo'", 3)),
        )
        .with_case(
            ConformanceCase::single_file("array_type", ["char* x = new char[256];"])
                .expect(ExpectedFinding::new("Naked new called with type 'char'", 1)),
        )
}
