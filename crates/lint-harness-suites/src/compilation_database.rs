// crates/lint-harness-suites/src/compilation_database.rs
// ============================================================================
// Module: Compilation Database Suite
// Description: Cases where the database itself is the fixture under test.
// Purpose: Check duplicate entries and processing order do not change
//          findings.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! ## Overview
//! The harness writes database entries exactly as listed. These cases hand
//! the tool repeated entries, and the same two-file project in both orders,
//! and expect the tool to report each finding once regardless.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::case::PROJECT_INCLUDE_OPTION;
use lint_harness_core::substitution::WORKSPACE_PLACEHOLDER;
use lint_harness_report::Severity;

/// Fake header source compiling `src.h` on its own.
const FAKE_HEADER_SOURCE: &str = "fake_header_sources/src.cpp";

/// Two-file project declaring `Foo` in a header; `defined` adds a definition
/// to the source module.
fn header_project(name: &str, order: [&str; 2], defined: bool) -> ConformanceCase {
    let source: Vec<&str> =
        if defined { vec!["#include \"src.h\"", "void Foo() {}"] } else { vec!["#include \"src.h\""] };
    let mut case = ConformanceCase::new(name)
        .with_file("src.h", ["void Foo();"])
        .with_file(FAKE_HEADER_SOURCE, ["#include \"src.h\""])
        .with_file("src.cpp", source)
        .with_compile_flag(format!("-I{WORKSPACE_PLACEHOLDER}"))
        .with_options([PROJECT_INCLUDE_OPTION, WORKSPACE_PLACEHOLDER])
        .with_rules(["UndefinedFunctionRule"]);
    for file in order {
        case = case.with_database_file(file).with_target(file);
    }
    case
}

/// Finding for a declared but undefined `Foo`.
fn undefined_foo() -> ExpectedFinding {
    ExpectedFinding::new("Function 'Foo' declared but never defined", 1)
        .with_id("undefined function")
        .with_severity(Severity::Information)
}

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    let defaults = SuiteDefaults::new()
        .with_rule("NakedDeleteRule")
        .with_id("naked delete")
        .with_severity(Severity::Warning);
    Suite::new("compilation_database", defaults)
        .with_case(
            ConformanceCase::new("duplicate_entries")
                .with_file("src.cpp", ["void deleteMe(int* x)", "{", "   delete x;", "}"])
                .with_database_file("src.cpp")
                .with_database_file("src.cpp")
                .with_target("src.cpp")
                .expect(ExpectedFinding::new("Naked delete called on type 'int'", 3)),
        )
        .with_case(
            ConformanceCase::new("index_lists_more_files_than_targets")
                .with_file("src.cpp", ["void deleteMe(int* x)", "{", "   delete x;", "}"])
                .with_file("other.cpp", ["void deleteOther(long* y)", "{", "   delete y;", "}"])
                .with_database_file("other.cpp")
                .with_database_file("src.cpp")
                .with_target("src.cpp")
                .expect(ExpectedFinding::new("Naked delete called on type 'int'", 3)),
        )
        .with_case(header_project("defined_in_source_module", [FAKE_HEADER_SOURCE, "src.cpp"], true))
        .with_case(header_project(
            "defined_in_source_module_reversed",
            ["src.cpp", FAKE_HEADER_SOURCE],
            true,
        ))
        .with_case(
            header_project("undefined_in_source_module", [FAKE_HEADER_SOURCE, "src.cpp"], false)
                .expect(undefined_foo()),
        )
        .with_case(
            header_project(
                "undefined_in_source_module_reversed",
                ["src.cpp", FAKE_HEADER_SOURCE],
                false,
            )
            .expect(undefined_foo()),
        )
}
