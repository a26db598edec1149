// crates/lint-harness-suites/src/include_style.rs
// ============================================================================
// Module: Include Style Suite
// Description: Cases for the IncludeStyleRule.
// Purpose: Exercise placeholders in both compile flags and tool options.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! ## Overview
//! Each case lays out a `project/` tree with local headers and a `system/`
//! tree with system headers, adds both as include directories, and marks
//! `project/` as the project-local include path.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::case::PROJECT_INCLUDE_OPTION;
use lint_harness_core::substitution::WORKSPACE_PLACEHOLDER;
use lint_harness_report::Severity;

/// Main file of every project case.
const MAIN_FILE: &str = "project/src.cpp";

/// Project layout with `main_lines`, empty project headers and empty system
/// headers.
fn project_case(
    name: &str,
    main_lines: &[&str],
    project_headers: &[&str],
    system_headers: &[&str],
) -> ConformanceCase {
    let mut case = ConformanceCase::new(name).with_file(MAIN_FILE, main_lines.iter().copied());
    for header in project_headers {
        case = case.with_file(format!("project/{header}"), Vec::<String>::new());
    }
    for header in system_headers {
        case = case.with_file(format!("system/{header}"), Vec::<String>::new());
    }
    case.with_database_file(MAIN_FILE)
        .with_target(MAIN_FILE)
        .with_compile_flag(format!("-I{WORKSPACE_PLACEHOLDER}/project"))
        .with_compile_flag(format!("-I{WORKSPACE_PLACEHOLDER}/system"))
        .with_options([PROJECT_INCLUDE_OPTION.to_string(), format!("{WORKSPACE_PLACEHOLDER}/project")])
}

/// Headers shared by the ordering cases.
const ORDERING_HEADERS: [&str; 4] = ["abc.h", "def.h", "def/abc.h", "def/def.h"];

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    let defaults = SuiteDefaults::new()
        .with_rule("IncludeStyleRule")
        .with_id("include style")
        .with_severity(Severity::Style);
    Suite::new("include_style", defaults)
        .with_case(ConformanceCase::single_file("no_includes", [""]))
        .with_case(project_case(
            "local_includes_sorted",
            &["#include \"abc.h\"", "#include \"def.h\"", "", "#include \"def/abc.h\"", "#include \"def/def.h\""],
            &ORDERING_HEADERS,
            &[],
        ))
        .with_case(
            project_case(
                "local_includes_not_sorted",
                &[
                    "#include \"abc.h\"",
                    "#include \"def.h\"",
                    "",
                    "#include \"def/def.h\"",
                    "#include \"def/abc.h\"",
                ],
                &ORDERING_HEADERS,
                &[],
            )
            .expect(ExpectedFinding::new(
                "Broken alphabetical ordering, expected 'def/abc.h', not 'def/def.h'",
                4,
            )),
        )
        .with_case(
            project_case(
                "different_subpaths_in_one_block",
                &["#include \"abc.h\"", "#include \"def.h\"", "#include \"def/abc.h\"", "#include \"def/def.h\""],
                &ORDERING_HEADERS,
                &[],
            )
            .expect(ExpectedFinding::new("Expected empty line between include directives", 3)),
        )
        .with_case(project_case(
            "system_includes_unsorted",
            &["#include <system_header2.h>", "#include <system_header1.h>"],
            &[],
            &["system_header1.h", "system_header2.h"],
        ))
}
