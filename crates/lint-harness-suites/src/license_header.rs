// crates/lint-harness-suites/src/license_header.rs
// ============================================================================
// Module: License Header Suite
// Description: Cases for the LicenseInHeaderRule.
// Purpose: Pass the license template through a workspace-placeholder option.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! The template file lives in the workspace, so its path is only known after
//! allocation; cases name it as `$TEMP_DIR/license.txt`.

use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::case::PROJECT_INCLUDE_OPTION;
use lint_harness_core::substitution::WORKSPACE_PLACEHOLDER;
use lint_harness_report::Severity;

/// License template used by every case.
const LICENSE: [&str; 3] = ["/* Copyright", "   Bla bla bla", "*/"];

/// Finding for a header whose second line deviates from the template.
fn wrong_second_line() -> ExpectedFinding {
    ExpectedFinding::new("File doesn't have proper license header; expected line was '   Bla bla bla'", 2)
}

/// Returns the options pointing the tool at the template.
fn template_options() -> [String; 2] {
    ["-license-template-file".to_string(), format!("{WORKSPACE_PLACEHOLDER}/license.txt")]
}

/// Single source file checked against the template.
fn with_template(name: &str, source: &[&str]) -> ConformanceCase {
    ConformanceCase::new(name)
        .with_file("src.cpp", source.iter().copied())
        .with_file("license.txt", LICENSE)
        .with_database_file("src.cpp")
        .with_target("src.cpp")
        .with_options(template_options())
}

/// Builds the suite.
#[must_use]
pub fn suite() -> Suite {
    let defaults = SuiteDefaults::new()
        .with_rule("LicenseInHeaderRule")
        .with_id("license header")
        .with_severity(Severity::Style);
    Suite::new("license_header", defaults)
        .with_case(ConformanceCase::single_file(
            "no_license_file_supplied",
            ["void Foo()", "{", "    int x = 0;", "}", ""],
        ))
        .with_case(with_template(
            "correct_header",
            &["/* Copyright", "   Bla bla bla", "*/", "void Foo()", "{", "    int x = 0;", "}", ""],
        ))
        .with_case(
            with_template(
                "incorrect_header",
                &["/* Copyright", "   Bla", "*/", "void Foo()", "{", "    int x = 0;", "}", ""],
            )
            .expect(wrong_second_line()),
        )
        .with_case(
            ConformanceCase::new("incorrect_header_in_fake_header")
                .with_file(
                    "src.h",
                    ["/* Copyright", "   Bla", "*/", "void Foo()", "{", "    int x = 0;", "}", ""],
                )
                .with_file("fake_header_sources/src.cpp", ["#include \"src.h\""])
                .with_file("license.txt", LICENSE)
                .with_database_file("fake_header_sources/src.cpp")
                .with_target("fake_header_sources/src.cpp")
                .with_compile_flag(format!("-I{WORKSPACE_PLACEHOLDER}"))
                .with_options([PROJECT_INCLUDE_OPTION, WORKSPACE_PLACEHOLDER])
                .with_options(template_options())
                .expect(wrong_second_line()),
        )
}
