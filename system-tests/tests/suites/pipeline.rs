// system-tests/tests/suites/pipeline.rs
// ============================================================================
// Module: Pipeline Suite
// Description: Passing end-to-end runs against the stub tool.
// Purpose: Validate fixture, database, invocation, report and assertion flow.
// Dependencies: system-tests helpers, lint-harness-core, lint-harness-suites
// ============================================================================

//! ## Overview
//! Runs complete cases through `run_case` and `run_suites` with the stub
//! standing in for colobot-lint.
//! Invariants:
//! - Expected findings match on id, severity, message and line.
//! - Duplicate database entries reach the tool unchanged.

use std::error::Error;

use lint_harness_core::CaseFilter;
use lint_harness_core::CaseStatus;
use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::FailureClass;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::WORKSPACE_PLACEHOLDER;
use lint_harness_core::run_case;
use lint_harness_core::run_suites;
use lint_harness_report::Severity;
use lint_harness_suites::catalog;
use system_tests::stub::rules::PROBE_RESOLVED;
use system_tests::stub::rules::PROBE_UNRESOLVED;

use crate::helpers::stub::expect_failure;
use crate::helpers::stub::stub_config;

const LICENSE_OPTION: &str = "-license-template-file";

fn naked_delete_defaults() -> SuiteDefaults {
    SuiteDefaults::new()
        .with_rule("NakedDeleteRule")
        .with_id("naked delete")
        .with_severity(Severity::Warning)
}

fn naked_delete_case() -> ConformanceCase {
    ConformanceCase::single_file("naked_delete", ["void deleteMe(int* x)", "{", "   delete x;", "}"])
}

fn database_entry(message: &str, line: u32) -> ExpectedFinding {
    ExpectedFinding::new(message, line).with_id("database entry").with_severity(Severity::Information)
}

fn probe(message: &str) -> ExpectedFinding {
    ExpectedFinding::new(message, 1).with_id("harness probe").with_severity(Severity::Information)
}

// ============================================================================
// SECTION: Single Cases
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn naked_delete_scenario_passes() -> Result<(), Box<dyn Error>> {
    let case = naked_delete_case().expect(ExpectedFinding::new("Naked delete called on type 'int'", 3));
    run_case(&stub_config(), &naked_delete_defaults(), &case).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn clean_source_with_no_expectations_passes() -> Result<(), Box<dyn Error>> {
    let case = ConformanceCase::single_file("clean", ["int x;", ""]);
    run_case(&stub_config(), &naked_delete_defaults(), &case).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn every_single_field_mutation_fails() -> Result<(), Box<dyn Error>> {
    let base = || ExpectedFinding::new("Naked delete called on type 'int'", 3);
    let mutations = [
        ("id", base().with_id("naked new")),
        ("severity", base().with_severity(Severity::Error)),
        ("message", ExpectedFinding::new("Naked delete called on type 'long'", 3)),
        ("line", ExpectedFinding::new("Naked delete called on type 'int'", 4)),
    ];
    for (field, expected) in mutations {
        let case = naked_delete_case().expect(expected);
        let err = expect_failure(
            run_case(&stub_config(), &naked_delete_defaults(), &case).await,
            FailureClass::Assertion,
        )?;
        let rendered = err.to_string();
        assert!(rendered.contains(&format!("finding[0].{field}")), "{rendered}");
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_trailing_newline_is_observable() -> Result<(), Box<dyn Error>> {
    let defaults = SuiteDefaults::new()
        .with_rule("WhitespaceRule")
        .with_id("whitespace")
        .with_severity(Severity::Style);
    let lines = ["void Foo()", "{", "    int x = 0;", "}"];

    let unterminated = ConformanceCase::single_file("unterminated", lines)
        .expect(ExpectedFinding::new("File should end with newline", 3));
    run_case(&stub_config(), &defaults, &unterminated).await?;

    let terminated = ConformanceCase::single_file("terminated", lines.into_iter().chain([""]));
    run_case(&stub_config(), &defaults, &terminated).await?;
    Ok(())
}

// ============================================================================
// SECTION: Database And Options
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn database_entries_keep_order_duplicates_and_substituted_flags()
-> Result<(), Box<dyn Error>> {
    let command = |file: &str| format!("/usr/bin/c++ -c -std=c++11 -I. -DLEVEL=2 {file} -o {file}.o");
    let case = ConformanceCase::new("database_echo")
        .with_file("src.cpp", ["int x;", ""])
        .with_file("other.cpp", ["int y;", ""])
        .with_database_file("src.cpp")
        .with_database_file("src.cpp")
        .with_database_file("other.cpp")
        .with_target("src.cpp")
        .with_compile_flag(format!("-I{WORKSPACE_PLACEHOLDER}"))
        .with_compile_flag("-DLEVEL=2")
        .with_rules(["DatabaseEchoRule"])
        .expect(database_entry(&command("src.cpp"), 1))
        .expect(database_entry(&command("src.cpp"), 2))
        .expect(database_entry(&command("other.cpp"), 3));
    run_case(&stub_config(), &SuiteDefaults::new(), &case).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_entries_report_a_single_finding() -> Result<(), Box<dyn Error>> {
    let case = ConformanceCase::new("duplicates")
        .with_file("src.cpp", ["void deleteMe(int* x)", "{", "   delete x;", "}"])
        .with_database_file("src.cpp")
        .with_database_file("src.cpp")
        .with_target("src.cpp")
        .with_target("src.cpp")
        .expect(ExpectedFinding::new("Naked delete called on type 'int'", 3));
    run_case(&stub_config(), &naked_delete_defaults(), &case).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn placeholder_options_resolve_to_workspace_paths() -> Result<(), Box<dyn Error>> {
    let case = ConformanceCase::single_file("probe", ["int x;", ""])
        .with_file("license.txt", ["// Copyright"])
        .with_options([LICENSE_OPTION.to_string(), format!("{WORKSPACE_PLACEHOLDER}/license.txt")])
        .with_rules(["HarnessProbeRule"])
        .expect(probe(PROBE_RESOLVED))
        .expect(probe(PROBE_RESOLVED));
    run_case(&stub_config(), &SuiteDefaults::new(), &case).await?;

    let missing = ConformanceCase::single_file("probe_missing", ["int x;", ""])
        .with_options([LICENSE_OPTION.to_string(), format!("{WORKSPACE_PLACEHOLDER}/missing.txt")])
        .with_rules(["HarnessProbeRule"])
        .expect(probe(PROBE_RESOLVED))
        .expect(probe(PROBE_UNRESOLVED));
    run_case(&stub_config(), &SuiteDefaults::new(), &missing).await?;
    Ok(())
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn catalog_cases_covered_by_the_stub_pass() -> Result<(), Box<dyn Error>> {
    let filter = CaseFilter::new([
        "naked_delete.*",
        "whitespace.*",
        "output_filter.*",
        "compilation_database.duplicate_entries",
        "compilation_database.index_lists_more_files_than_targets",
    ])?;
    let summary = run_suites(&stub_config(), &catalog(), &filter, 8).await;

    let failures: Vec<String> = summary
        .outcomes
        .iter()
        .filter_map(|outcome| match &outcome.status {
            CaseStatus::Passed => None,
            CaseStatus::Failed {
                class,
                message,
            } => Some(format!("{} [{class}]: {message}", outcome.name)),
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
    assert_eq!(summary.total, 12);
    assert_eq!(summary.outcomes[0].name, "naked_delete.no_delete");
    Ok(())
}
