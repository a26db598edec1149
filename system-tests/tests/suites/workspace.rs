// system-tests/tests/suites/workspace.rs
// ============================================================================
// Module: Workspace Lifecycle Suite
// Description: Drives the pipeline stages by hand around one workspace.
// Purpose: Check workspace isolation, cleanup and debug retention.
// Dependencies: system-tests helpers, lint-harness-core, lint-harness-report
// ============================================================================

//! ## Overview
//! Exercises the pipeline building blocks directly so the workspace root is
//! observable before and after release.
//! Invariants:
//! - Released workspaces are removed unless debug mode is on.
//! - Concurrent cases never share a workspace.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use lint_harness_core::CaseFilter;
use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::FixtureTree;
use lint_harness_core::HarnessConfig;
use lint_harness_core::InvocationSpec;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::WORKSPACE_PLACEHOLDER;
use lint_harness_core::Workspace;
use lint_harness_core::case::PROJECT_INCLUDE_OPTION;
use lint_harness_core::compdb::COMPILE_COMMANDS_FILE;
use lint_harness_core::compdb::write_compilation_database;
use lint_harness_core::fixture::materialize;
use lint_harness_core::invocation::run_tool;
use lint_harness_core::run_suites;
use lint_harness_core::substitution::substitute_all;
use lint_harness_report::Severity;
use lint_harness_report::parse_report;
use system_tests::stub::rules::PROBE_RESOLVED;

use crate::helpers::stub::stub_config;

/// Runs the probe rule in a fresh workspace and returns the released root.
async fn probe_run(config: &HarnessConfig) -> Result<(PathBuf, Option<PathBuf>), Box<dyn Error>> {
    let workspace = Workspace::acquire(config)?;
    let root = workspace.root().to_path_buf();

    let fixture = FixtureTree::new().with_file("src.cpp", ["int x;", ""]);
    materialize(&fixture, &root)?;
    let source = workspace.resolve("src.cpp")?;
    write_compilation_database(&root, std::slice::from_ref(&source), &[])?;
    assert!(root.join(COMPILE_COMMANDS_FILE).is_file());

    let options = substitute_all(
        &[PROJECT_INCLUDE_OPTION.to_string(), WORKSPACE_PLACEHOLDER.to_string()],
        &root,
    );
    let spec = InvocationSpec::new(vec![source])
        .with_rules(vec!["HarnessProbeRule".to_string()])
        .with_options(options);
    let output = run_tool(config, &root, &spec).await?;
    let report = parse_report(&output.stdout)?;
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].message, PROBE_RESOLVED);
    assert_eq!(report.findings[0].location.file, root.display().to_string());

    Ok((root, workspace.release()))
}

#[tokio::test(flavor = "multi_thread")]
async fn released_workspace_is_removed() -> Result<(), Box<dyn Error>> {
    let (root, retained) = probe_run(&stub_config()).await?;
    assert_eq!(retained, None);
    assert!(!root.exists(), "{} still exists", root.display());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_mode_retains_workspace() -> Result<(), Box<dyn Error>> {
    let (root, retained) = probe_run(&stub_config().with_debug(true)).await?;
    assert_eq!(retained.as_deref(), Some(root.as_path()));
    assert!(root.join("src.cpp").is_file());
    assert!(root.join(COMPILE_COMMANDS_FILE).is_file());
    fs::remove_dir_all(&root)?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_cases_use_isolated_workspaces() -> Result<(), Box<dyn Error>> {
    let defaults = SuiteDefaults::new()
        .with_rule("NakedDeleteRule")
        .with_id("naked delete")
        .with_severity(Severity::Warning);
    let mut suite = Suite::new("parallel", defaults);
    for index in 0..16_u32 {
        let mut lines = vec!["void deleteMe(int* x)".to_string(), "{".to_string()];
        lines.extend((0..index).map(|_| "   int pad = 0;".to_string()));
        lines.extend(["   delete x;".to_string(), "}".to_string()]);
        suite = suite.with_case(
            ConformanceCase::single_file(format!("case_{index:02}"), lines)
                .expect(ExpectedFinding::new("Naked delete called on type 'int'", index + 3)),
        );
    }
    let summary = run_suites(&stub_config(), &[suite], &CaseFilter::all(), 8).await;
    let failed: Vec<&str> = summary
        .outcomes
        .iter()
        .filter(|outcome| !outcome.passed())
        .map(|outcome| outcome.name.as_str())
        .collect();
    assert!(failed.is_empty(), "failed: {}", failed.join(", "));
    assert_eq!(summary.total, 16);
    Ok(())
}
