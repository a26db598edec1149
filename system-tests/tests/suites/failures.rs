// system-tests/tests/suites/failures.rs
// ============================================================================
// Module: Failure Classification Suite
// Description: End-to-end runs that fail in each pipeline stage.
// Purpose: Ensure failures are classified and reported with their context.
// Dependencies: system-tests helpers, lint-harness-core
// ============================================================================

//! ## Overview
//! One scenario per failure class, plus a mixed suite checking that
//! failures do not stop the remaining cases.

use std::error::Error;
use std::time::Duration;
use std::time::Instant;

use lint_harness_core::AssertionError;
use lint_harness_core::CaseFilter;
use lint_harness_core::CaseStatus;
use lint_harness_core::ConformanceCase;
use lint_harness_core::ExpectedFinding;
use lint_harness_core::FailureClass;
use lint_harness_core::HarnessError;
use lint_harness_core::InvocationError;
use lint_harness_core::SetupError;
use lint_harness_core::Suite;
use lint_harness_core::SuiteDefaults;
use lint_harness_core::run_case;
use lint_harness_core::run_suites;
use lint_harness_report::Severity;
use system_tests::stub::FORCED_FAILURE_EXIT_CODE;

use crate::helpers::stub::expect_failure;
use crate::helpers::stub::stub_config;

fn defaults() -> SuiteDefaults {
    SuiteDefaults::new()
        .with_rule("NakedDeleteRule")
        .with_id("naked delete")
        .with_severity(Severity::Warning)
}

fn source_case(name: &str) -> ConformanceCase {
    ConformanceCase::single_file(name, ["void deleteMe(int* x)", "{", "   delete x;", "}"])
}

fn int_delete() -> ExpectedFinding {
    ExpectedFinding::new("Naked delete called on type 'int'", 3)
}

// ============================================================================
// SECTION: Setup
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn escaping_fixture_path_is_a_setup_failure() -> Result<(), Box<dyn Error>> {
    let case = ConformanceCase::new("escape")
        .with_file("../escape.cpp", ["int x;"])
        .with_database_file("../escape.cpp")
        .with_target("../escape.cpp");
    let err = expect_failure(run_case(&stub_config(), &defaults(), &case).await, FailureClass::Setup)?;
    assert!(matches!(err, HarnessError::Setup(SetupError::InvalidFixturePath { .. })), "{err}");
    Ok(())
}

// ============================================================================
// SECTION: Invocation
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn missing_executable_is_an_invocation_failure() -> Result<(), Box<dyn Error>> {
    let config = stub_config().with_tool("/nonexistent/colobot-lint");
    let case = source_case("missing_tool").expect(int_delete());
    let err = expect_failure(run_case(&config, &defaults(), &case).await, FailureClass::Invocation)?;
    assert!(matches!(err, HarnessError::Invocation(InvocationError::Launch { .. })), "{err}");
    assert!(err.to_string().contains("/nonexistent/colobot-lint"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn non_zero_exit_carries_code_and_stderr() -> Result<(), Box<dyn Error>> {
    let case = source_case("forced").with_rules(["ForceFailureRule"]);
    let err = expect_failure(run_case(&stub_config(), &defaults(), &case).await, FailureClass::Invocation)?;
    let HarnessError::Invocation(InvocationError::NonZeroExit {
        command,
        code,
        stderr,
        ..
    }) = &err
    else {
        return Err(format!("expected non-zero exit, got {err}").into());
    };
    assert_eq!(*code, Some(i32::from(FORCED_FAILURE_EXIT_CODE)));
    assert!(stderr.contains("forced failure"), "{stderr}");
    assert!(command.contains("-only-rule ForceFailureRule"), "{command}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn hanging_tool_is_killed_at_the_timeout() -> Result<(), Box<dyn Error>> {
    let config = stub_config().with_timeout(Duration::from_secs(1));
    let case = source_case("hang").with_rules(["HangRule"]);
    let started = Instant::now();
    let err = expect_failure(run_case(&config, &defaults(), &case).await, FailureClass::Invocation)?;
    assert!(matches!(err, HarnessError::Invocation(InvocationError::TimedOut { limit_ms: 1000, .. })), "{err}");
    assert!(started.elapsed() < Duration::from_secs(30));
    Ok(())
}

// ============================================================================
// SECTION: Report And Assertion
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn truncated_report_is_a_report_failure() -> Result<(), Box<dyn Error>> {
    let case = source_case("malformed").with_rules(["MalformedOutputRule"]);
    expect_failure(run_case(&stub_config(), &defaults(), &case).await, FailureClass::Report)?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn count_mismatch_lists_actual_findings() -> Result<(), Box<dyn Error>> {
    let case = source_case("count").expect(int_delete()).expect(int_delete());
    let err = expect_failure(run_case(&stub_config(), &defaults(), &case).await, FailureClass::Assertion)?;
    let HarnessError::Assertion(AssertionError::CountMismatch {
        expected,
        actual,
        findings,
    }) = &err
    else {
        return Err(format!("expected count mismatch, got {err}").into());
    };
    assert_eq!((*expected, *actual), (2, 1));
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("Naked delete called on type 'int'"), "{}", findings[0]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn expectation_without_id_or_default_is_an_assertion_failure() -> Result<(), Box<dyn Error>> {
    let case = source_case("unresolved").with_rules(["NakedDeleteRule"]).expect(int_delete());
    let err = expect_failure(
        run_case(&stub_config(), &SuiteDefaults::new(), &case).await,
        FailureClass::Assertion,
    )?;
    assert!(matches!(err, HarnessError::Assertion(AssertionError::Unresolved { .. })), "{err}");
    Ok(())
}

// ============================================================================
// SECTION: Suites
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn failing_cases_do_not_stop_the_suite() -> Result<(), Box<dyn Error>> {
    let suite = Suite::new("mixed", defaults())
        .with_case(source_case("passes").expect(int_delete()))
        .with_case(source_case("forced").with_rules(["ForceFailureRule"]))
        .with_case(source_case("malformed").with_rules(["MalformedOutputRule"]))
        .with_case(source_case("mismatch").expect(ExpectedFinding::new("Naked delete called on type 'int'", 2)));
    let summary = run_suites(&stub_config(), &[suite], &CaseFilter::all(), 3).await;

    assert_eq!((summary.total, summary.passed, summary.failed), (4, 1, 3));
    assert!(!summary.all_passed());
    let classes: Vec<Option<FailureClass>> = summary
        .outcomes
        .iter()
        .map(|outcome| match &outcome.status {
            CaseStatus::Passed => None,
            CaseStatus::Failed {
                class, ..
            } => Some(*class),
        })
        .collect();
    assert_eq!(
        classes,
        [None, Some(FailureClass::Invocation), Some(FailureClass::Report), Some(FailureClass::Assertion)]
    );
    let names: Vec<&str> = summary.outcomes.iter().map(|outcome| outcome.name.as_str()).collect();
    assert_eq!(names, ["mixed.passes", "mixed.forced", "mixed.malformed", "mixed.mismatch"]);
    Ok(())
}
