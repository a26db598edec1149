// crates/lint-harness-core/src/runner.rs
// ============================================================================
// Module: Case Runner
// Description: Runs conformance cases end to end and summarizes outcomes.
// Purpose: Drive materialize, invoke, parse, assert and release per case.
// Dependencies: glob, serde, tokio, tracing, lint-harness-report
// ============================================================================

//! ## Overview
//! [`run_case`] executes one case inside its own [`Workspace`]:
//! fixture files are materialized, the compilation database is written with
//! substituted flags, the tool runs with substituted options, its stdout is
//! parsed, and the findings are compared with the expectations. The
//! workspace is released on every exit path.
//!
//! [`run_suites`] runs every case selected by a [`CaseFilter`], at most
//! `jobs` at a time. Cases share nothing but the immutable configuration.
//! Invariants:
//! - Outcomes are returned in catalog order, whatever the completion order.
//! - Each failure carries exactly one [`FailureClass`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Arc;

use glob::Pattern;
use lint_harness_report::parse_report;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::assertion::assert_findings;
use crate::case::ConformanceCase;
use crate::case::Suite;
use crate::compdb::write_compilation_database;
use crate::config::HarnessConfig;
use crate::error::FailureClass;
use crate::error::HarnessError;
use crate::error::SetupError;
use crate::expectation::SuiteDefaults;
use crate::fixture::materialize;
use crate::invocation::InvocationSpec;
use crate::invocation::run_tool;
use crate::substitution::substitute_all;
use crate::workspace::Workspace;

// ============================================================================
// SECTION: Case Filter
// ============================================================================

/// Invalid `--filter` pattern.
#[derive(Debug, Error)]
#[error("invalid case filter '{pattern}': {source}")]
pub struct FilterError {
    /// Offending pattern.
    pub pattern: String,
    /// Glob parse error.
    pub source: glob::PatternError,
}

/// Glob-based case selection over qualified names.
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    /// Compiled patterns; empty selects everything.
    patterns: Vec<Pattern>,
}

impl CaseFilter {
    /// Selects every case.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Compiles `patterns`; a case is selected when any of them matches.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] for the first invalid pattern.
    pub fn new<I, S>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Pattern::new(pattern).map_err(|source| FilterError {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
        })
    }

    /// Returns true when `qualified_name` is selected.
    #[must_use]
    pub fn matches(&self, qualified_name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|pattern| pattern.matches(qualified_name))
    }
}

/// Returns the selected cases with their suites, in catalog order.
#[must_use]
pub fn select_cases<'a>(
    suites: &'a [Suite],
    filter: &CaseFilter,
) -> Vec<(&'a Suite, &'a ConformanceCase)> {
    suites
        .iter()
        .flat_map(|suite| suite.cases.iter().map(move |case| (suite, case)))
        .filter(|(suite, case)| filter.matches(&suite.qualified_name(case)))
        .collect()
}

// ============================================================================
// SECTION: Single Case
// ============================================================================

/// Runs one case end to end.
///
/// # Errors
///
/// Returns [`HarnessError`] classified as setup, invocation, report or
/// assertion failure.
pub async fn run_case(
    config: &HarnessConfig,
    defaults: &SuiteDefaults,
    case: &ConformanceCase,
) -> Result<(), HarnessError> {
    let workspace = Workspace::acquire(config)?;
    let root = workspace.root();

    materialize(&case.fixture, root)?;
    let database_files = resolve_all(&workspace, &case.database_files)?;
    let flags = substitute_all(&case.compile_flags, root);
    write_compilation_database(root, &database_files, &flags)?;

    let spec = InvocationSpec::new(resolve_all(&workspace, &case.targets)?)
        .with_rules(case.effective_rules(defaults).to_vec())
        .with_options(substitute_all(&case.options, root));
    let output = run_tool(config, root, &spec).await?;
    let report = parse_report(&output.stdout)?;
    assert_findings(&report.findings, &case.expected, defaults)?;

    workspace.release();
    Ok(())
}

/// Resolves workspace-relative paths to absolute ones.
fn resolve_all(workspace: &Workspace, paths: &[String]) -> Result<Vec<PathBuf>, SetupError> {
    paths.iter().map(|path| workspace.resolve(path)).collect()
}

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseStatus {
    /// Findings matched.
    Passed,
    /// The case failed.
    Failed {
        /// Failure class.
        class: FailureClass,
        /// Rendered error.
        message: String,
    },
}

impl CaseStatus {
    /// Builds the status of a finished case.
    #[must_use]
    pub fn from_result(result: &Result<(), HarnessError>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(err) => Self::Failed {
                class: err.failure_class(),
                message: err.to_string(),
            },
        }
    }
}

/// Named case outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    /// Qualified case name.
    pub name: String,
    /// Outcome.
    #[serde(flatten)]
    pub status: CaseStatus,
}

impl CaseOutcome {
    /// Returns true when the case passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.status, CaseStatus::Passed)
    }
}

/// Outcomes of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of selected cases.
    pub total: usize,
    /// Number of passed cases.
    pub passed: usize,
    /// Number of failed cases.
    pub failed: usize,
    /// Per-case outcomes in catalog order.
    pub outcomes: Vec<CaseOutcome>,
}

impl RunSummary {
    /// Builds a summary from ordered outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<CaseOutcome>) -> Self {
        let passed = outcomes.iter().filter(|outcome| outcome.passed()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        }
    }

    /// Returns true when no selected case failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// ============================================================================
// SECTION: Suites
// ============================================================================

/// Message recorded for a case whose task was cancelled before finishing.
const CANCELLED_MESSAGE: &str = "case task was cancelled before finishing";

/// Runs every selected case with at most `jobs` in flight, clamped to
/// `1..=Semaphore::MAX_PERMITS`.
pub async fn run_suites(
    config: &HarnessConfig,
    suites: &[Suite],
    filter: &CaseFilter,
    jobs: usize,
) -> RunSummary {
    let selected = select_cases(suites, filter);
    let permits = Arc::new(Semaphore::new(jobs.clamp(1, Semaphore::MAX_PERMITS)));
    let config = Arc::new(config.clone());
    let mut tasks = JoinSet::new();

    for (index, (suite, case)) in selected.iter().enumerate() {
        let name = suite.qualified_name(case);
        let defaults = suite.defaults.clone();
        let case = (*case).clone();
        let config = Arc::clone(&config);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            tracing::debug!(case = %name, "case started");
            let result = run_case(&config, &defaults, &case).await;
            let status = CaseStatus::from_result(&result);
            tracing::debug!(case = %name, passed = result.is_ok(), "case finished");
            (
                index,
                CaseOutcome {
                    name,
                    status,
                },
            )
        });
    }

    let mut slots: Vec<Option<CaseOutcome>> = vec![None; selected.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(outcome);
                }
            }
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => tracing::warn!(error = %err, "case task cancelled"),
        }
    }
    RunSummary::from_outcomes(fill_outcomes(&selected, slots))
}

/// Pairs slots with the selected cases; an empty slot becomes an invocation
/// failure so every selected case is counted.
fn fill_outcomes(
    selected: &[(&Suite, &ConformanceCase)],
    slots: Vec<Option<CaseOutcome>>,
) -> Vec<CaseOutcome> {
    selected
        .iter()
        .zip(slots)
        .map(|((suite, case), slot)| {
            slot.unwrap_or_else(|| CaseOutcome {
                name: suite.qualified_name(case),
                status: CaseStatus::Failed {
                    class: FailureClass::Invocation,
                    message: CANCELLED_MESSAGE.to_string(),
                },
            })
        })
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
