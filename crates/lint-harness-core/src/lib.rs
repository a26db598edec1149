// crates/lint-harness-core/src/lib.rs
// ============================================================================
// Module: Lint Harness Core Library
// Description: Conformance pipeline for the colobot-lint analysis tool.
// Purpose: Materialize fixtures, run the tool, and assert on its findings.
// Dependencies: lint-harness-report, glob, serde, tempfile, tokio, tracing
// ============================================================================

//! ## Overview
//! One conformance case flows through a fixed pipeline:
//! [`Workspace`] acquisition, [`fixture::materialize`], compilation database
//! synthesis with placeholder substitution, [`invocation::run_tool`], report
//! parsing and [`assertion::assert_findings`]. The workspace is released on
//! every exit path.
//!
//! Configuration is an immutable [`HarnessConfig`] loaded once per process.
//! Cases share nothing else, so [`runner::run_suites`] may run them
//! concurrently without locking.
//! Invariants:
//! - Failures are classified as setup, invocation, report or assertion.
//! - The harness never sorts or de-duplicates fixture inputs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assertion;
pub mod case;
pub mod compdb;
pub mod config;
pub mod error;
pub mod expectation;
pub mod fixture;
pub mod invocation;
pub mod logging;
pub mod runner;
pub mod substitution;
pub mod workspace;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assertion::AssertionError;
pub use assertion::FindingField;
pub use assertion::Mismatch;
pub use assertion::assert_findings;
pub use case::ConformanceCase;
pub use case::Suite;
pub use config::ConfigError;
pub use config::HarnessConfig;
pub use config::HarnessEnv;
pub use error::FailureClass;
pub use error::HarnessError;
pub use error::SetupError;
pub use expectation::ExpectedFinding;
pub use expectation::SuiteDefaults;
pub use fixture::FixtureTree;
pub use invocation::InvocationError;
pub use invocation::InvocationSpec;
pub use invocation::OutputFormat;
pub use logging::init_logging;
pub use runner::CaseFilter;
pub use runner::CaseOutcome;
pub use runner::CaseStatus;
pub use runner::FilterError;
pub use runner::RunSummary;
pub use runner::run_case;
pub use runner::run_suites;
pub use substitution::WORKSPACE_PLACEHOLDER;
pub use workspace::Workspace;
