// crates/lint-harness-core/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Setup errors and the umbrella error for one harness run.
// Purpose: Keep setup, invocation, report, and assertion failures disjoint.
// Dependencies: thiserror, lint-harness-report
// ============================================================================

//! ## Overview
//! Every failure of a conformance case is exactly one [`HarnessError`], and
//! [`HarnessError::failure_class`] tells the four classes apart:
//! - setup: the workspace or fixture could not be prepared;
//! - invocation: the tool failed to launch, exited non-zero, or timed out;
//! - report: the tool's output broke the report contract;
//! - assertion: findings differ from expectations.
//!
//! Workspace cleanup problems are deliberately absent: they are logged and
//! never reported as failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;

use lint_harness_report::ReportError;
use serde::Serialize;
use thiserror::Error;

use crate::assertion::AssertionError;
use crate::invocation::InvocationError;

// ============================================================================
// SECTION: Setup Errors
// ============================================================================

/// Failures while preparing a workspace, fixture, or compilation database.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Allocating the temporary workspace failed.
    #[error("failed to allocate workspace: {0}")]
    AllocateWorkspace(std::io::Error),
    /// A fixture path is not a safe workspace-relative path.
    #[error("invalid fixture path '{path}': {reason}")]
    InvalidFixturePath {
        /// Offending path as written by the fixture author.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },
    /// Creating a directory failed.
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        /// Directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Writing a file failed.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// File path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Serializing the compilation database failed.
    #[error("failed to serialize compilation database: {0}")]
    SerializeDatabase(serde_json::Error),
}

// ============================================================================
// SECTION: Failure Classes
// ============================================================================

/// Coarse failure classification of a harness run.
///
/// # Invariants
/// - Labels are stable for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// Workspace or fixture preparation failed.
    Setup,
    /// The tool could not be run successfully.
    Invocation,
    /// The tool's output is not a valid report.
    Report,
    /// Findings differ from expectations.
    Assertion,
}

impl FailureClass {
    /// Returns the stable label for the class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Invocation => "invocation",
            Self::Report => "report",
            Self::Assertion => "assertion",
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Harness Error
// ============================================================================

/// Error for a single harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Setup failure.
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    /// Invocation failure.
    #[error("invocation failed: {0}")]
    Invocation(#[from] InvocationError),
    /// Report contract failure.
    #[error("tool output is not a valid report: {0}")]
    Report(#[from] ReportError),
    /// Assertion mismatch.
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionError),
}

impl HarnessError {
    /// Returns the failure class of the error.
    #[must_use]
    pub const fn failure_class(&self) -> FailureClass {
        match self {
            Self::Setup(_) => FailureClass::Setup,
            Self::Invocation(_) => FailureClass::Invocation,
            Self::Report(_) => FailureClass::Report,
            Self::Assertion(_) => FailureClass::Assertion,
        }
    }
}
