// crates/lint-harness-core/src/assertion.rs
// ============================================================================
// Module: Assertion Engine
// Description: Positional comparison of actual and expected findings.
// Purpose: Report count and field mismatches precisely enough to localize them.
// Dependencies: thiserror, lint-harness-report
// ============================================================================

//! ## Overview
//! Comparison is strictly positional: finding `i` is compared with
//! expectation `i`, never matched by content. Counts are checked first;
//! then every field of every pair is compared and all mismatches are
//! collected, so one run shows the whole discrepancy.
//! Invariants:
//! - Messages compare by exact string equality.
//! - Defaults are resolved for all expectations before comparing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use lint_harness_report::Finding;
use serde::Serialize;
use thiserror::Error;

use crate::expectation::ExpectedFinding;
use crate::expectation::SuiteDefaults;

// ============================================================================
// SECTION: Mismatch Model
// ============================================================================

/// Field of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingField {
    /// Identifier.
    Id,
    /// Severity.
    Severity,
    /// Message.
    Message,
    /// Line.
    Line,
}

impl FindingField {
    /// Returns the stable label for the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Severity => "severity",
            Self::Message => "message",
            Self::Line => "line",
        }
    }
}

impl fmt::Display for FindingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One differing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Zero-based position in the findings sequence.
    pub index: usize,
    /// Differing field.
    pub field: FindingField,
    /// Expected value.
    pub expected: String,
    /// Actual value.
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finding[{}].{}: expected '{}', got '{}'",
            self.index, self.field, self.expected, self.actual
        )
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Findings differ from expectations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// Different number of findings.
    #[error("expected {expected} finding(s), got {actual}{}", render_findings(.findings))]
    CountMismatch {
        /// Expected count.
        expected: usize,
        /// Actual count.
        actual: usize,
        /// Actual findings, one per line.
        findings: Vec<String>,
    },
    /// Same count, differing fields.
    #[error("{} field mismatch(es):{}", .0.len(), render_mismatches(.0))]
    FieldMismatch(Vec<Mismatch>),
    /// An expectation has no value for a field and its suite has no default.
    #[error("expectation {index} has no {field} and the suite defines no default")]
    Unresolved {
        /// Zero-based expectation position.
        index: usize,
        /// Missing field.
        field: FindingField,
    },
}

/// Renders actual findings for a count mismatch.
fn render_findings(findings: &[String]) -> String {
    if findings.is_empty() {
        return String::new();
    }
    let mut out = String::from(":");
    for finding in findings {
        out.push_str("\n  ");
        out.push_str(finding);
    }
    out
}

/// Renders field mismatches, one per line.
fn render_mismatches(mismatches: &[Mismatch]) -> String {
    mismatches.iter().map(|mismatch| format!("\n  {mismatch}")).collect()
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Compares `actual` with `expected`, position by position.
///
/// # Errors
///
/// Returns [`AssertionError`] on unresolved expectations, count mismatch or
/// any field mismatch.
pub fn assert_findings(
    actual: &[Finding],
    expected: &[ExpectedFinding],
    defaults: &SuiteDefaults,
) -> Result<(), AssertionError> {
    let resolved = expected
        .iter()
        .enumerate()
        .map(|(index, expectation)| expectation.resolve(index, defaults))
        .collect::<Result<Vec<_>, _>>()?;

    if actual.len() != resolved.len() {
        return Err(AssertionError::CountMismatch {
            expected: resolved.len(),
            actual: actual.len(),
            findings: actual.iter().map(ToString::to_string).collect(),
        });
    }

    let mut mismatches = Vec::new();
    for (index, (finding, expectation)) in actual.iter().zip(&resolved).enumerate() {
        let mut check = |field: FindingField, expected: String, actual: String| {
            if expected != actual {
                mismatches.push(Mismatch {
                    index,
                    field,
                    expected,
                    actual,
                });
            }
        };
        check(FindingField::Id, expectation.id.to_string(), finding.id.clone());
        check(
            FindingField::Severity,
            expectation.severity.to_string(),
            finding.severity.to_string(),
        );
        check(FindingField::Message, expectation.message.to_string(), finding.message.clone());
        check(FindingField::Line, expectation.line.to_string(), finding.location.line.to_string());
    }

    if mismatches.is_empty() { Ok(()) } else { Err(AssertionError::FieldMismatch(mismatches)) }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
