// crates/lint-harness-report/src/finding.rs
// ============================================================================
// Module: Finding Model
// Description: Typed records for colobot-lint findings.
// Purpose: Give the report a strongly typed, order-preserving shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Report`] is an ordered list of [`Finding`] values. Each finding carries
//! the rule tag (`id`), a [`Severity`], a free-text message and a
//! [`Location`]. Order reflects the tool's source traversal and is part of the
//! contract under test, so nothing in this crate sorts findings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ReportError;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Severity attached to a finding.
///
/// # Invariants
/// - Labels are stable and match the report's `severity` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational note.
    Information,
    /// Style violation.
    Style,
    /// Warning.
    Warning,
    /// Error (including compile errors surfaced by the tool).
    Error,
}

impl Severity {
    /// Every severity, in ascending order.
    pub const ALL: [Self; 4] = [Self::Information, Self::Style, Self::Warning, Self::Error];

    /// Returns the report label for the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Style => "style",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == value)
            .ok_or_else(|| ReportError::InvalidSeverity(value.to_string()))
    }
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Source location of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as reported by the tool; empty when the tool omitted it.
    pub file: String,
    /// 1-based line number; 0 when the tool has no location.
    pub line: u32,
}

/// One issue reported by the analysis tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Category / rule tag, for example `naked delete`.
    pub id: String,
    /// Finding severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the finding was reported.
    pub location: Location,
}

impl Finding {
    /// Builds a finding from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            location: Location {
                file: file.into(),
                line,
            },
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {}: {}",
            self.location.file, self.location.line, self.severity, self.id, self.message
        )
    }
}

/// Parsed findings report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Tool version advertised by the `<cppcheck>` element, when present.
    pub tool_version: Option<String>,
    /// Findings in document order.
    pub findings: Vec<Finding>,
}

impl Report {
    /// Builds a report without a tool version.
    #[must_use]
    pub const fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            tool_version: None,
            findings,
        }
    }
}
