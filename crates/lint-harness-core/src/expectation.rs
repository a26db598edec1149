// crates/lint-harness-core/src/expectation.rs
// ============================================================================
// Module: Expected Findings
// Description: Typed, partially specified findings and per-suite defaults.
// Purpose: Resolve omitted identifiers and severities before comparison.
// Dependencies: lint-harness-report
// ============================================================================

//! ## Overview
//! An [`ExpectedFinding`] always names its message and line. Identifier and
//! severity may be omitted, in which case [`SuiteDefaults`] supplies them.
//! Resolution happens once, up front, through [`ExpectedFinding::resolve`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use lint_harness_report::Severity;

use crate::assertion::AssertionError;
use crate::assertion::FindingField;

// ============================================================================
// SECTION: Suite Defaults
// ============================================================================

/// Values shared by every case of a suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteDefaults {
    /// Rules selected for every case unless a case overrides them.
    pub rules: Vec<String>,
    /// Identifier used when an expectation omits it.
    pub id: Option<String>,
    /// Severity used when an expectation omits it.
    pub severity: Option<Severity>,
}

impl SuiteDefaults {
    /// Creates empty defaults (all rules, nothing defaulted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns defaults selecting only `rule`.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Returns defaults with a default identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns defaults with a default severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

// ============================================================================
// SECTION: Expected Finding
// ============================================================================

/// One expected finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedFinding {
    /// Identifier; `None` falls back to the suite default.
    pub id: Option<String>,
    /// Severity; `None` falls back to the suite default.
    pub severity: Option<Severity>,
    /// Exact message.
    pub message: String,
    /// 1-based line.
    pub line: u32,
}

impl ExpectedFinding {
    /// Expects `message` at `line`, with identifier and severity defaulted.
    #[must_use]
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            id: None,
            severity: None,
            message: message.into(),
            line,
        }
    }

    /// Returns the expectation with an explicit identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the expectation with an explicit severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Merges suite defaults into the expectation at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::Unresolved`] when neither the expectation
    /// nor the defaults provide an identifier or severity.
    pub fn resolve<'a>(
        &'a self,
        index: usize,
        defaults: &'a SuiteDefaults,
    ) -> Result<ResolvedExpectation<'a>, AssertionError> {
        let id = self.id.as_deref().or(defaults.id.as_deref()).ok_or(AssertionError::Unresolved {
            index,
            field: FindingField::Id,
        })?;
        let severity = self.severity.or(defaults.severity).ok_or(AssertionError::Unresolved {
            index,
            field: FindingField::Severity,
        })?;
        Ok(ResolvedExpectation {
            id,
            severity,
            message: &self.message,
            line: self.line,
        })
    }
}

/// Fully specified expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedExpectation<'a> {
    /// Identifier.
    pub id: &'a str,
    /// Severity.
    pub severity: Severity,
    /// Exact message.
    pub message: &'a str,
    /// 1-based line.
    pub line: u32,
}
