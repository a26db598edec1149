// crates/lint-harness-report/src/count.rs
// ============================================================================
// Module: Finding Counter
// Description: Counts report findings matching file and rule filters.
// Purpose: Back the `report count` utility used by CI gates.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! Filters are regular expressions matched at the start of the text (prefix
//! semantics). A leading `-` negates a filter. A filter never matches an
//! empty text, so findings reported without a file are counted by neither a
//! file filter nor its negation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use regex::Regex;

use crate::error::ReportError;
use crate::finding::Report;

// ============================================================================
// SECTION: Filters
// ============================================================================

/// Pattern that matches every non-empty text.
pub const MATCH_ALL: &str = ".*";

/// A possibly negated, start-anchored regex filter.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    /// Pattern as supplied, including any `-` prefix.
    source: String,
    /// Compiled, start-anchored regex.
    regex: Regex,
    /// Whether the match result is inverted.
    negated: bool,
}

impl PatternFilter {
    /// Parses a filter; a leading `-` negates it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidFilter`] when the regex does not compile.
    pub fn parse(pattern: &str) -> Result<Self, ReportError> {
        let (negated, body) = match pattern.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let regex = Regex::new(&format!("^(?:{body})")).map_err(|err| ReportError::InvalidFilter {
            pattern: pattern.to_string(),
            error: err.to_string(),
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
            negated,
        })
    }

    /// Returns the filter that accepts every non-empty text.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`Self::parse`].
    pub fn match_all() -> Result<Self, ReportError> {
        Self::parse(MATCH_ALL)
    }

    /// Returns the pattern as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether the filter is negated.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Tests a text against the filter.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.regex.is_match(text) != self.negated
    }
}

// ============================================================================
// SECTION: Counting
// ============================================================================

/// Counts findings whose file matches `file_filter` and whose rule identifier
/// matches `rule_filter`.
#[must_use]
pub fn count_findings(
    report: &Report,
    file_filter: &PatternFilter,
    rule_filter: &PatternFilter,
) -> usize {
    report
        .findings
        .iter()
        .filter(|finding| {
            file_filter.matches(&finding.location.file) && rule_filter.matches(&finding.id)
        })
        .count()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
