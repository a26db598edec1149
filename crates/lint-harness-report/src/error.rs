// crates/lint-harness-report/src/error.rs
// ============================================================================
// Module: Report Errors
// Description: Failures raised while reading or filtering findings reports.
// Purpose: Separate tool-contract breaks from finding-content discrepancies.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A [`ReportError`] means the payload itself is broken (or a filter pattern
//! is unusable). It never describes a mismatch between findings and
//! expectations; that is the assertion engine's job.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the report codec and consumers.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Payload is not well-formed XML.
    #[error("malformed report xml: {0}")]
    Xml(String),
    /// The root element is not `<results>`.
    #[error("unexpected report root element <{0}>, expected <results>")]
    UnexpectedRoot(String),
    /// The payload contained no root element at all.
    #[error("report payload is empty")]
    Empty,
    /// A required element is missing.
    #[error("report is missing required element <{0}>")]
    MissingElement(&'static str),
    /// A required attribute is missing.
    #[error("element <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Element name.
        element: &'static str,
        /// Attribute name.
        attribute: &'static str,
    },
    /// Severity is not one of the known labels.
    #[error("unknown severity '{0}'")]
    InvalidSeverity(String),
    /// Line attribute is not a non-negative integer.
    #[error("invalid line number '{0}'")]
    InvalidLine(String),
    /// A filter pattern failed to compile.
    #[error("invalid filter pattern '{pattern}': {error}")]
    InvalidFilter {
        /// Pattern as given by the user (including any `-` prefix).
        pattern: String,
        /// Regex compilation error.
        error: String,
    },
    /// Reading a report file failed.
    #[error("failed to read report {path}: {source}")]
    Read {
        /// Report path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
