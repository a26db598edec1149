// system-tests/src/stub/mod.rs
// ============================================================================
// Module: Stub Analysis Tool
// Description: Deterministic stand-in for colobot-lint.
// Purpose: Drive every harness outcome class from system tests.
// Dependencies: lint-harness-core, lint-harness-report, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The stub accepts the harness command line, reads the compilation database
//! from the build directory and analyzes each distinct target with a handful
//! of rules modelled on the real tool's output. Control rules select failure
//! behaviors instead of analysis.
//!
//! Invariants:
//! - Targets are analyzed once each, in first-occurrence order.
//! - Findings are ordered by rule, then by line.
//! - A missing or unreadable compilation database is an operational failure.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod args;
pub mod rules;


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use lint_harness_core::compdb::COMPILE_COMMANDS_FILE;
use lint_harness_core::compdb::CompileCommand;
use lint_harness_report::Finding;
use lint_harness_report::Report;
use lint_harness_report::render_report_xml;
use thiserror::Error;

pub use args::OutputFilter;
pub use args::StubRequest;
pub use args::parse_args;

// ============================================================================
// SECTION: Rule Names
// ============================================================================

/// Reports naked `delete` expressions.
pub const NAKED_DELETE_RULE: &str = "NakedDeleteRule";
/// Reports whitespace problems.
pub const WHITESPACE_RULE: &str = "WhitespaceRule";
/// Reports one finding per compilation database entry.
pub const DATABASE_ECHO_RULE: &str = "DatabaseEchoRule";
/// Reports whether path-valued options resolve to existing absolute paths.
pub const HARNESS_PROBE_RULE: &str = "HarnessProbeRule";
/// Exits with [`FORCED_FAILURE_EXIT_CODE`].
pub const FORCE_FAILURE_RULE: &str = "ForceFailureRule";
/// Prints a truncated report and exits successfully.
pub const MALFORMED_OUTPUT_RULE: &str = "MalformedOutputRule";
/// Never finishes.
pub const HANG_RULE: &str = "HangRule";

/// Exit code used by [`FORCE_FAILURE_RULE`].
pub const FORCED_FAILURE_EXIT_CODE: u8 = 3;
/// Version advertised in XML reports.
pub const STUB_VERSION: &str = "colobot-lint-stub";

/// Report cut off inside an `<error>` element.
const MALFORMED_REPORT: &str = "<?xml version=\"1.0\" ?>\n<results version=\"2\">\n    <errors>\n        <error id=\"truncated\"";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Stub failures, each mapped to a process exit code.
#[derive(Debug, Error)]
pub enum StubError {
    /// An option was given without its value.
    #[error("option {flag} requires a value")]
    MissingValue {
        /// Option name.
        flag: String,
    },
    /// An option is not recognized.
    #[error("unknown option {option}")]
    UnknownOption {
        /// Option as given.
        option: String,
    },
    /// `-output-format` names an unsupported format.
    #[error("unsupported output format '{format}'")]
    UnsupportedFormat {
        /// Format as given.
        format: String,
    },
    /// `-output-filter` is not `FILE:FIRST:LAST`.
    #[error("invalid output filter '{value}'")]
    InvalidOutputFilter {
        /// Filter as given.
        value: String,
    },
    /// `-p` was not given.
    #[error("no build directory given (-p)")]
    MissingBuildDir,
    /// The compilation database could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadDatabase {
        /// Database path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The compilation database is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    ParseDatabase {
        /// Database path.
        path: PathBuf,
        /// Decode error.
        source: serde_json::Error,
    },
    /// A target could not be read.
    #[error("failed to read source {}: {source}", .path.display())]
    ReadSource {
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failure requested through [`FORCE_FAILURE_RULE`].
    #[error("forced failure requested by {FORCE_FAILURE_RULE}")]
    Forced,
}

impl StubError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingValue {
                ..
            }
            | Self::UnknownOption {
                ..
            }
            | Self::UnsupportedFormat {
                ..
            }
            | Self::InvalidOutputFilter {
                ..
            }
            | Self::MissingBuildDir => 2,
            Self::Forced => FORCED_FAILURE_EXIT_CODE,
            Self::ReadDatabase {
                ..
            }
            | Self::ParseDatabase {
                ..
            }
            | Self::ReadSource {
                ..
            } => 1,
        }
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// What the binary should do after analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubAction {
    /// Print the payload to stdout and exit successfully.
    Emit(String),
    /// Block until killed.
    Hang,
}

/// Runs the stub against a parsed request.
///
/// # Errors
///
/// Returns [`StubError`] when the database or a target cannot be read, or
/// when a forced failure is requested.
pub fn execute(request: &StubRequest) -> Result<StubAction, StubError> {
    if request.selects(FORCE_FAILURE_RULE) {
        return Err(StubError::Forced);
    }
    if request.selects(HANG_RULE) {
        return Ok(StubAction::Hang);
    }
    if request.selects(MALFORMED_OUTPUT_RULE) {
        return Ok(StubAction::Emit(MALFORMED_REPORT.to_string()));
    }

    let build_dir = request.build_dir.as_deref().ok_or(StubError::MissingBuildDir)?;
    let database = load_database(build_dir)?;

    let mut findings = Vec::new();
    if request.selects(DATABASE_ECHO_RULE) {
        findings.extend(rules::database_echo(build_dir, &database));
    }
    if request.selects(HARNESS_PROBE_RULE) {
        findings.extend(rules::probe_option_paths(&request.option_paths));
    }
    for target in distinct_targets(&request.targets) {
        let source = std::fs::read_to_string(target).map_err(|source| StubError::ReadSource {
            path: target.to_path_buf(),
            source,
        })?;
        let file = target.display().to_string();
        if request.enables(NAKED_DELETE_RULE) {
            findings.extend(rules::naked_delete(&file, &source));
        }
        if request.enables(WHITESPACE_RULE) {
            findings.extend(rules::whitespace(&file, &source));
        }
    }
    if let Some(filter) = &request.output_filter {
        findings.retain(|finding| filter.keeps(finding));
    }

    Ok(StubAction::Emit(render(request, findings)))
}

/// Reads `compile_commands.json` from `build_dir`.
fn load_database(build_dir: &Path) -> Result<Vec<CompileCommand>, StubError> {
    let path = build_dir.join(COMPILE_COMMANDS_FILE);
    let raw = std::fs::read_to_string(&path).map_err(|source| StubError::ReadDatabase {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StubError::ParseDatabase {
        path,
        source,
    })
}

/// Drops repeated targets, keeping first occurrences.
fn distinct_targets(targets: &[PathBuf]) -> Vec<&Path> {
    let mut seen = BTreeSet::new();
    let mut distinct = Vec::with_capacity(targets.len());
    for target in targets {
        if seen.insert(target.as_path()) {
            distinct.push(target.as_path());
        }
    }
    distinct
}

/// Renders findings in the requested output format.
fn render(request: &StubRequest, findings: Vec<Finding>) -> String {
    if request.text_output {
        findings.iter().map(|finding| format!("{finding}\n")).collect()
    } else {
        render_report_xml(&Report {
            tool_version: Some(STUB_VERSION.to_string()),
            findings,
        })
    }
}
