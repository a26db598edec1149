// crates/lint-harness-core/src/invocation.rs
// ============================================================================
// Module: Tool Invocation
// Description: Builds the analysis tool command line and runs it.
// Purpose: Capture the report payload or fail with full diagnostics.
// Dependencies: tokio, tracing, thiserror
// ============================================================================

//! ## Overview
//! The argument vector is always
//! `[tool, -p <workspace>, -output-format <fmt>, (-only-rule <rule>)*, options..., targets...]`.
//! The tool runs with stdin closed and stdout/stderr captured; stdout is the
//! report payload. Launch failure, non-zero exit and timeout are fatal for
//! the case and never retried. Exit status 0 with findings is success.
//! Invariants:
//! - Every error carries the rendered command line.
//! - A timed-out child is killed.
//! - Debug echo only logs; it never changes what runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;
use std::string::FromUtf8Error;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::HarnessConfig;

// ============================================================================
// SECTION: Output Format
// ============================================================================

/// Report format requested from the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Structured XML report (parsed by the harness).
    #[default]
    Xml,
    /// Human-readable text.
    Text,
}

impl OutputFormat {
    /// Returns the value passed to `-output-format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Invocation Spec
// ============================================================================

/// What to ask the tool for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationSpec {
    /// Rules to run; empty runs every rule.
    pub rules: Vec<String>,
    /// Extra options, already substituted.
    pub options: Vec<String>,
    /// Report format.
    pub output_format: OutputFormat,
    /// Files the tool is asked to analyze.
    pub targets: Vec<PathBuf>,
}

impl InvocationSpec {
    /// Creates a spec analyzing `targets` with every rule and XML output.
    #[must_use]
    pub fn new(targets: Vec<PathBuf>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Returns the invocation restricted to `rules`.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<String>) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the invocation with extra options.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Returns the invocation with another output format.
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}

/// Builds the full argument vector, executable first.
#[must_use]
pub fn build_argv(tool: &Path, workspace: &Path, spec: &InvocationSpec) -> Vec<OsString> {
    let mut argv: Vec<OsString> = vec![
        tool.as_os_str().to_os_string(),
        "-p".into(),
        workspace.as_os_str().to_os_string(),
        "-output-format".into(),
        spec.output_format.as_str().into(),
    ];
    for rule in &spec.rules {
        argv.push("-only-rule".into());
        argv.push(rule.into());
    }
    argv.extend(spec.options.iter().map(OsString::from));
    argv.extend(spec.targets.iter().map(|target| target.as_os_str().to_os_string()));
    argv
}

/// Renders an argument vector for diagnostics.
#[must_use]
pub fn render_command_line(argv: &[OsString]) -> String {
    argv.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>().join(" ")
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures running the analysis tool.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The process could not be started.
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        /// Rendered command line.
        command: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Waiting for the process failed.
    #[error("failed to collect output of `{command}`: {source}")]
    Wait {
        /// Rendered command line.
        command: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The process exited unsuccessfully.
    #[error("`{command}` exited with {status}\nstdout:\n{stdout}\nstderr:\n{stderr}")]
    NonZeroExit {
        /// Rendered command line.
        command: String,
        /// Exit status description.
        status: String,
        /// Exit code, when the process was not killed by a signal.
        code: Option<i32>,
        /// Captured stdout.
        stdout: String,
        /// Captured stderr.
        stderr: String,
    },
    /// The process did not finish in time and was killed.
    #[error("`{command}` timed out after {limit_ms} ms")]
    TimedOut {
        /// Rendered command line.
        command: String,
        /// Configured limit in milliseconds.
        limit_ms: u128,
    },
    /// Stdout is not valid UTF-8.
    #[error("`{command}` wrote non-UTF-8 output: {source}")]
    NonUtf8Output {
        /// Rendered command line.
        command: String,
        /// Decode error.
        source: FromUtf8Error,
    },
}

impl InvocationError {
    /// Returns the rendered command line of the failed invocation.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Launch {
                command, ..
            }
            | Self::Wait {
                command, ..
            }
            | Self::NonZeroExit {
                command, ..
            }
            | Self::TimedOut {
                command, ..
            }
            | Self::NonUtf8Output {
                command, ..
            } => command,
        }
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Captured output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Rendered command line.
    pub command: String,
    /// Report payload.
    pub stdout: String,
    /// Diagnostics, decoded lossily.
    pub stderr: String,
}

/// Runs the configured tool against `workspace`.
///
/// # Errors
///
/// Returns [`InvocationError`] on launch failure, non-zero exit, timeout, or
/// non-UTF-8 stdout.
pub async fn run_tool(
    config: &HarnessConfig,
    workspace: &Path,
    spec: &InvocationSpec,
) -> Result<ToolOutput, InvocationError> {
    let argv = build_argv(&config.tool, workspace, spec);
    let command_line = render_command_line(&argv);
    if config.debug {
        tracing::info!(command = %command_line, "running analysis tool");
    }

    let mut command = Command::new(&config.tool);
    command.args(argv.iter().skip(1));
    command.current_dir(workspace);
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());
    command.kill_on_drop(true);

    let child = command.spawn().map_err(|source| InvocationError::Launch {
        command: command_line.clone(),
        source,
    })?;
    let output = timeout(config.timeout, child.wait_with_output())
        .await
        .map_err(|_| InvocationError::TimedOut {
            command: command_line.clone(),
            limit_ms: config.timeout.as_millis(),
        })?
        .map_err(|source| InvocationError::Wait {
            command: command_line.clone(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if !output.status.success() {
        return Err(InvocationError::NonZeroExit {
            command: command_line,
            status: output.status.to_string(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
        });
    }
    let stdout = String::from_utf8(output.stdout).map_err(|source| {
        InvocationError::NonUtf8Output {
            command: command_line.clone(),
            source,
        }
    })?;
    if config.debug {
        tracing::info!(stdout = %stdout, stderr = %stderr, "analysis tool output");
    }
    Ok(ToolOutput {
        command: command_line,
        stdout,
        stderr,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
