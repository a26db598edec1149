// crates/lint-harness-core/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: Environment-backed, immutable configuration for harness runs.
// Purpose: Centralize tool path, debug and timeout settings with strict parsing.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`HarnessConfig`] is built once per process, from environment variables
//! and optional CLI overrides, then passed by reference into every pipeline
//! step. It is never mutated mid-run.
//! Invariants:
//! - Set-but-empty values and invalid UTF-8 fail closed.
//! - Booleans accept only `1`, `0`, `true`, `false`.
//! - Timeouts are positive whole seconds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Tool executable used when nothing else is configured (resolved via `PATH`).
pub const DEFAULT_TOOL: &str = "colobot-lint";

/// Default bound on a single tool invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Path to the analysis tool executable.
    ToolPath,
    /// Debug echo and workspace retention (`true`/`false` or `1`/`0`).
    Debug,
    /// Per-invocation timeout in seconds (positive integer).
    TimeoutSeconds,
}

impl HarnessEnv {
    /// Every key, in documentation order.
    pub const ALL: [Self; 3] = [Self::ToolPath, Self::Debug, Self::TimeoutSeconds];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToolPath => "COLOBOT_LINT",
            Self::Debug => "COLOBOT_LINT_HARNESS_DEBUG",
            Self::TimeoutSeconds => "COLOBOT_LINT_HARNESS_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value is not valid UTF-8.
    #[error("{0} must be valid UTF-8")]
    NotUnicode(&'static str),
    /// Value is set but empty or whitespace.
    #[error("{0} must not be empty")]
    Empty(&'static str),
    /// Boolean value is not a recognized literal.
    #[error("{0} must be 1, 0, true, or false")]
    InvalidBool(&'static str),
    /// Timeout is not a positive integer.
    #[error("{0} must be a positive integer number of seconds")]
    InvalidTimeout(&'static str),
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Immutable harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Analysis tool executable.
    pub tool: PathBuf,
    /// Echo command lines and raw output, and retain workspaces.
    pub debug: bool,
    /// Bound on a single tool invocation.
    pub timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable is not valid UTF-8, is
    /// empty, or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let tool = read_env_nonempty(HarnessEnv::ToolPath)?.map_or(defaults.tool, PathBuf::from);
        let debug = parse_bool_env(HarnessEnv::Debug, read_env_nonempty(HarnessEnv::Debug)?)?;
        let timeout = read_env_nonempty(HarnessEnv::TimeoutSeconds)?
            .map(|value| parse_timeout_seconds(HarnessEnv::TimeoutSeconds, &value))
            .transpose()?
            .unwrap_or(defaults.timeout);
        Ok(Self {
            tool,
            debug,
            timeout,
        })
    }

    /// Returns a copy with the tool executable replaced.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Returns a copy with the debug flag replaced.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns a copy with the invocation timeout replaced.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns [`ConfigError::NotUnicode`] when the variable contains invalid UTF-8.
pub fn read_env_strict(key: HarnessEnv) -> Result<Option<String>, ConfigError> {
    std::env::var_os(key.as_str()).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::NotUnicode(key.as_str()))
    })
}

/// Reads an environment variable and rejects empty values.
fn read_env_nonempty(key: HarnessEnv) -> Result<Option<String>, ConfigError> {
    match read_env_strict(key)? {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key.as_str())),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value in whole seconds.
fn parse_timeout_seconds(key: HarnessEnv, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 =
        raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout(key.as_str()))?;
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(key.as_str()));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment value; unset means `false`.
fn parse_bool_env(key: HarnessEnv, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(ConfigError::InvalidBool(key.as_str()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
