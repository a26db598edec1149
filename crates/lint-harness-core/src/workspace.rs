// crates/lint-harness-core/src/workspace.rs
// ============================================================================
// Module: Scoped Workspace
// Description: Exclusively owned temporary directory for one conformance case.
// Purpose: Guarantee cleanup on every exit path, including panics.
// Dependencies: tempfile, tracing
// ============================================================================

//! ## Overview
//! A [`Workspace`] wraps a uniquely named temporary directory allocated by the
//! platform (never a sequential counter, so concurrent cases cannot collide).
//! Dropping the workspace deletes the tree; when the configuration's debug
//! flag is set the tree is kept and its path logged instead.
//! Invariants:
//! - The root is absolute and exists for the lifetime of the value.
//! - Release runs at most once.
//! - Deletion failures are logged, never returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::HarnessConfig;
use crate::error::SetupError;
use crate::fixture::validate_relative_path;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prefix of every workspace directory name.
pub const WORKSPACE_PREFIX: &str = "colobot-lint-harness-";

// ============================================================================
// SECTION: Workspace
// ============================================================================

/// Temporary directory owned by one conformance case.
#[derive(Debug)]
pub struct Workspace {
    /// Backing directory; `None` once released.
    dir: Option<TempDir>,
    /// Canonical absolute root.
    root: PathBuf,
    /// Keep the tree on release instead of deleting it.
    retain: bool,
}

impl Workspace {
    /// Allocates a fresh, empty workspace under the system temp directory.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::AllocateWorkspace`] when the directory cannot be
    /// created or resolved.
    pub fn acquire(config: &HarnessConfig) -> Result<Self, SetupError> {
        Self::acquire_in(&std::env::temp_dir(), config)
    }

    /// Allocates a fresh, empty workspace under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::AllocateWorkspace`] when the directory cannot be
    /// created or resolved.
    pub fn acquire_in(parent: &Path, config: &HarnessConfig) -> Result<Self, SetupError> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(SetupError::AllocateWorkspace)?;
        let root = fs::canonicalize(dir.path()).map_err(SetupError::AllocateWorkspace)?;
        tracing::debug!(root = %root.display(), "workspace acquired");
        Ok(Self {
            dir: Some(dir),
            root,
            retain: config.debug,
        })
    }

    /// Returns the absolute workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a slash-separated relative path inside the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidFixturePath`] when the path is empty,
    /// absolute, or escapes the root.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, SetupError> {
        validate_relative_path(relative)?;
        Ok(self.root.join(relative))
    }

    /// Releases the workspace now. Returns the retained path when the tree
    /// was kept for inspection.
    pub fn release(mut self) -> Option<PathBuf> {
        self.release_inner()
    }

    /// Deletes or retains the tree; no-op after the first call.
    fn release_inner(&mut self) -> Option<PathBuf> {
        let dir = self.dir.take()?;
        if self.retain {
            #[allow(deprecated, reason = "into_path is the stable name across tempfile 3.x.")]
            let path = dir.into_path();
            tracing::info!(path = %path.display(), "temporary files left in workspace");
            return Some(path);
        }
        if let Err(err) = dir.close() {
            tracing::warn!(root = %self.root.display(), error = %err, "failed to remove workspace");
        }
        None
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.release_inner();
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
