// crates/lint-harness-core/src/fixture.rs
// ============================================================================
// Module: Fixture Materializer
// Description: Writes a synthetic source tree into a workspace.
// Purpose: Produce byte-exact fixture files for the analysis tool.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`FixtureTree`] maps slash-separated relative paths to file contents
//! given as ordered lines. [`materialize`] joins the lines with `\n` and
//! writes them verbatim: no trailing newline is added, no line endings are
//! normalized, and embedded tabs or carriage returns survive untouched. A
//! final empty line is how a fixture asks for a trailing newline.
//! Invariants:
//! - Paths are unique (map keys).
//! - Paths never escape the workspace root.
//! - Parent directories are created on demand.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::error::SetupError;

// ============================================================================
// SECTION: Fixture Tree
// ============================================================================

/// Relative path to file lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureTree {
    /// Files keyed by relative path.
    files: BTreeMap<String, Vec<String>>,
}

impl FixtureTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tree with one more file; a repeated path replaces the
    /// earlier content.
    #[must_use]
    pub fn with_file<I, S>(mut self, path: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(path, lines);
        self
    }

    /// Adds or replaces a file.
    pub fn insert<I, S>(&mut self, path: impl Into<String>, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.insert(path.into(), lines.into_iter().map(Into::into).collect());
    }

    /// Iterates files in path order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.files.iter().map(|(path, lines)| (path.as_str(), lines.as_slice()))
    }

    /// Returns the lines of one file.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Returns true when `path` is part of the tree.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true when the tree has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Joins fixture lines into the exact bytes written to disk.
#[must_use]
pub fn render_content(lines: &[String]) -> String {
    lines.join("\n")
}

// ============================================================================
// SECTION: Path Validation
// ============================================================================

/// Checks that `path` is a non-empty, slash-separated path that stays inside
/// the workspace root.
///
/// # Errors
///
/// Returns [`SetupError::InvalidFixturePath`] naming the first violated rule.
pub fn validate_relative_path(path: &str) -> Result<(), SetupError> {
    let reject = |reason: &'static str| SetupError::InvalidFixturePath {
        path: path.to_string(),
        reason,
    };
    if path.is_empty() {
        return Err(reject("path is empty"));
    }
    if path.contains('\0') {
        return Err(reject("path contains a NUL byte"));
    }
    if path.contains('\\') {
        return Err(reject("path must use '/' separators"));
    }
    if path.starts_with('/') || Path::new(path).is_absolute() {
        return Err(reject("path must be relative"));
    }
    for segment in path.split('/') {
        if segment.is_empty() {
            return Err(reject("path has an empty component"));
        }
        if segment == ".." {
            return Err(reject("path escapes the workspace root"));
        }
    }
    if Path::new(path).components().any(|component| matches!(component, Component::Prefix(_))) {
        return Err(reject("path must be relative"));
    }
    Ok(())
}

// ============================================================================
// SECTION: Materialization
// ============================================================================

/// Writes every file of `tree` below `root` and returns the written paths in
/// tree order.
///
/// # Errors
///
/// Returns [`SetupError`] when a path is invalid or a directory or file
/// cannot be written.
pub fn materialize(tree: &FixtureTree, root: &Path) -> Result<Vec<PathBuf>, SetupError> {
    for (path, _) in tree.files() {
        validate_relative_path(path)?;
    }
    let mut written = Vec::with_capacity(tree.len());
    for (relative, lines) in tree.files() {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SetupError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, render_content(lines)).map_err(|source| SetupError::WriteFile {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
