// crates/lint-harness-core/src/compdb.rs
// ============================================================================
// Module: Compilation Database Synthesizer
// Description: Emits compile_commands.json for a materialized fixture.
// Purpose: Tell the analysis tool how each fixture file is compiled.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The database is a JSON array of `{directory, command, file}` objects, one
//! per listed source file, written to [`COMPILE_COMMANDS_FILE`] at the
//! workspace root. The command follows a fixed template:
//! `<compiler> -c -std=c++11 <flags> <file> -o <file>.o`.
//! Invariants:
//! - Entries keep the given order; nothing is sorted.
//! - Repeated files produce repeated entries; nothing is de-duplicated.
//! - Flags are joined with single spaces, unescaped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::SetupError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File name of the compilation database inside the workspace.
pub const COMPILE_COMMANDS_FILE: &str = "compile_commands.json";

/// Compiler named in every synthetic command.
pub const DEFAULT_COMPILER: &str = "/usr/bin/c++";

/// Language standard flag placed before user flags.
const STANDARD_FLAG: &str = "-std=c++11";

// ============================================================================
// SECTION: Entries
// ============================================================================

/// One compilation database entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// Working directory of the compilation (the workspace root).
    pub directory: String,
    /// Full compiler command line.
    pub command: String,
    /// Absolute source path.
    pub file: String,
}

impl CompileCommand {
    /// Builds the entry for `file` compiled in `directory` with `flags`.
    #[must_use]
    pub fn new(directory: &Path, file: &Path, flags: &[String]) -> Self {
        let file = file.display().to_string();
        Self {
            directory: directory.display().to_string(),
            command: compile_command_line(&file, flags),
            file,
        }
    }
}

/// Renders the fixed compiler invocation for `file`.
#[must_use]
pub fn compile_command_line(file: &str, flags: &[String]) -> String {
    let object = format!("{file}.o");
    let mut parts: Vec<&str> = vec![DEFAULT_COMPILER, "-c", STANDARD_FLAG];
    parts.extend(flags.iter().map(String::as_str));
    parts.extend([file, "-o", object.as_str()]);
    parts.join(" ")
}

/// Builds entries for `files`, in order, duplicates included.
#[must_use]
pub fn build_entries(root: &Path, files: &[PathBuf], flags: &[String]) -> Vec<CompileCommand> {
    files.iter().map(|file| CompileCommand::new(root, file, flags)).collect()
}

// ============================================================================
// SECTION: Writer
// ============================================================================

/// Writes the compilation database for `files` into `root` and returns its
/// path.
///
/// # Errors
///
/// Returns [`SetupError::SerializeDatabase`] or [`SetupError::WriteFile`].
pub fn write_compilation_database(
    root: &Path,
    files: &[PathBuf],
    flags: &[String],
) -> Result<PathBuf, SetupError> {
    let entries = build_entries(root, files, flags);
    let mut payload =
        serde_json::to_string_pretty(&entries).map_err(SetupError::SerializeDatabase)?;
    payload.push('\n');
    let path = root.join(COMPILE_COMMANDS_FILE);
    fs::write(&path, payload).map_err(|source| SetupError::WriteFile {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
