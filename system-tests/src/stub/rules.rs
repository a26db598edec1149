// system-tests/src/stub/rules.rs
// ============================================================================
// Module: Stub Rules
// Description: Line-based analyses producing colobot-lint style findings.
// Purpose: Give system tests real findings with known positions.
// Dependencies: lint-harness-report, lint-harness-core
// ============================================================================

//! Text heuristics only. They agree with the real tool on the catalog's
//! naked delete, whitespace and output filter fixtures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use lint_harness_core::compdb::CompileCommand;
use lint_harness_report::Finding;
use lint_harness_report::Severity;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Type names printed without a `class` keyword.
const BUILTIN_TYPES: [&str; 10] =
    ["bool", "char", "short", "int", "long", "float", "double", "unsigned", "signed", "wchar_t"];

/// Probe message for absolute paths that exist.
pub const PROBE_RESOLVED: &str = "option path resolved";
/// Probe message for any other path.
pub const PROBE_UNRESOLVED: &str = "option path unresolved";

// ============================================================================
// SECTION: Naked Delete
// ============================================================================

/// Reports every `delete` statement, naming the deleted pointer's type.
#[must_use]
pub fn naked_delete(file: &str, source: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (line, text) in numbered_lines(source) {
        let Some(variable) = deleted_variable(text) else {
            continue;
        };
        let type_name = pointer_type(source, variable).unwrap_or("void");
        findings.push(Finding::new(
            "naked delete",
            Severity::Warning,
            format!("Naked delete called on type '{}'", display_type(source, type_name)),
            file,
            line,
        ));
    }
    findings
}

/// Extracts `x` from `delete x;` or `delete[] x;`.
fn deleted_variable(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("delete")?;
    if rest.starts_with(is_identifier_char) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("[]").unwrap_or(rest).trim_start();
    let end = rest.find(|ch: char| !is_identifier_char(ch)).unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Finds `T` in a `T* variable` declaration.
fn pointer_type<'a>(source: &'a str, variable: &str) -> Option<&'a str> {
    for (star, _) in source.match_indices('*') {
        let after = source[star + 1..].trim_start();
        let declared = after.split(|ch: char| !is_identifier_char(ch)).next().unwrap_or("");
        if declared != variable {
            continue;
        }
        let before = source[..star].trim_end();
        let start = before
            .char_indices()
            .rev()
            .find(|(_, ch)| !is_identifier_char(*ch))
            .map_or(0, |(index, ch)| index + ch.len_utf8());
        let type_name = &before[start..];
        if !type_name.is_empty() {
            return Some(type_name);
        }
    }
    None
}

/// Prefixes user-defined types with their `class` or `struct` keyword.
fn display_type(source: &str, type_name: &str) -> String {
    if BUILTIN_TYPES.contains(&type_name) {
        return type_name.to_string();
    }
    for keyword in ["class", "struct"] {
        let declaration = format!("{keyword} {type_name}");
        let declared = source.lines().any(|line| {
            line.trim_start()
                .strip_prefix(&declaration)
                .is_some_and(|rest| !rest.starts_with(is_identifier_char))
        });
        if declared {
            return declaration;
        }
    }
    type_name.to_string()
}

/// True for characters allowed in C++ identifiers.
fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

// ============================================================================
// SECTION: Whitespace
// ============================================================================

/// Reports DOS line endings, trailing whitespace, tabs, and a missing final
/// newline.
#[must_use]
pub fn whitespace(file: &str, source: &str) -> Vec<Finding> {
    let finding =
        |message: &str, line: u32| Finding::new("whitespace", Severity::Style, message, file, line);
    let mut findings = Vec::new();
    let mut dos_reported = false;
    for (line, text) in numbered_lines(source) {
        let body = match text.strip_suffix('\r') {
            Some(body) => {
                if !dos_reported {
                    findings.push(finding("File seems to have DOS style line endings", line));
                    dos_reported = true;
                }
                body
            }
            None => text,
        };
        if body.ends_with([' ', '\t']) {
            findings.push(finding("Whitespace at end of line", line));
        }
        if body.contains('\t') {
            findings.push(finding("Tab character is not allowed as whitespace", line));
        }
    }
    if !source.is_empty() && !source.ends_with('\n') {
        let line = u32::try_from(source.matches('\n').count()).unwrap_or(u32::MAX).max(1);
        findings.push(finding("File should end with newline", line));
    }
    findings
}

// ============================================================================
// SECTION: Harness Introspection
// ============================================================================

/// Reports each database entry in order, with the build directory shown as
/// `.`. Lines number the entries from 1.
#[must_use]
pub fn database_echo(build_dir: &Path, database: &[CompileCommand]) -> Vec<Finding> {
    let root = build_dir.display().to_string();
    let nested = format!("{root}/");
    database
        .iter()
        .zip(1_u32..)
        .map(|(entry, line)| {
            let command = entry.command.replace(&nested, "").replace(&root, ".");
            Finding::new("database entry", Severity::Information, command, entry.file.as_str(), line)
        })
        .collect()
}

/// Reports whether each path-valued option names an existing absolute path.
#[must_use]
pub fn probe_option_paths(paths: &[PathBuf]) -> Vec<Finding> {
    paths
        .iter()
        .map(|path| {
            let message = if path.is_absolute() && path.exists() {
                PROBE_RESOLVED
            } else {
                PROBE_UNRESOLVED
            };
            Finding::new("harness probe", Severity::Information, message, path.display().to_string(), 1)
        })
        .collect()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Yields `(line_number, text)` pairs, 1-based, split on `\n`.
fn numbered_lines(source: &str) -> impl Iterator<Item = (u32, &str)> {
    let body = source.strip_suffix('\n').unwrap_or(source);
    let lines = (!body.is_empty()).then(|| body.split('\n'));
    (1_u32..).zip(lines.into_iter().flatten())
}
