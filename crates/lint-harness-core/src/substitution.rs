// crates/lint-harness-core/src/substitution.rs
// ============================================================================
// Module: Placeholder Substitution
// Description: Replaces the workspace-root placeholder in flags and options.
// Purpose: Let fixtures name workspace paths before the workspace exists.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Every occurrence of [`WORKSPACE_PLACEHOLDER`] is replaced with the
//! workspace root. The replacement is a literal string replace: there is no
//! escape sequence, so an option can never carry the placeholder text itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

// ============================================================================
// SECTION: Substitution
// ============================================================================

/// Token standing for the workspace root.
pub const WORKSPACE_PLACEHOLDER: &str = "$TEMP_DIR";

/// Replaces every placeholder in `text` with `root`.
#[must_use]
pub fn substitute(text: &str, root: &Path) -> String {
    text.replace(WORKSPACE_PLACEHOLDER, &root.display().to_string())
}

/// Applies [`substitute`] to each item, keeping order.
#[must_use]
pub fn substitute_all(items: &[String], root: &Path) -> Vec<String> {
    items.iter().map(|item| substitute(item, root)).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
