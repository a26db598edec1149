// crates/lint-harness-suites/src/lib.rs
// ============================================================================
// Module: Lint Harness Suites
// Description: Conformance case catalog for colobot-lint.
// Purpose: Declare fixtures and expected findings, grouped per rule.
// Dependencies: lint-harness-core, lint-harness-report
// ============================================================================

//! ## Overview
//! Each module declares one [`Suite`]: per-suite defaults (rule selection,
//! finding identifier and severity) and the cases exercising that behavior.
//! The data here is input for the real analysis tool; nothing in this crate
//! runs a process.
//! Invariants:
//! - Suite names are unique and qualified case names are unique.
//! - Every fixture, database and target path is workspace-relative.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod compilation_database;
pub mod diagnostics;
pub mod include_style;
pub mod license_header;
pub mod naked_delete;
pub mod naked_new;
pub mod output_filter;
pub mod todo;
pub mod whitespace;

// ============================================================================
// SECTION: Imports
// ============================================================================

use lint_harness_core::Suite;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns every suite in catalog order.
#[must_use]
pub fn catalog() -> Vec<Suite> {
    vec![
        naked_delete::suite(),
        naked_new::suite(),
        whitespace::suite(),
        todo::suite(),
        compilation_database::suite(),
        diagnostics::suite(),
        license_header::suite(),
        include_style::suite(),
        output_filter::suite(),
    ]
}

// ============================================================================
// SECTION: Tests
// ============================================================================
