// crates/lint-harness-report/src/lib.rs
// ============================================================================
// Module: Lint Harness Report Library
// Description: Findings report model, XML codec, and report consumers.
// Purpose: Share one typed view of the colobot-lint report across the harness
//          and its downstream tools.
// Dependencies: quick-xml, regex, serde, thiserror
// ============================================================================

//! ## Overview
//! The analysis tool emits a cppcheck-style XML report: a `<results>` root
//! holding an `<errors>` container of `<error>` elements, each with a nested
//! `<location>`. This crate parses that payload into ordered [`Finding`]
//! records, renders it back, and implements the two consumers of the same
//! format: the HTML report renderer and the finding counter.
//! Invariants:
//! - Finding order always equals document order.
//! - The report schema is never extended or rewritten by a consumer.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod count;
pub mod error;
pub mod finding;
pub mod html;
pub mod parse;
pub mod write;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use count::PatternFilter;
pub use count::count_findings;
pub use error::ReportError;
pub use finding::Finding;
pub use finding::Location;
pub use finding::Report;
pub use finding::Severity;
pub use html::HtmlError;
pub use html::common_path_prefix;
pub use html::render_html;
pub use html::write_html_report;
pub use parse::load_report;
pub use parse::parse_report;
pub use write::render_report_xml;
