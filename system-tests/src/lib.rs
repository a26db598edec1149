// system-tests/src/lib.rs
// ============================================================================
// Module: System Tests Library
// Description: Shared support for end-to-end harness tests.
// Purpose: Host the stub analysis tool driven by the system-test suites.
// Dependencies: lint-harness-core, lint-harness-report, serde_json
// ============================================================================

//! ## Overview
//! System-test support for the conformance harness. The [`stub`] module
//! implements a small, deterministic stand-in for colobot-lint that speaks
//! the same command line and report format, so the full pipeline can be
//! exercised without the real tool installed.

pub mod stub;
