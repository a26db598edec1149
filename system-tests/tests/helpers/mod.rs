// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for end-to-end harness tests.
// Purpose: Provide stub configuration and outcome checks.
// Dependencies: lint-harness-core
// ============================================================================

//! ## Overview
//! Helpers shared by the harness suites: the stub tool location and
//! failure-class checks.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod stub;
