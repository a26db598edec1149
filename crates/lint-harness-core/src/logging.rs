// crates/lint-harness-core/src/logging.rs
// ============================================================================
// Module: Logging Bootstrap
// Description: Installs the process-wide tracing subscriber.
// Purpose: Route harness events to stderr with an env-overridable filter.
// Dependencies: tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! `RUST_LOG` wins when set; otherwise debug runs log at `info` (command
//! echo, raw output, retained workspaces) and normal runs at `warn`.
//! Repeated calls are no-ops, so tests may call this freely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

// ============================================================================
// SECTION: Bootstrap
// ============================================================================

/// Default filter directive for the given debug flag.
#[must_use]
pub const fn default_level(debug: bool) -> &'static str {
    if debug { "info" } else { "warn" }
}

/// Installs the stderr subscriber once per process.
pub fn init_logging(debug: bool) {
    let level = default_level(debug);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level, "logging initialized");
    }
}
