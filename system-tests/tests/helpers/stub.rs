// system-tests/tests/helpers/stub.rs
// ============================================================================
// Module: Stub Tool Helpers
// Description: Harness configuration pointing at the fake colobot-lint.
// Purpose: Run cases against the stub with a bounded timeout.
// Dependencies: lint-harness-core
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use lint_harness_core::FailureClass;
use lint_harness_core::HarnessConfig;
use lint_harness_core::HarnessError;

/// Timeout applied to stub runs that are expected to finish.
pub const STUB_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the stub executable built alongside these tests.
pub fn stub_tool() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fake-colobot-lint"))
}

/// Harness configuration running the stub.
pub fn stub_config() -> HarnessConfig {
    HarnessConfig::default().with_tool(stub_tool()).with_timeout(STUB_TIMEOUT)
}

/// Checks that `result` failed with `class` and returns the error.
pub fn expect_failure(
    result: Result<(), HarnessError>,
    class: FailureClass,
) -> Result<HarnessError, String> {
    match result {
        Ok(()) => Err(format!("expected {class} failure, case passed")),
        Err(err) if err.failure_class() == class => Ok(err),
        Err(err) => Err(format!("expected {class} failure, got {}: {err}", err.failure_class())),
    }
}
