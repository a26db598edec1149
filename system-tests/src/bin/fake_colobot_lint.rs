// system-tests/src/bin/fake_colobot_lint.rs
// ============================================================================
// Module: Fake colobot-lint Binary
// Description: Executable wrapper around the stub analysis tool.
// Purpose: Stand in for colobot-lint in end-to-end harness runs.
// Dependencies: system-tests
// ============================================================================

//! ## Overview
//! Prints the stub's report to stdout, or its error to stderr with the
//! error's exit code. `HangRule` sleeps until the harness kills the process.

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use system_tests::stub::StubAction;
use system_tests::stub::execute;
use system_tests::stub::parse_args;

/// Sleep long enough to outlast any harness timeout used in tests.
const HANG_DURATION: Duration = Duration::from_secs(600);

/// Runs the stub and maps its outcome to an exit code.
fn main() -> ExitCode {
    let outcome = parse_args(std::env::args().skip(1)).and_then(|request| execute(&request));
    match outcome {
        Ok(StubAction::Emit(report)) => {
            let mut stdout = std::io::stdout();
            if stdout.write_all(report.as_bytes()).and_then(|()| stdout.flush()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(StubAction::Hang) => {
            std::thread::sleep(HANG_DURATION);
            ExitCode::FAILURE
        }
        Err(err) => {
            let mut stderr = std::io::stderr();
            let _ = writeln!(&mut stderr, "fake-colobot-lint: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
