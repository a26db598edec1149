// crates/lint-harness-core/src/invocation/tests.rs
// ============================================================================
// Module: Tool Invocation Tests
// Description: Unit coverage for argv construction and subprocess handling.
// Purpose: Ensure argument order and failure classification are stable.
// Dependencies: lint-harness-core, tokio, tempfile
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::use_debug,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use super::InvocationError;
use super::InvocationSpec;
use super::OutputFormat;
use super::build_argv;
use super::render_command_line;
use crate::config::HarnessConfig;

fn strings(argv: &[OsString]) -> Vec<String> {
    argv.iter().map(|arg| arg.to_string_lossy().into_owned()).collect()
}

#[test]
fn argv_order_is_fixed() {
    let spec = InvocationSpec::new(vec![PathBuf::from("/w/a.cpp"), PathBuf::from("/w/b.cpp")])
        .with_rules(vec!["NakedDeleteRule".into(), "NakedNewRule".into()])
        .with_options(vec!["-output-filter".into(), "src.cpp:1:4".into()]);
    let argv = build_argv(Path::new("colobot-lint"), Path::new("/w"), &spec);
    assert_eq!(
        strings(&argv),
        [
            "colobot-lint",
            "-p",
            "/w",
            "-output-format",
            "xml",
            "-only-rule",
            "NakedDeleteRule",
            "-only-rule",
            "NakedNewRule",
            "-output-filter",
            "src.cpp:1:4",
            "/w/a.cpp",
            "/w/b.cpp",
        ]
    );
}

#[test]
fn empty_rule_set_selects_all_rules() {
    let spec = InvocationSpec::new(vec![PathBuf::from("/w/src.cpp")])
        .with_output_format(OutputFormat::Text);
    let argv = build_argv(Path::new("/bin/tool"), Path::new("/w"), &spec);
    let rendered = render_command_line(&argv);
    assert_eq!(rendered, "/bin/tool -p /w -output-format text /w/src.cpp");
    assert!(!rendered.contains("-only-rule"));
}

#[test]
fn output_format_labels_are_stable() {
    assert_eq!(OutputFormat::default(), OutputFormat::Xml);
    assert_eq!(OutputFormat::Xml.to_string(), "xml");
    assert_eq!(OutputFormat::Text.as_str(), "text");
}

#[cfg(unix)]
#[tokio::test]
async fn successful_exit_returns_stdout() {
    let workspace = tempfile::tempdir().unwrap();
    let config = HarnessConfig::default().with_tool("true");
    let output = super::run_tool(&config, workspace.path(), &InvocationSpec::default())
        .await
        .unwrap();
    assert_eq!(output.stdout, "");
    assert!(output.command.starts_with("true -p "));
}

#[cfg(unix)]
#[tokio::test]
async fn non_zero_exit_is_an_invocation_failure() {
    let workspace = tempfile::tempdir().unwrap();
    let config = HarnessConfig::default().with_tool("false");
    let err = super::run_tool(&config, workspace.path(), &InvocationSpec::default())
        .await
        .unwrap_err();
    match err {
        InvocationError::NonZeroExit {
            command,
            code,
            ..
        } => {
            assert_eq!(code, Some(1));
            assert!(command.contains("-output-format xml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_executable_is_a_launch_failure() {
    let workspace = tempfile::tempdir().unwrap();
    let tool = workspace.path().join("no-such-colobot-lint");
    let config = HarnessConfig::default().with_tool(&tool);
    let err = super::run_tool(&config, workspace.path(), &InvocationSpec::default())
        .await
        .unwrap_err();
    assert!(matches!(err, InvocationError::Launch { .. }));
    assert!(err.command().starts_with(&tool.display().to_string()));
}
