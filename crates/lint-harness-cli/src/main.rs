// crates/lint-harness-cli/src/main.rs
// ============================================================================
// Module: Lint Harness CLI Entry Point
// Description: Command dispatcher for conformance runs and report utilities.
// Purpose: Run the catalog against colobot-lint and post-process its reports.
// Dependencies: clap, lint-harness-core, lint-harness-report, serde_jcs, tokio.
// ============================================================================

//! ## Overview
//! `lint-harness run` executes the conformance catalog and exits non-zero
//! when any selected case fails; `list` prints the selected case names.
//! `report html` and `report count` consume a findings report written by the
//! tool. Configuration comes from the environment first, then flags.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use lint_harness_core::CaseFilter;
use lint_harness_core::CaseStatus;
use lint_harness_core::HarnessConfig;
use lint_harness_core::RunSummary;
use lint_harness_core::init_logging;
use lint_harness_core::run_suites;
use lint_harness_core::runner::select_cases;
use lint_harness_report::PatternFilter;
use lint_harness_report::count::MATCH_ALL;
use lint_harness_report::count_findings;
use lint_harness_report::load_report;
use lint_harness_report::write_html_report;
use lint_harness_suites::catalog;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "lint-harness", version, about = "Conformance harness for colobot-lint")]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run conformance cases against the analysis tool.
    Run(RunCommand),
    /// List conformance case names.
    List(ListCommand),
    /// Findings report utilities.
    Report {
        /// Selected report subcommand.
        #[command(subcommand)]
        command: ReportCommand,
    },
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Analysis tool executable (overrides `COLOBOT_LINT`).
    #[arg(long = "colobot-lint-exec", value_name = "PATH")]
    colobot_lint_exec: Option<PathBuf>,
    /// Echo command lines and tool output, and keep workspaces.
    #[arg(long)]
    debug: bool,
    /// Per-invocation timeout in seconds.
    #[arg(long = "timeout-sec", value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_sec: Option<u64>,
    /// Glob over `<suite>.<case>` names; repeatable.
    #[arg(long = "filter", value_name = "GLOB")]
    filters: Vec<String>,
    /// Maximum number of concurrent cases.
    #[arg(long, value_name = "N", default_value_t = default_jobs())]
    jobs: usize,
    /// Result format.
    #[arg(long, value_enum, default_value_t = RunFormat::Text)]
    format: RunFormat,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
struct ListCommand {
    /// Glob over `<suite>.<case>` names; repeatable.
    #[arg(long = "filter", value_name = "GLOB")]
    filters: Vec<String>,
}

/// Report utilities.
#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Render a findings report as an interactive HTML page.
    Html(HtmlCommand),
    /// Count findings matching file and rule filters.
    Count(CountCommand),
}

/// Arguments for `report html`.
#[derive(Args, Debug)]
struct HtmlCommand {
    /// Findings report written by the tool.
    #[arg(long = "xml-report-file", value_name = "PATH")]
    xml_report_file: PathBuf,
    /// Directory receiving `index.html` and its assets.
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: PathBuf,
}

/// Arguments for `report count`.
#[derive(Args, Debug)]
struct CountCommand {
    /// Findings report written by the tool.
    #[arg(long = "xml-report-file", value_name = "PATH")]
    xml_report_file: PathBuf,
    /// Regex over finding files; a leading `-` negates.
    #[arg(long = "file-filter", value_name = "RE", default_value = MATCH_ALL, allow_hyphen_values = true)]
    file_filter: String,
    /// Regex over rule identifiers; a leading `-` negates.
    #[arg(long = "rule-filter", value_name = "RE", default_value = MATCH_ALL, allow_hyphen_values = true)]
    rule_filter: String,
}

/// Output format for `run`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum RunFormat {
    /// One line per case plus a summary.
    Text,
    /// Canonical JSON run summary.
    Json,
}

/// Default job count: available parallelism, or one.
fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, usize::from)
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a printable message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the command dispatcher.
async fn run(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Commands::Run(command) => command_run(command).await,
        Commands::List(command) => command_list(&command),
        Commands::Report {
            command: ReportCommand::Html(command),
        } => command_report_html(&command),
        Commands::Report {
            command: ReportCommand::Count(command),
        } => command_report_count(&command),
    }
}

// ============================================================================
// SECTION: Run and List
// ============================================================================

/// Builds the configuration from the environment and `run` flags.
fn resolve_config(command: &RunCommand) -> CliResult<HarnessConfig> {
    let mut config = HarnessConfig::load()
        .map_err(|err| CliError::new(format!("invalid configuration: {err}")))?;
    if let Some(tool) = &command.colobot_lint_exec {
        config = config.with_tool(tool);
    }
    if command.debug {
        config = config.with_debug(true);
    }
    if let Some(secs) = command.timeout_sec {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Compiles `--filter` patterns.
fn build_filter(filters: &[String]) -> CliResult<CaseFilter> {
    CaseFilter::new(filters).map_err(|err| CliError::new(err.to_string()))
}

/// Executes `run`.
async fn command_run(command: RunCommand) -> CliResult<ExitCode> {
    let config = resolve_config(&command)?;
    init_logging(config.debug);
    let filter = build_filter(&command.filters)?;
    let suites = catalog();

    let summary = run_suites(&config, &suites, &filter, command.jobs).await;
    tracing::debug!(total = summary.total, failed = summary.failed, "run finished");

    match command.format {
        RunFormat::Text => {
            for line in render_summary_text(&summary) {
                write_stdout_line(&line).map_err(|err| output_error("stdout", &err))?;
            }
        }
        RunFormat::Json => {
            let mut bytes = serde_jcs::to_vec(&summary)
                .map_err(|err| CliError::new(format!("failed to serialize summary: {err}")))?;
            bytes.push(b'\n');
            write_stdout_bytes(&bytes).map_err(|err| output_error("stdout", &err))?;
        }
    }
    Ok(if summary.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Renders the text form of a run summary.
fn render_summary_text(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.outcomes.len() + 1);
    for outcome in &summary.outcomes {
        match &outcome.status {
            CaseStatus::Passed => lines.push(format!("PASS {}", outcome.name)),
            CaseStatus::Failed {
                class,
                message,
            } => {
                lines.push(format!("FAIL [{class}] {}", outcome.name));
                lines.extend(message.lines().map(|line| format!("    {line}")));
            }
        }
    }
    lines.push(format!(
        "{} passed, {} failed, {} total",
        summary.passed, summary.failed, summary.total
    ));
    lines
}

/// Executes `list`.
fn command_list(command: &ListCommand) -> CliResult<ExitCode> {
    let filter = build_filter(&command.filters)?;
    let suites = catalog();
    for (suite, case) in select_cases(&suites, &filter) {
        write_stdout_line(&suite.qualified_name(case)).map_err(|err| output_error("stdout", &err))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Report Commands
// ============================================================================

/// Executes `report html`.
fn command_report_html(command: &HtmlCommand) -> CliResult<ExitCode> {
    let report = load_report(&command.xml_report_file).map_err(|err| CliError::new(err.to_string()))?;
    let index = write_html_report(&report, &command.output_dir)
        .map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&index.display().to_string()).map_err(|err| output_error("stdout", &err))?;
    Ok(ExitCode::SUCCESS)
}

/// Counts findings for `report count`.
fn count_report(command: &CountCommand) -> CliResult<usize> {
    let file_filter =
        PatternFilter::parse(&command.file_filter).map_err(|err| CliError::new(err.to_string()))?;
    let rule_filter =
        PatternFilter::parse(&command.rule_filter).map_err(|err| CliError::new(err.to_string()))?;
    let report = load_report(&command.xml_report_file).map_err(|err| CliError::new(err.to_string()))?;
    Ok(count_findings(&report, &file_filter, &rule_filter))
}

/// Executes `report count`.
fn command_report_count(command: &CountCommand) -> CliResult<ExitCode> {
    let count = count_report(command)?;
    write_stdout_line(&count.to_string()).map_err(|err| output_error("stdout", &err))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Wraps a failed write to `stream`.
fn output_error(stream: &str, error: &std::io::Error) -> CliError {
    CliError::new(format!("failed to write to {stream}: {error}"))
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
