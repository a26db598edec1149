// system-tests/src/stub/args.rs
// ============================================================================
// Module: Stub Command Line
// Description: Parses the colobot-lint command line accepted by the stub.
// Purpose: Mirror the options the harness passes to the real tool.
// Dependencies: lint-harness-report
// ============================================================================

//! Single-dash options as the real tool spells them. Anything that does not
//! start with `-` is a target.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use lint_harness_report::Finding;

use super::StubError;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Build directory holding `compile_commands.json`.
const BUILD_DIR_FLAG: &str = "-p";
/// Output format selector.
const OUTPUT_FORMAT_FLAG: &str = "-output-format";
/// Rule selector; repeatable.
const ONLY_RULE_FLAG: &str = "-only-rule";
/// Project include directory.
const PROJECT_INCLUDE_FLAG: &str = "-project-local-include-path";
/// License template file.
const LICENSE_TEMPLATE_FLAG: &str = "-license-template-file";
/// `FILE:FIRST:LAST` line-range filter.
const OUTPUT_FILTER_FLAG: &str = "-output-filter";
/// Accepted and ignored.
const DEBUG_FLAG: &str = "-debug";

// ============================================================================
// SECTION: Request
// ============================================================================

/// Parsed stub invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubRequest {
    /// Value of `-p`.
    pub build_dir: Option<PathBuf>,
    /// True when `-output-format text` was given.
    pub text_output: bool,
    /// Rules named by `-only-rule`, in order.
    pub rules: Vec<String>,
    /// Values of path-valued options, in order.
    pub option_paths: Vec<PathBuf>,
    /// Value of `-output-filter`.
    pub output_filter: Option<OutputFilter>,
    /// Targets as given, duplicates included.
    pub targets: Vec<PathBuf>,
}

impl StubRequest {
    /// True when `rule` was named explicitly.
    #[must_use]
    pub fn selects(&self, rule: &str) -> bool {
        self.rules.iter().any(|selected| selected == rule)
    }

    /// True when an analysis rule runs: no selection at all, or named.
    #[must_use]
    pub fn enables(&self, rule: &str) -> bool {
        self.rules.is_empty() || self.selects(rule)
    }
}

/// Parses the stub command line, excluding the program name.
///
/// # Errors
///
/// Returns [`StubError`] for unknown options, missing values, or malformed
/// option values.
pub fn parse_args<I>(args: I) -> Result<StubRequest, StubError>
where
    I: IntoIterator<Item = String>,
{
    let mut request = StubRequest::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if !arg.starts_with('-') {
            request.targets.push(PathBuf::from(arg));
            continue;
        }
        if arg == DEBUG_FLAG {
            continue;
        }
        let flag = arg;
        let value = match flag.as_str() {
            BUILD_DIR_FLAG | OUTPUT_FORMAT_FLAG | ONLY_RULE_FLAG | PROJECT_INCLUDE_FLAG
            | LICENSE_TEMPLATE_FLAG | OUTPUT_FILTER_FLAG => {
                args.next().ok_or_else(|| StubError::MissingValue {
                    flag: flag.clone(),
                })?
            }
            _ => {
                return Err(StubError::UnknownOption {
                    option: flag,
                });
            }
        };
        match flag.as_str() {
            BUILD_DIR_FLAG => request.build_dir = Some(PathBuf::from(value)),
            OUTPUT_FORMAT_FLAG => {
                request.text_output = match value.as_str() {
                    "xml" => false,
                    "text" => true,
                    _ => {
                        return Err(StubError::UnsupportedFormat {
                            format: value,
                        });
                    }
                };
            }
            ONLY_RULE_FLAG => request.rules.push(value),
            OUTPUT_FILTER_FLAG => request.output_filter = Some(OutputFilter::parse(&value)?),
            _ => request.option_paths.push(PathBuf::from(value)),
        }
    }
    Ok(request)
}

// ============================================================================
// SECTION: Output Filter
// ============================================================================

/// Keeps findings in one file within an inclusive line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilter {
    /// File name, matched against the end of finding paths.
    pub file: String,
    /// First kept line.
    pub first_line: u32,
    /// Last kept line.
    pub last_line: u32,
}

impl OutputFilter {
    /// Parses `FILE:FIRST:LAST`.
    ///
    /// # Errors
    ///
    /// Returns [`StubError::InvalidOutputFilter`] when a part is missing or a
    /// line is not a number.
    pub fn parse(value: &str) -> Result<Self, StubError> {
        let invalid = || StubError::InvalidOutputFilter {
            value: value.to_string(),
        };
        let mut parts = value.rsplitn(3, ':');
        let last_line = parts.next().and_then(|part| part.parse().ok()).ok_or_else(invalid)?;
        let first_line = parts.next().and_then(|part| part.parse().ok()).ok_or_else(invalid)?;
        let file = parts.next().filter(|file| !file.is_empty()).ok_or_else(invalid)?;
        Ok(Self {
            file: file.to_string(),
            first_line,
            last_line,
        })
    }

    /// True when `finding` lies inside the filtered range.
    #[must_use]
    pub fn keeps(&self, finding: &Finding) -> bool {
        let path = finding.location.file.as_str();
        let same_file = path == self.file || path.ends_with(&format!("/{}", self.file));
        same_file && (self.first_line..=self.last_line).contains(&finding.location.line)
    }
}
