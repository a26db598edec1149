// crates/lint-harness-core/src/case.rs
// ============================================================================
// Module: Conformance Cases
// Description: Declarative description of one fixture and its expectations.
// Purpose: Let suites state input and expected output as plain data.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`ConformanceCase`] lists its fixture files, the files recorded in the
//! compilation database (order and duplicates preserved), the files the tool
//! analyzes, compile flags and tool options (both may contain the workspace
//! placeholder), and the expected findings. A [`Suite`] groups cases that
//! share [`SuiteDefaults`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::expectation::ExpectedFinding;
use crate::expectation::SuiteDefaults;
use crate::fixture::FixtureTree;
use crate::substitution::WORKSPACE_PLACEHOLDER;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Source file used by single-file cases.
pub const DEFAULT_SOURCE: &str = "src.cpp";

/// Tool option naming the directory whose headers belong to the project.
pub const PROJECT_INCLUDE_OPTION: &str = "-project-local-include-path";

// ============================================================================
// SECTION: Case
// ============================================================================

/// One conformance scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceCase {
    /// Case name, unique within its suite.
    pub name: String,
    /// Files written into the workspace.
    pub fixture: FixtureTree,
    /// Workspace-relative files listed in the compilation database.
    pub database_files: Vec<String>,
    /// Workspace-relative files passed to the tool.
    pub targets: Vec<String>,
    /// Extra compile flags.
    pub compile_flags: Vec<String>,
    /// Extra tool options.
    pub options: Vec<String>,
    /// Rule selection replacing the suite's rules.
    pub rules: Option<Vec<String>>,
    /// Expected findings in order.
    pub expected: Vec<ExpectedFinding>,
}

impl ConformanceCase {
    /// Creates an empty case.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture: FixtureTree::new(),
            database_files: Vec::new(),
            targets: Vec::new(),
            compile_flags: Vec::new(),
            options: Vec::new(),
            rules: None,
            expected: Vec::new(),
        }
    }

    /// Creates a case with one source file used as database entry and target,
    /// with the workspace root as project-local include path.
    #[must_use]
    pub fn single_file<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name)
            .with_file(DEFAULT_SOURCE, lines)
            .with_database_file(DEFAULT_SOURCE)
            .with_target(DEFAULT_SOURCE)
            .with_options([PROJECT_INCLUDE_OPTION, WORKSPACE_PLACEHOLDER])
    }

    /// Adds a fixture file.
    #[must_use]
    pub fn with_file<I, S>(mut self, path: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fixture.insert(path, lines);
        self
    }

    /// Appends a compilation database entry.
    #[must_use]
    pub fn with_database_file(mut self, path: impl Into<String>) -> Self {
        self.database_files.push(path.into());
        self
    }

    /// Appends a target file.
    #[must_use]
    pub fn with_target(mut self, path: impl Into<String>) -> Self {
        self.targets.push(path.into());
        self
    }

    /// Appends a compile flag.
    #[must_use]
    pub fn with_compile_flag(mut self, flag: impl Into<String>) -> Self {
        self.compile_flags.push(flag.into());
        self
    }

    /// Appends tool options.
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Replaces the suite's rule selection for this case.
    #[must_use]
    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = Some(rules.into_iter().map(Into::into).collect());
        self
    }

    /// Appends an expected finding.
    #[must_use]
    pub fn expect(mut self, finding: ExpectedFinding) -> Self {
        self.expected.push(finding);
        self
    }

    /// Rules to run, given the suite defaults.
    #[must_use]
    pub fn effective_rules<'a>(&'a self, defaults: &'a SuiteDefaults) -> &'a [String] {
        self.rules.as_deref().unwrap_or(&defaults.rules)
    }
}

// ============================================================================
// SECTION: Suite
// ============================================================================

/// Named group of cases sharing defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    /// Suite name.
    pub name: String,
    /// Shared defaults.
    pub defaults: SuiteDefaults,
    /// Cases in declaration order.
    pub cases: Vec<ConformanceCase>,
}

impl Suite {
    /// Creates an empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>, defaults: SuiteDefaults) -> Self {
        Self {
            name: name.into(),
            defaults,
            cases: Vec::new(),
        }
    }

    /// Appends a case.
    #[must_use]
    pub fn with_case(mut self, case: ConformanceCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Returns `<suite>.<case>`.
    #[must_use]
    pub fn qualified_name(&self, case: &ConformanceCase) -> String {
        format!("{}.{}", self.name, case.name)
    }

    /// Looks a case up by name.
    #[must_use]
    pub fn case(&self, name: &str) -> Option<&ConformanceCase> {
        self.cases.iter().find(|case| case.name == name)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
