// crates/lint-harness-core/src/case/tests.rs
// ============================================================================
// Module: Conformance Case Tests
// Description: Unit coverage for case builders and rule resolution.
// Purpose: Ensure single-file cases and suite lookups behave as documented.
// Dependencies: lint-harness-core
// ============================================================================

#![allow(clippy::unwrap_used, reason = "Test-only assertions favor direct unwrap for clarity.")]

use super::ConformanceCase;
use super::DEFAULT_SOURCE;
use super::Suite;
use crate::expectation::SuiteDefaults;

#[test]
fn single_file_lists_source_everywhere() {
    let case = ConformanceCase::single_file("basic", ["int x;", ""]);
    assert_eq!(case.fixture.get(DEFAULT_SOURCE).unwrap(), ["int x;".to_string(), String::new()]);
    assert_eq!(case.database_files, [DEFAULT_SOURCE]);
    assert_eq!(case.targets, [DEFAULT_SOURCE]);
    assert_eq!(case.options, ["-project-local-include-path", "$TEMP_DIR"]);
    assert!(case.expected.is_empty());
}

#[test]
fn database_files_keep_duplicates_and_order() {
    let case = ConformanceCase::new("dup")
        .with_file("src.cpp", ["int x;"])
        .with_database_file("src.cpp")
        .with_database_file("src.cpp")
        .with_target("src.cpp");
    assert_eq!(case.database_files, ["src.cpp", "src.cpp"]);
}

#[test]
fn case_rules_override_suite_rules() {
    let defaults = SuiteDefaults::new().with_rule("NakedDeleteRule");
    let inherited = ConformanceCase::single_file("a", ["int x;"]);
    let overridden = ConformanceCase::single_file("b", ["int x;"]).with_rules(["WhitespaceRule"]);
    assert_eq!(inherited.effective_rules(&defaults), ["NakedDeleteRule".to_string()]);
    assert_eq!(overridden.effective_rules(&defaults), ["WhitespaceRule".to_string()]);

    let everything = ConformanceCase::single_file("c", ["int x;"]).with_rules(Vec::<String>::new());
    assert!(everything.effective_rules(&defaults).is_empty());
}

#[test]
fn suite_names_qualify_cases() {
    let suite = Suite::new("todo", SuiteDefaults::new())
        .with_case(ConformanceCase::single_file("single_comment", ["// TODO: comment"]));
    let case = suite.case("single_comment").unwrap();
    assert_eq!(suite.qualified_name(case), "todo.single_comment");
    assert!(suite.case("missing").is_none());
}
