// crates/lint-harness-report/src/parse.rs
// ============================================================================
// Module: Report Parser
// Description: Streaming parser for colobot-lint XML reports.
// Purpose: Convert raw tool output into ordered finding records.
// Dependencies: quick-xml
// ============================================================================

//! ## Overview
//! The parser walks the XML event stream once and tracks the element path
//! explicitly, so only the `results > errors > error > location` shape is
//! interpreted and anything else inside the document is skipped.
//! Invariants:
//! - Findings are emitted in document order.
//! - A malformed payload is a [`ReportError`], never an empty report.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::ReportError;
use crate::finding::Finding;
use crate::finding::Location;
use crate::finding::Report;
use crate::finding::Severity;

// ============================================================================
// SECTION: Element Names
// ============================================================================

/// Root element name.
const RESULTS: &str = "results";
/// Tool banner element name.
const CPPCHECK: &str = "cppcheck";
/// Findings container element name.
const ERRORS: &str = "errors";
/// Finding element name.
const ERROR: &str = "error";
/// Location element name.
const LOCATION: &str = "location";

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Attributes of one element, unescaped, in document order.
type Attributes = Vec<(String, String)>;

/// A finding whose `<error>` element is open but not yet closed.
struct PendingFinding {
    /// Rule tag.
    id: String,
    /// Parsed severity.
    severity: Severity,
    /// Message text.
    message: String,
    /// First nested location, once seen.
    location: Option<Location>,
}

/// Parses a report payload into ordered findings.
///
/// # Errors
///
/// Returns [`ReportError`] when the payload is not well-formed XML or does not
/// follow the `results > errors > error > location` schema.
pub fn parse_report(xml: &str) -> Result<Report, ReportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut seen_errors = false;
    let mut tool_version = None;
    let mut findings = Vec::new();
    let mut pending: Option<PendingFinding> = None;

    loop {
        let event = reader.read_event().map_err(|err| ReportError::Xml(err.to_string()))?;
        match event {
            Event::Start(element) | Event::Empty(element) if stack.is_empty() && seen_root => {
                let name = element_name(&element);
                return Err(ReportError::Xml(format!("unexpected second root element <{name}>")));
            }
            Event::Start(element) => {
                let name = element_name(&element);
                open_element(
                    &stack,
                    &name,
                    &element,
                    &mut seen_errors,
                    &mut tool_version,
                    &mut pending,
                )?;
                seen_root = true;
                stack.push(name);
            }
            Event::Empty(element) => {
                let name = element_name(&element);
                open_element(
                    &stack,
                    &name,
                    &element,
                    &mut seen_errors,
                    &mut tool_version,
                    &mut pending,
                )?;
                seen_root = true;
                if stack.len() == 2 && name == ERROR {
                    close_finding(&mut pending, &mut findings)?;
                }
            }
            Event::End(_) => {
                let Some(name) = stack.pop() else {
                    return Err(ReportError::Xml("unbalanced closing tag".to_string()));
                };
                if stack.len() == 2 && name == ERROR {
                    close_finding(&mut pending, &mut findings)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        let open = stack.join("> <");
        return Err(ReportError::Xml(format!("unexpected end of document inside <{open}>")));
    }
    if !seen_root {
        return Err(ReportError::Empty);
    }
    if !seen_errors {
        return Err(ReportError::MissingElement(ERRORS));
    }
    Ok(Report {
        tool_version,
        findings,
    })
}

/// Reads and parses a report file.
///
/// # Errors
///
/// Returns [`ReportError::Read`] when the file cannot be read, or any parse
/// error from [`parse_report`].
pub fn load_report(path: &Path) -> Result<Report, ReportError> {
    let xml = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&xml)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Interprets an opening (or self-closing) element at the current path.
fn open_element(
    stack: &[String],
    name: &str,
    element: &BytesStart<'_>,
    seen_errors: &mut bool,
    tool_version: &mut Option<String>,
    pending: &mut Option<PendingFinding>,
) -> Result<(), ReportError> {
    match stack.len() {
        0 if name != RESULTS => Err(ReportError::UnexpectedRoot(name.to_string())),
        1 if name == CPPCHECK => {
            *tool_version = find_attribute(&attributes(element)?, "version").map(str::to_string);
            Ok(())
        }
        1 if name == ERRORS => {
            *seen_errors = true;
            Ok(())
        }
        2 if stack[1] == ERRORS && name == ERROR => {
            *pending = Some(pending_finding(&attributes(element)?)?);
            Ok(())
        }
        3 if stack[2] == ERROR && name == LOCATION => {
            if let Some(finding) = pending.as_mut()
                && finding.location.is_none()
            {
                finding.location = Some(location(&attributes(element)?)?);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Moves the pending finding into the output list.
fn close_finding(
    pending: &mut Option<PendingFinding>,
    findings: &mut Vec<Finding>,
) -> Result<(), ReportError> {
    let Some(finding) = pending.take() else {
        return Ok(());
    };
    let location = finding.location.ok_or(ReportError::MissingElement(LOCATION))?;
    findings.push(Finding {
        id: finding.id,
        severity: finding.severity,
        message: finding.message,
        location,
    });
    Ok(())
}

/// Builds a pending finding from `<error>` attributes.
fn pending_finding(attrs: &Attributes) -> Result<PendingFinding, ReportError> {
    let id = required_attribute(attrs, ERROR, "id")?;
    let severity = required_attribute(attrs, ERROR, "severity")?.parse()?;
    let message = required_attribute(attrs, ERROR, "msg")?;
    Ok(PendingFinding {
        id,
        severity,
        message,
        location: None,
    })
}

/// Builds a location from `<location>` attributes.
fn location(attrs: &Attributes) -> Result<Location, ReportError> {
    let raw_line = required_attribute(attrs, LOCATION, "line")?;
    let line = raw_line
        .trim()
        .parse::<u32>()
        .map_err(|_| ReportError::InvalidLine(raw_line.clone()))?;
    let file = find_attribute(attrs, "file").unwrap_or_default().to_string();
    Ok(Location {
        file,
        line,
    })
}

/// Returns the element's local name as an owned string.
fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Collects and unescapes every attribute of an element.
fn attributes(element: &BytesStart<'_>) -> Result<Attributes, ReportError> {
    element
        .attributes()
        .map(|attr| {
            let attr = attr.map_err(|err| ReportError::Xml(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value =
                attr.unescape_value().map_err(|err| ReportError::Xml(err.to_string()))?.into_owned();
            Ok((key, value))
        })
        .collect()
}

/// Looks up an attribute value by name.
fn find_attribute<'a>(attrs: &'a Attributes, name: &str) -> Option<&'a str> {
    attrs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

/// Looks up a required attribute value by name.
fn required_attribute(
    attrs: &Attributes,
    element: &'static str,
    attribute: &'static str,
) -> Result<String, ReportError> {
    find_attribute(attrs, attribute).map(str::to_string).ok_or(ReportError::MissingAttribute {
        element,
        attribute,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
