// crates/lint-harness-report/src/html.rs
// ============================================================================
// Module: HTML Report Renderer
// Description: Renders a findings report as a sortable, filterable HTML table.
// Purpose: Give humans a browsable view of a colobot-lint report.
// Dependencies: quick-xml (escaping), thiserror
// ============================================================================

//! ## Overview
//! The renderer reads the same [`Report`] the harness parses and produces a
//! single `index.html` with a four-column table (location, category,
//! severity, message). Locations are shown relative to the longest common
//! directory prefix of all finding files. Sorting and filtering happen
//! client-side in a small self-contained script written next to the page.
//! Invariants:
//! - Row order equals finding order.
//! - Every cell value is HTML-escaped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use quick_xml::escape::escape;
use thiserror::Error;

use crate::finding::Finding;
use crate::finding::Report;

// ============================================================================
// SECTION: Assets
// ============================================================================

/// Name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Stylesheet written to `css/style.css`.
const STYLE_CSS: &str = r"body { font-family: sans-serif; margin: 1em; }
table#errors { border-collapse: collapse; width: 100%; table-layout: fixed; }
table#errors th, table#errors td { border: 1px solid #ccc; padding: 4px; text-align: left; word-wrap: break-word; }
tr.headings th { cursor: pointer; background: #eee; }
tr.filters input, tr.filters select { width: 100%; box-sizing: border-box; }
td.severity { font-weight: bold; }
tbody tr:nth-child(even) { background: #f8f8f8; }
";

/// Client-side sorting and filtering script written to `js/interactions.js`.
const INTERACTIONS_JS: &str = r"(function () {
  'use strict';
  var columns = ['location', 'category', 'severity', 'message'];

  function cellText(row, column) {
    var cell = row.querySelector('td.' + column);
    return cell ? cell.textContent : '';
  }

  function applyFilters(table) {
    var filters = columns.map(function (column) {
      var input = table.querySelector('tr.filters th.' + column + ' .filter');
      return { column: column, element: input };
    });
    Array.prototype.forEach.call(table.tBodies[0].rows, function (row) {
      var visible = filters.every(function (filter) {
        var value = filter.element ? filter.element.value : '';
        if (!value || value === '(all)') { return true; }
        if (filter.element.tagName === 'SELECT') { return cellText(row, filter.column) === value; }
        try { return new RegExp(value).test(cellText(row, filter.column)); } catch (e) { return true; }
      });
      row.style.display = visible ? '' : 'none';
    });
  }

  function sortBy(table, column, heading) {
    var body = table.tBodies[0];
    var ascending = heading.getAttribute('data-order') !== 'asc';
    var rows = Array.prototype.slice.call(body.rows);
    rows.sort(function (a, b) {
      var left = cellText(a, column);
      var right = cellText(b, column);
      var result = left.localeCompare(right, undefined, { numeric: true });
      return ascending ? result : -result;
    });
    rows.forEach(function (row) { body.appendChild(row); });
    Array.prototype.forEach.call(table.querySelectorAll('tr.headings th'), function (th) {
      th.removeAttribute('data-order');
      var indicator = th.querySelector('.sort-indicator');
      if (indicator) { indicator.textContent = ''; }
    });
    heading.setAttribute('data-order', ascending ? 'asc' : 'desc');
    heading.querySelector('.sort-indicator').textContent = ascending ? '▲' : '▼';
  }

  document.addEventListener('DOMContentLoaded', function () {
    var table = document.getElementById('errors');
    if (!table) { return; }
    columns.forEach(function (column) {
      var heading = table.querySelector('tr.headings th.' + column);
      if (heading) { heading.addEventListener('click', function () { sortBy(table, column, heading); }); }
      var filter = table.querySelector('tr.filters th.' + column + ' .filter');
      if (filter) {
        filter.addEventListener('input', function () { applyFilters(table); });
        filter.addEventListener('change', function () { applyFilters(table); });
      }
    });
  });
})();
";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while writing an HTML report to disk.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Creating an output directory failed.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

// ============================================================================
// SECTION: Path Helpers
// ============================================================================

/// Returns the longest common directory prefix of the given file paths.
///
/// The character-wise common prefix is trimmed back to its last `/`, so the
/// result always ends at a directory boundary (or is empty). Empty paths are
/// ignored; `None` is returned when no non-empty path is given.
#[must_use]
pub fn common_path_prefix<'a>(files: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut prefix: Option<&str> = None;
    for file in files.into_iter().filter(|file| !file.is_empty()) {
        prefix = Some(match prefix {
            None => file,
            Some(current) => {
                let shared: usize = current
                    .char_indices()
                    .zip(file.chars())
                    .take_while(|((_, left), right)| left == right)
                    .map(|((_, left), _)| left.len_utf8())
                    .sum();
                &current[.. shared]
            }
        });
    }
    prefix.map(|prefix| match prefix.rfind('/') {
        Some(index) => prefix[..= index].to_string(),
        None => String::new(),
    })
}

/// Strips the project prefix from a finding file, when it applies.
fn relative_file<'a>(file: &'a str, prefix: &str) -> &'a str {
    match file.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => rest,
        _ => file,
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the complete HTML page for a report.
#[must_use]
pub fn render_html(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n");
    write_head(&mut out);
    out.push_str("<body>\n");
    write_table(&report.findings, &mut out);
    out.push_str("</body>\n</html>\n");
    out
}

/// Renders a report into `output_dir` and returns the page path.
///
/// # Errors
///
/// Returns [`HtmlError`] when a directory or file cannot be written.
pub fn write_html_report(report: &Report, output_dir: &Path) -> Result<PathBuf, HtmlError> {
    for dir in [output_dir.to_path_buf(), output_dir.join("css"), output_dir.join("js")] {
        fs::create_dir_all(&dir).map_err(|source| HtmlError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    write_file(&output_dir.join("css").join("style.css"), STYLE_CSS)?;
    write_file(&output_dir.join("js").join("interactions.js"), INTERACTIONS_JS)?;
    let index = output_dir.join(INDEX_FILE);
    write_file(&index, &render_html(report))?;
    Ok(index)
}

/// Writes one output file.
fn write_file(path: &Path, contents: &str) -> Result<(), HtmlError> {
    fs::write(path, contents).map_err(|source| HtmlError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the document head.
fn write_head(out: &mut String) {
    out.push_str("<head>\n");
    out.push_str("  <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n");
    out.push_str("  <title>Colobot-lint HTML report</title>\n");
    out.push_str("  <link rel=\"stylesheet\" type=\"text/css\" href=\"css/style.css\">\n");
    out.push_str("  <script type=\"text/javascript\" src=\"js/interactions.js\"></script>\n");
    out.push_str("</head>\n");
}

/// Writes the findings table.
fn write_table(findings: &[Finding], out: &mut String) {
    out.push_str("<table id=\"errors\">\n");
    out.push_str("<colgroup>\n");
    for width in ["21%", "18%", "11%", "50%"] {
        let _ = writeln!(out, "  <col span=\"1\" style=\"width: {width};\">");
    }
    out.push_str("</colgroup>\n");

    out.push_str("<thead>\n");
    out.push_str("<tr class=\"headings\">\n");
    for (class, title) in
        [("location", "Location"), ("category", "Category"), ("severity", "Severity"), ("message", "Message")]
    {
        let _ = writeln!(
            out,
            "  <th class=\"{class}\">{title} <span class=\"sort-indicator\"></span></th>"
        );
    }
    out.push_str("</tr>\n");
    write_filters(findings, out);
    out.push_str("</thead>\n");

    out.push_str("<tbody>\n");
    let prefix =
        common_path_prefix(findings.iter().map(|finding| finding.location.file.as_str()))
            .unwrap_or_default();
    for finding in findings {
        write_row(finding, &prefix, out);
    }
    out.push_str("</tbody>\n");
    out.push_str("</table>\n");
}

/// Writes the filter row with the unique categories and severities.
fn write_filters(findings: &[Finding], out: &mut String) {
    let categories: BTreeSet<&str> = findings.iter().map(|finding| finding.id.as_str()).collect();
    let severities: BTreeSet<&str> =
        findings.iter().map(|finding| finding.severity.as_str()).collect();

    out.push_str("<tr class=\"filters\">\n");
    out.push_str(
        "  <th class=\"location\"><input class=\"filter\" placeholder=\"Regex search...\"></th>\n",
    );
    write_select("category", &categories, out);
    write_select("severity", &severities, out);
    out.push_str(
        "  <th class=\"message\"><input class=\"filter\" placeholder=\"Regex search...\"></th>\n",
    );
    out.push_str("</tr>\n");
}

/// Writes a `<select>` filter cell.
fn write_select(class: &str, values: &BTreeSet<&str>, out: &mut String) {
    let _ = writeln!(out, "  <th class=\"{class}\">");
    out.push_str("    <select class=\"filter\">\n");
    out.push_str("      <option>(all)</option>\n");
    for value in values {
        let _ = writeln!(out, "      <option>{}</option>", escape(*value));
    }
    out.push_str("    </select>\n");
    out.push_str("  </th>\n");
}

/// Writes one table row.
fn write_row(finding: &Finding, prefix: &str, out: &mut String) {
    let location =
        format!("{}:{}", relative_file(&finding.location.file, prefix), finding.location.line);
    out.push_str("<tr>\n");
    let _ = writeln!(out, "  <td class=\"location\">{}</td>", escape(location.as_str()));
    let _ = writeln!(out, "  <td class=\"category\">{}</td>", escape(finding.id.as_str()));
    let _ = writeln!(out, "  <td class=\"severity\">{}</td>", finding.severity);
    let _ = writeln!(out, "  <td class=\"message\">{}</td>", escape(finding.message.as_str()));
    out.push_str("</tr>\n");
}

// ============================================================================
// SECTION: Tests
// ============================================================================
