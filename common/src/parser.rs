//! AI response parser
//!
//! Turns the pipe-delimited lines returned by the AI CLI into
//! `TestCaseRecord`s. Lines that do not have exactly five fields are
//! dropped; markdown table decoration is tolerated.

use crate::error::{Error, Result};
use crate::types::TestCaseRecord;
use regex::Regex;

/// Number of fields per generated row: ID | Title | Test Type | Steps | Expected Result
pub const FIELD_COUNT: usize = 5;

/// Parsed AI output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCandidates {
    pub records: Vec<TestCaseRecord>,
    /// Non-blank lines that were not usable rows
    pub skipped: usize,
}

/// Parse one pipe-delimited row
///
/// Returns `None` for separator rows, header rows and rows with the
/// wrong number of fields.
///
/// # Examples
/// ```
/// use testcase_ai_common::parse_candidate_line;
///
/// let record = parse_candidate_line("TC01 | Login | Positive | Open page | Logged in").unwrap();
/// assert_eq!(record.title, "Login");
/// assert!(parse_candidate_line("just text").is_none());
/// ```
pub fn parse_candidate_line(line: &str) -> Option<TestCaseRecord> {
    lazy_static::lazy_static! {
        // |---|:---:| style markdown separators
        static ref SEPARATOR_RE: Regex = Regex::new(r"^[\s|:\-]+$").unwrap();
    }

    let line = line.trim();
    if line.is_empty() || line.starts_with("```") || SEPARATOR_RE.is_match(line) {
        return None;
    }

    // A raw five-way split wins; `| a | b | c | d | e |` is retried without the outer pipes
    let parts = match split_fields(line) {
        Some(parts) => parts,
        None => split_fields(line.strip_prefix('|')?.strip_suffix('|')?)?,
    };

    if is_header(&parts) {
        return None;
    }

    Some(TestCaseRecord {
        id: non_empty(parts[0]),
        title: parts[1].to_string(),
        test_type: non_empty(parts[2]),
        steps: parts[3].to_string(),
        expected_result: non_empty(parts[4]),
    })
}

/// Parse the whole AI response
pub fn parse_candidate_rows(response: &str) -> ParsedCandidates {
    let mut parsed = ParsedCandidates::default();

    for line in response.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_candidate_line(line) {
            Some(record) => parsed.records.push(record),
            None => parsed.skipped += 1,
        }
    }

    parsed
}

/// Parse candidates saved as JSON (a `[...]` array, optionally in a ```json block)
pub fn parse_candidate_json(content: &str) -> Result<Vec<TestCaseRecord>> {
    let json_str = extract_json(content)?;
    let records: Vec<TestCaseRecord> = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("candidate JSON parse error: {}", e)))?;
    Ok(records)
}

/// Locate the record array in a saved candidate file
///
/// The array may sit inside a markdown code fence (with or without a
/// language tag) or be surrounded by other text; the outermost `[...]`
/// is returned.
pub fn extract_json(content: &str) -> Result<&str> {
    let body = fenced_body(content).unwrap_or(content);

    match (body.find('['), body.rfind(']')) {
        (Some(start), Some(end)) if start < end => Ok(&body[start..=end]),
        _ => Err(Error::Parse("no JSON array of test cases found".into())),
    }
}

/// Contents of the first fenced block, `None` when unterminated
fn fenced_body(content: &str) -> Option<&str> {
    let after_open = &content[content.find("```")? + 3..];
    let body = &after_open[after_open.find('\n')? + 1..];
    body.find("```").map(|close| &body[..close])
}

fn split_fields(line: &str) -> Option<Vec<&str>> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    (parts.len() == FIELD_COUNT).then_some(parts)
}

fn is_header(parts: &[&str]) -> bool {
    parts[0].eq_ignore_ascii_case("id") && parts[1].eq_ignore_ascii_case("title")
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
