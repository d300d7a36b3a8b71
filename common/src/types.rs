//! Test case and report types
//!
//! Shared between the CLI and the library callers:
//! - TestCaseRecord: one row from the manual spreadsheet or the AI output
//! - MatchResult: one classified report entry
//! - Report: ordered match results plus summary helpers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single test case row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCaseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,

    pub steps: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<String>,
}

impl TestCaseRecord {
    pub fn new(title: impl Into<String>, steps: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: steps.into(),
            ..Default::default()
        }
    }
}

/// Report status column value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Matched,
    NewSuggestion,
    Unmatched,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "MATCHED",
            MatchStatus::NewSuggestion => "NEW_SUGGESTION",
            MatchStatus::Unmatched => "UNMATCHED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified entry of the comparison report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchResult {
    /// Manual case whose best candidate scored at or above the threshold
    #[serde(rename_all = "camelCase")]
    Matched {
        manual_title: String,
        candidate_title: String,
        candidate_steps: String,
        score: f64,
    },
    /// Candidate whose title was never claimed by a manual case
    #[serde(rename_all = "camelCase")]
    NewSuggestion {
        candidate_title: String,
        candidate_steps: String,
    },
    /// Manual case without an adequate candidate (opt-in)
    #[serde(rename_all = "camelCase")]
    Unmatched {
        manual_title: String,
        best_score: f64,
    },
}

impl MatchResult {
    pub fn status(&self) -> MatchStatus {
        match self {
            MatchResult::Matched { .. } => MatchStatus::Matched,
            MatchResult::NewSuggestion { .. } => MatchStatus::NewSuggestion,
            MatchResult::Unmatched { .. } => MatchStatus::Unmatched,
        }
    }

    /// Title shown in the report: the manual title for matched/unmatched
    /// entries, the candidate title for new suggestions
    pub fn title(&self) -> &str {
        match self {
            MatchResult::Matched { manual_title, .. } => manual_title,
            MatchResult::NewSuggestion { candidate_title, .. } => candidate_title,
            MatchResult::Unmatched { manual_title, .. } => manual_title,
        }
    }

    /// Steps taken from the candidate side (empty for unmatched entries)
    pub fn steps(&self) -> &str {
        match self {
            MatchResult::Matched { candidate_steps, .. } => candidate_steps,
            MatchResult::NewSuggestion { candidate_steps, .. } => candidate_steps,
            MatchResult::Unmatched { .. } => "",
        }
    }

    pub fn to_row(&self) -> ReportRow {
        ReportRow {
            title: self.title().to_string(),
            status: self.status(),
            steps: self.steps().to_string(),
        }
    }
}

/// Flattened report row as exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Test Case Title")]
    pub title: String,

    #[serde(rename = "Durum")]
    pub status: MatchStatus,

    #[serde(rename = "LLM Steps")]
    pub steps: String,
}

/// Column headers of the exported report
pub const REPORT_HEADERS: [&str; 3] = ["Test Case Title", "Durum", "LLM Steps"];

/// Column headers of the generated test case sheet
pub const CANDIDATE_HEADERS: [&str; 5] = ["ID", "Title", "Test Type", "Steps", "Expected Result"];

/// Counts over a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub manual_total: usize,
    pub candidate_total: usize,
    pub matched: usize,
    pub new_suggestions: usize,
    pub unmatched: usize,
}

impl ReportSummary {
    /// Share of manual cases that found a match
    pub fn coverage(&self) -> f64 {
        if self.manual_total == 0 {
            0.0
        } else {
            self.matched as f64 / self.manual_total as f64
        }
    }
}

/// Ordered comparison report
///
/// Matched (and, when enabled, unmatched) entries in manual order come
/// first, followed by new suggestions in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub results: Vec<MatchResult>,
    #[serde(skip)]
    manual_total: usize,
    #[serde(skip)]
    candidate_total: usize,
}

impl Report {
    pub fn new(results: Vec<MatchResult>, manual_total: usize, candidate_total: usize) -> Self {
        Self {
            results,
            manual_total,
            candidate_total,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.results.iter()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.results.iter().map(MatchResult::to_row).collect()
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            manual_total: self.manual_total,
            candidate_total: self.candidate_total,
            ..Default::default()
        };
        for result in &self.results {
            match result.status() {
                MatchStatus::Matched => summary.matched += 1,
                MatchStatus::NewSuggestion => summary.new_suggestions += 1,
                MatchStatus::Unmatched => summary.unmatched += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
