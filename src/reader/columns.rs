//! Header to field mapping

use testcase_ai_common::TestCaseRecord;

const TITLE_ALIASES: &[&str] = &["title", "test case title", "test case", "name"];
const STEPS_ALIASES: &[&str] = &["steps", "test steps"];
const ID_ALIASES: &[&str] = &["id", "test case id"];
const TYPE_ALIASES: &[&str] = &["test type", "type"];
const EXPECTED_ALIASES: &[&str] = &["expected result", "expected"];

/// Column indices of the known fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    title: usize,
    steps: Option<usize>,
    id: Option<usize>,
    test_type: Option<usize>,
    expected_result: Option<usize>,
}

impl ColumnMap {
    /// `None` when no title column exists
    pub(crate) fn from_header(header: &[String]) -> Option<Self> {
        Some(Self {
            title: find_column(header, TITLE_ALIASES)?,
            steps: find_column(header, STEPS_ALIASES),
            id: find_column(header, ID_ALIASES),
            test_type: find_column(header, TYPE_ALIASES),
            expected_result: find_column(header, EXPECTED_ALIASES),
        })
    }

    pub(crate) fn record(&self, row: &[String]) -> TestCaseRecord {
        TestCaseRecord {
            id: self.id.and_then(|i| optional_cell(row, i)),
            title: cell(row, self.title),
            test_type: self.test_type.and_then(|i| optional_cell(row, i)),
            steps: self.steps.map(|i| cell(row, i)).unwrap_or_default(),
            expected_result: self.expected_result.and_then(|i| optional_cell(row, i)),
        }
    }
}

/// First column matching the aliases in alias order, case-insensitive
fn find_column(header: &[String], aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| {
        header
            .iter()
            .position(|h| h.trim().to_lowercase() == *alias)
    })
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}

fn optional_cell(row: &[String], idx: usize) -> Option<String> {
    let value = cell(row, idx);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
