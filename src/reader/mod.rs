//! Manual test case reader
//!
//! Loads the human-authored test case list. The first non-blank row of
//! the first sheet is the header; a `Title` column is required, the
//! other columns are optional.

mod columns;

use crate::error::{Result, TestCaseAiError};
use calamine::{open_workbook_auto, Data, Reader};
use columns::ColumnMap;
use std::path::Path;
use testcase_ai_common::TestCaseRecord;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read manual test cases from a spreadsheet, CSV or JSON file
pub fn read_manual_test_cases(path: &Path) -> Result<Vec<TestCaseRecord>> {
    if !path.exists() {
        return Err(TestCaseAiError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => read_json(path),
        "csv" => {
            let table = read_csv_table(path)?;
            records_from_table(&table, path)
        }
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => {
            let table = read_spreadsheet_table(path)?;
            records_from_table(&table, path)
        }
        _ => Err(TestCaseAiError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Convert a table (header + rows) into records
///
/// Fully blank rows are skipped; missing cells become empty strings.
pub fn records_from_table(table: &[Vec<String>], path: &Path) -> Result<Vec<TestCaseRecord>> {
    let mut rows = table.iter().skip_while(|row| is_blank(row));

    let header = rows.next().ok_or_else(|| TestCaseAiError::MissingColumn {
        column: "Title".into(),
        file: path.display().to_string(),
    })?;

    let columns = ColumnMap::from_header(header).ok_or_else(|| TestCaseAiError::MissingColumn {
        column: "Title".into(),
        file: path.display().to_string(),
    })?;

    Ok(rows
        .filter(|row| !is_blank(row))
        .map(|row| columns.record(row))
        .collect())
}

fn read_json(path: &Path) -> Result<Vec<TestCaseRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<TestCaseRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

fn read_csv_table(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut table = Vec::new();
    for record in reader.records() {
        let record = record?;
        table.push(record.iter().map(|field| field.trim().to_string()).collect());
    }
    Ok(table)
}

fn read_spreadsheet_table(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| TestCaseAiError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| TestCaseAiError::SpreadsheetRead(format!("{}: no sheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| TestCaseAiError::SpreadsheetRead(format!("{} [{}]: {}", path.display(), sheet_name, e)))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        // Whole numbers (e.g. numeric IDs) without a trailing ".0"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
