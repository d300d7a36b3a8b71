//! Report export tests

use calamine::{open_workbook_auto, Data, Reader};
use tempfile::tempdir;
use testcase_ai_common::export::ReportMeta;
use testcase_ai_common::{compare_test_cases, TestCaseRecord};
use testcase_ai_rust::cli::ExportFormat;
use testcase_ai_rust::export::export_report;

fn sample() -> (testcase_ai_common::Report, Vec<TestCaseRecord>) {
    let manual = vec![
        TestCaseRecord::new("Login with valid password", "Enter credentials"),
        TestCaseRecord::new("Checkout flow", "Pay"),
    ];
    let candidates = vec![
        TestCaseRecord::new("Login with valid credentials", "Open login page; submit"),
        TestCaseRecord::new("Search returns results", "Type a query"),
    ];
    let report = compare_test_cases(&manual, &candidates, 0.5);
    (report, candidates)
}

fn meta() -> ReportMeta {
    ReportMeta {
        project_name: "Shop".to_string(),
        threshold: 0.5,
        generated_at: "2026-01-01T00:00:00+00:00".to_string(),
    }
}

/// Excel output into a directory
#[test]
fn test_export_excel_to_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (report, candidates) = sample();

    let result = export_report(&report, &candidates, &meta(), ExportFormat::Excel, dir.path());
    assert!(result.is_ok(), "Excel export failed: {:?}", result.err());

    let written = result.unwrap();
    assert_eq!(written, vec![dir.path().join("comparison_report.xlsx")]);

    let bytes = std::fs::read(&written[0]).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx must be a zip archive");
}

fn sheet_rows(workbook: &mut calamine::Sheets<std::io::BufReader<std::fs::File>>, name: &str) -> Vec<Vec<String>> {
    let range = workbook.worksheet_range(name).expect("sheet missing");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// The workbook read back has the report, candidate and summary sheets
#[test]
fn test_export_excel_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.xlsx");
    let (report, candidates) = sample();

    let result = export_report(&report, &candidates, &meta(), ExportFormat::Excel, &path);
    assert!(result.is_ok(), "Excel export failed: {:?}", result.err());

    let mut workbook = open_workbook_auto(&path).expect("Failed to open workbook");
    assert_eq!(workbook.sheet_names(), vec!["Report", "LLM Test Cases", "Summary"]);

    let rows = sheet_rows(&mut workbook, "Report");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Test Case Title", "Durum", "LLM Steps"]);
    assert_eq!(rows[1], vec!["Login with valid password", "MATCHED", "Open login page; submit"]);
    assert_eq!(rows[2], vec!["Search returns results", "NEW_SUGGESTION", "Type a query"]);

    let rows = sheet_rows(&mut workbook, "LLM Test Cases");
    assert_eq!(rows[0], vec!["ID", "Title", "Test Type", "Steps", "Expected Result"]);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], "Login with valid credentials");
    assert_eq!(rows[2][3], "Type a query");

    let summary = workbook.worksheet_range("Summary").expect("sheet missing");
    assert_eq!(summary.get_value((0, 1)), Some(&Data::String("Shop".to_string())));
    assert_eq!(summary.get_value((2, 0)), Some(&Data::String("Threshold".to_string())));
    assert_eq!(summary.get_value((2, 1)), Some(&Data::Float(0.5)));
    assert_eq!(summary.get_value((5, 0)), Some(&Data::String("Matched".to_string())));
    assert_eq!(summary.get_value((5, 1)), Some(&Data::Float(1.0)));
    assert_eq!(summary.get_value((6, 1)), Some(&Data::Float(1.0)));
    assert_eq!(summary.get_value((8, 0)), Some(&Data::String("Coverage".to_string())));
    assert_eq!(summary.get_value((8, 1)), Some(&Data::Float(0.5)));
}

/// JSON output carries the summary and the rows
#[test]
fn test_export_json_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.json");
    let (report, candidates) = sample();

    let result = export_report(&report, &candidates, &meta(), ExportFormat::Json, &path);
    assert!(result.is_ok(), "JSON export failed: {:?}", result.err());

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["project"], "Shop");
    assert_eq!(value["threshold"], 0.5);
    assert_eq!(value["summary"]["matched"], 1);
    assert_eq!(value["summary"]["newSuggestions"], 1);

    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Test Case Title"], "Login with valid password");
    assert_eq!(rows[0]["Durum"], "MATCHED");
    assert_eq!(rows[0]["LLM Steps"], "Open login page; submit");
    assert_eq!(rows[1]["Test Case Title"], "Search returns results");
    assert_eq!(rows[1]["Durum"], "NEW_SUGGESTION");
}

/// Both formats share the stem of the given file name
#[test]
fn test_export_both() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("result.xlsx");
    let (report, candidates) = sample();

    let written = export_report(&report, &candidates, &meta(), ExportFormat::Both, &path)
        .expect("export failed");

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("result.xlsx").exists());
    assert!(dir.path().join("result.json").exists());
}

/// Missing parent directories are created
#[test]
fn test_export_creates_parent_dirs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("out").join("report.json");
    let (report, candidates) = sample();

    let result = export_report(&report, &candidates, &meta(), ExportFormat::Json, &path);
    assert!(result.is_ok(), "export failed: {:?}", result.err());
    assert!(path.exists());
}

/// An empty report still produces valid files
#[test]
fn test_export_empty_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = compare_test_cases(&[], &[], 0.5);

    let written = export_report(&report, &[], &meta(), ExportFormat::Both, dir.path())
        .expect("export failed");

    let json = std::fs::read_to_string(&written[1]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 0);
}
