//! Report workbook generation (shared)
//!
//! Sheets:
//! - Report: Test Case Title / Durum / LLM Steps
//! - LLM Test Cases: every generated candidate
//! - Summary: counts and run context

use super::ReportMeta;
use crate::types::{MatchStatus, Report, TestCaseRecord, CANDIDATE_HEADERS, REPORT_HEADERS};
use rust_xlsxwriter::*;

const TITLE_COL_WIDTH: f64 = 48.0;
const STATUS_COL_WIDTH: f64 = 18.0;
const STEPS_COL_WIDTH: f64 = 80.0;

struct Formats {
    header: Format,
    text: Format,
    matched: Format,
    new_suggestion: Format,
    unmatched: Format,
    percent: Format,
}

impl Formats {
    fn new() -> Self {
        let text = Format::new()
            .set_align(FormatAlign::Top)
            .set_text_wrap()
            .set_border(FormatBorder::Hair)
            .set_border_color(Color::RGB(0xCCCCCC));

        let status = |rgb: u32| {
            Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::Top)
                .set_background_color(Color::RGB(rgb))
                .set_border(FormatBorder::Hair)
                .set_border_color(Color::RGB(0xCCCCCC))
        };

        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x305496))
                .set_border(FormatBorder::Thin),
            matched: status(0xC6EFCE),
            new_suggestion: status(0xFFEB9C),
            unmatched: status(0xFFC7CE),
            percent: Format::new().set_num_format("0.0%"),
            text,
        }
    }

    fn for_status(&self, status: MatchStatus) -> &Format {
        match status {
            MatchStatus::Matched => &self.matched,
            MatchStatus::NewSuggestion => &self.new_suggestion,
            MatchStatus::Unmatched => &self.unmatched,
        }
    }
}

/// Build the report workbook into a buffer
///
/// # Arguments
/// * `report` - comparison result
/// * `candidates` - generated test cases the report was built from
/// * `meta` - project name, threshold and timestamp for the summary sheet
pub fn generate_report_buffer(
    report: &Report,
    candidates: &[TestCaseRecord],
    meta: &ReportMeta,
) -> Result<Vec<u8>, String> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();

    write_report_sheet(workbook.add_worksheet(), report, &formats)
        .map_err(|e| format!("Report sheet error: {}", e))?;
    write_candidate_sheet(workbook.add_worksheet(), candidates, &formats)
        .map_err(|e| format!("LLM Test Cases sheet error: {}", e))?;
    write_summary_sheet(workbook.add_worksheet(), report, meta, &formats)
        .map_err(|e| format!("Summary sheet error: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel save error: {}", e))
}

fn write_header(worksheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_report_sheet(worksheet: &mut Worksheet, report: &Report, formats: &Formats) -> Result<(), XlsxError> {
    worksheet.set_name("Report")?;
    worksheet.set_column_width(0, TITLE_COL_WIDTH)?;
    worksheet.set_column_width(1, STATUS_COL_WIDTH)?;
    worksheet.set_column_width(2, STEPS_COL_WIDTH)?;
    write_header(worksheet, &REPORT_HEADERS, &formats.header)?;

    for (idx, row) in report.rows().iter().enumerate() {
        let r = idx as u32 + 1;
        worksheet.write_string_with_format(r, 0, &row.title, &formats.text)?;
        worksheet.write_string_with_format(r, 1, row.status.as_str(), formats.for_status(row.status))?;
        worksheet.write_string_with_format(r, 2, &row.steps, &formats.text)?;
    }

    if !report.is_empty() {
        worksheet.autofilter(0, 0, report.len() as u32, 2)?;
    }
    Ok(())
}

fn write_candidate_sheet(
    worksheet: &mut Worksheet,
    candidates: &[TestCaseRecord],
    formats: &Formats,
) -> Result<(), XlsxError> {
    worksheet.set_name("LLM Test Cases")?;
    for (col, width) in [10.0, TITLE_COL_WIDTH, 14.0, STEPS_COL_WIDTH, 40.0].iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    write_header(worksheet, &CANDIDATE_HEADERS, &formats.header)?;

    for (idx, record) in candidates.iter().enumerate() {
        let r = idx as u32 + 1;
        let values = [
            record.id.as_deref().unwrap_or(""),
            record.title.as_str(),
            record.test_type.as_deref().unwrap_or(""),
            record.steps.as_str(),
            record.expected_result.as_deref().unwrap_or(""),
        ];
        for (col, value) in values.iter().enumerate() {
            worksheet.write_string_with_format(r, col as u16, *value, &formats.text)?;
        }
    }
    Ok(())
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    report: &Report,
    meta: &ReportMeta,
    formats: &Formats,
) -> Result<(), XlsxError> {
    let summary = report.summary();

    worksheet.set_name("Summary")?;
    worksheet.set_column_width(0, 24.0)?;
    worksheet.set_column_width(1, 32.0)?;

    let text_rows = [
        ("Project", meta.project_name.as_str()),
        ("Generated At", meta.generated_at.as_str()),
    ];
    for (r, (label, value)) in text_rows.iter().enumerate() {
        worksheet.write_string_with_format(r as u32, 0, *label, &formats.header)?;
        worksheet.write_string(r as u32, 1, *value)?;
    }

    let number_rows = [
        ("Threshold", meta.threshold),
        ("Manual Test Cases", summary.manual_total as f64),
        ("LLM Test Cases", summary.candidate_total as f64),
        ("Matched", summary.matched as f64),
        ("New Suggestions", summary.new_suggestions as f64),
        ("Unmatched", summary.unmatched as f64),
    ];
    let offset = text_rows.len() as u32;
    for (i, (label, value)) in number_rows.iter().enumerate() {
        let r = offset + i as u32;
        worksheet.write_string_with_format(r, 0, *label, &formats.header)?;
        worksheet.write_number(r, 1, *value)?;
    }

    let r = offset + number_rows.len() as u32;
    worksheet.write_string_with_format(r, 0, "Coverage", &formats.header)?;
    worksheet.write_number_with_format(r, 1, summary.coverage(), &formats.percent)?;
    Ok(())
}
