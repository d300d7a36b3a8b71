//! JSON report output

use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use testcase_ai_common::export::ReportMeta;
use testcase_ai_common::{Report, ReportRow, ReportSummary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    project: &'a str,
    generated_at: &'a str,
    threshold: f64,
    summary: ReportSummary,
    rows: Vec<ReportRow>,
}

pub fn write_report(report: &Report, meta: &ReportMeta, output_path: &Path) -> Result<()> {
    let payload = JsonReport {
        project: &meta.project_name,
        generated_at: &meta.generated_at,
        threshold: meta.threshold,
        summary: report.summary(),
        rows: report.rows(),
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
