//! Excel report output

use crate::error::{Result, TestCaseAiError};
use std::path::Path;
use testcase_ai_common::export::excel_core::generate_report_buffer;
use testcase_ai_common::export::ReportMeta;
use testcase_ai_common::{Report, TestCaseRecord};

pub fn write_report(
    report: &Report,
    candidates: &[TestCaseRecord],
    meta: &ReportMeta,
    output_path: &Path,
) -> Result<()> {
    let buffer = generate_report_buffer(report, candidates, meta).map_err(TestCaseAiError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| TestCaseAiError::ExcelGeneration(format!("{}: {}", output_path.display(), e)))?;
    Ok(())
}
