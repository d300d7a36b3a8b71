pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};
use testcase_ai_common::export::ReportMeta;
use testcase_ai_common::{Report, TestCaseRecord};

/// File name used when the output is a directory
pub const DEFAULT_REPORT_STEM: &str = "comparison_report";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_REPORT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_REPORT_STEM));
        let json_path = output.join(format!("{}.json", DEFAULT_REPORT_STEM));
        (excel_path, json_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_REPORT_STEM);
        (parent.join(format!("{}.xlsx", stem)), parent.join(format!("{}.json", stem)))
    }
}

/// Write the report; returns the created files
pub fn export_report(
    report: &Report,
    candidates: &[TestCaseRecord],
    meta: &ReportMeta,
    format: ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Excel => {
            let path = output_path_for_format(output, "xlsx");
            excel::write_report(report, candidates, meta, &path)?;
            vec![path]
        }
        ExportFormat::Json => {
            let path = output_path_for_format(output, "json");
            json::write_report(report, meta, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (excel_path, json_path) = output_paths_for_both(output);
            excel::write_report(report, candidates, meta, &excel_path)?;
            json::write_report(report, meta, &json_path)?;
            vec![excel_path, json_path]
        }
    };

    for path in &written {
        println!("✔ Report written: {}", path.display());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            output_path_for_format(dir.path(), "xlsx"),
            dir.path().join("comparison_report.xlsx")
        );
    }

    #[test]
    fn test_output_path_for_file() {
        assert_eq!(
            output_path_for_format(Path::new("out/report.xlsx"), "xlsx"),
            PathBuf::from("out/report.xlsx")
        );
    }

    #[test]
    fn test_output_paths_for_both_from_file() {
        let (excel, json) = output_paths_for_both(Path::new("out/report.xlsx"));
        assert_eq!(excel, PathBuf::from("out/report.xlsx"));
        assert_eq!(json, PathBuf::from("out/report.json"));
    }
}
