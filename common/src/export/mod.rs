//! Report export core shared by the CLI and library callers.

#[cfg(feature = "excel")]
pub mod excel_core;

use serde::{Deserialize, Serialize};

/// Context printed alongside the report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub project_name: String,
    pub threshold: f64,
    /// RFC 3339 timestamp
    pub generated_at: String,
}
