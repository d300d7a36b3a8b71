use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestCaseAiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0} (use .xlsx, .xlsm, .xls, .ods, .csv or .json)")]
    UnsupportedFormat(String),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(String),

    #[error("Required column '{column}' not found in {file}")]
    MissingColumn { column: String, file: String },

    #[error("Threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("AI call failed: {0}")]
    ApiCall(String),

    #[error("AI CLI timed out after {0}s")]
    Timeout(u64),

    #[error("CLI execution error: {0}")]
    CliExecution(String),

    #[error("Excel generation error: {0}")]
    ExcelGeneration(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Common(#[from] testcase_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, TestCaseAiError>;

/// Validate a similarity threshold given on the command line or in the config
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(TestCaseAiError::InvalidThreshold(threshold))
    }
}
