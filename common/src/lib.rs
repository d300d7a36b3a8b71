//! Test case reconciliation core
//!
//! Shared, I/O-free logic: similarity scoring, manual vs. generated
//! matching, the generation prompt and the AI response parser.

pub mod types;
pub mod error;
pub mod similarity;
pub mod matcher;
pub mod parser;
pub mod prompts;
pub mod export;

pub use types::{
    MatchResult, MatchStatus, Report, ReportRow, ReportSummary, TestCaseRecord,
    CANDIDATE_HEADERS, REPORT_HEADERS,
};
pub use error::{Error, Result};
pub use similarity::similarity;
pub use matcher::{best_candidate, compare_test_cases, match_test_cases, MatchOptions, DEFAULT_THRESHOLD};
pub use parser::{extract_json, parse_candidate_json, parse_candidate_line, parse_candidate_rows, ParsedCandidates};
pub use prompts::{build_generation_prompt, GenerationSpec};
