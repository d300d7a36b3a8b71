//! Candidate test case generators
//!
//! The comparison pipeline takes any `CandidateGenerator`; the CLI uses
//! `CliGenerator` (AI CLI) or `FileCandidates` (saved output).

pub mod cache;
mod cli_runner;

pub use cache::CacheFile;
pub use cli_runner::CliGenerator;

use crate::error::{Result, TestCaseAiError};
use std::path::{Path, PathBuf};
use testcase_ai_common::{parse_candidate_json, parse_candidate_rows, GenerationSpec, TestCaseRecord};

/// Source of generated test cases
#[allow(async_fn_in_trait)]
pub trait CandidateGenerator {
    /// Produce candidates for the target system described by `spec`
    ///
    /// An answer without usable rows is an empty list, not an error.
    async fn generate(&self, spec: &GenerationSpec) -> Result<Vec<TestCaseRecord>>;
}

/// Candidates saved by an earlier `generate` run
///
/// Accepts a JSON array of records or raw pipe-delimited AI output.
#[derive(Debug, Clone)]
pub struct FileCandidates {
    path: PathBuf,
}

impl FileCandidates {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<TestCaseRecord>> {
        if !self.path.exists() {
            return Err(TestCaseAiError::FileNotFound(self.path.display().to_string()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let is_json = self
            .path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Ok(parse_candidate_json(&content)?)
        } else {
            Ok(parse_candidate_rows(&content).records)
        }
    }
}

impl CandidateGenerator for FileCandidates {
    async fn generate(&self, _spec: &GenerationSpec) -> Result<Vec<TestCaseRecord>> {
        self.load()
    }
}

/// Save candidates as pretty JSON (readable by `FileCandidates`)
pub fn save_candidates(path: &Path, candidates: &[TestCaseRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(candidates)?;
    std::fs::write(path, json)?;
    Ok(())
}
