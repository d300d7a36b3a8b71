//! AI CLI generator
//!
//! Sends the generation prompt to the selected AI CLI in one-shot mode
//! and parses the pipe-delimited answer.

use super::cache::{request_key, CacheFile};
use super::CandidateGenerator;
use crate::ai_provider::AiProvider;
use crate::error::{Result, TestCaseAiError};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use testcase_ai_common::{build_generation_prompt, parse_candidate_rows, GenerationSpec, TestCaseRecord};
use tokio::process::Command;

/// Generator backed by an AI command line tool
#[derive(Debug, Clone)]
pub struct CliGenerator {
    provider: AiProvider,
    model: Option<String>,
    timeout: Duration,
    cache_dir: Option<PathBuf>,
    verbose: bool,
}

impl CliGenerator {
    pub fn new(provider: AiProvider) -> Self {
        Self {
            provider,
            model: None,
            timeout: Duration::from_secs(120),
            cache_dir: None,
            verbose: false,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reuse and store answers in the cache file of `dir`
    pub fn with_cache(mut self, dir: Option<PathBuf>) -> Self {
        self.cache_dir = dir;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    async fn fetch_response(&self, spec: &GenerationSpec, prompt: &str) -> Result<String> {
        let key = request_key(self.provider.command_name(), self.model.as_deref(), prompt);

        if let Some(dir) = &self.cache_dir {
            let cache = CacheFile::load(dir);
            if let Some(entry) = cache.get(&key) {
                if self.verbose {
                    println!("  Cache hit ({}, {})", entry.project_name, entry.created_at);
                }
                return Ok(entry.response.clone());
            }
        }

        let response = self.run_cli(prompt).await?;

        if let Some(dir) = &self.cache_dir {
            let mut cache = CacheFile::load(dir);
            cache.insert(key, spec.project_name.clone(), response.clone());
            if let Err(e) = cache.save(dir) {
                eprintln!("Warning: failed to save cache: {}", e);
            }
        }

        Ok(response)
    }

    async fn run_cli(&self, prompt: &str) -> Result<String> {
        let command = self.provider.command_name();
        let args = self.provider.prompt_args(prompt, self.model.as_deref());

        // Windows resolves .cmd shims only through cmd /c
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/c").arg(command).args(&args);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new(command);
            cmd.args(&args);
            cmd
        };

        cmd.kill_on_drop(true);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Waiting for {}", command));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let output = tokio::time::timeout(self.timeout, cmd.output()).await;
        spinner.finish_and_clear();

        let output = output
            .map_err(|_| TestCaseAiError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| TestCaseAiError::ApiCall(format!("{} CLI could not be started: {}", command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TestCaseAiError::ApiCall(format!(
                "{} CLI failed (code {:?}): {}",
                command,
                output.status.code(),
                stderr.trim()
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout).to_string();

        if self.verbose {
            let preview: String = response.chars().take(500).collect();
            println!("  Response: {}", preview);
        }

        Ok(response)
    }
}

impl CandidateGenerator for CliGenerator {
    async fn generate(&self, spec: &GenerationSpec) -> Result<Vec<TestCaseRecord>> {
        let prompt = build_generation_prompt(spec);

        if self.verbose {
            println!("  Prompt length: {} chars", prompt.len());
        }

        let response = self.fetch_response(spec, &prompt).await?;
        let parsed = parse_candidate_rows(&response);

        if self.verbose {
            println!(
                "  Parsed {} rows, skipped {} lines",
                parsed.records.len(),
                parsed.skipped
            );
        }

        Ok(parsed.records)
    }
}
