use crate::error::{validate_threshold, Result, TestCaseAiError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use testcase_ai_common::DEFAULT_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Target system the test cases are generated for
    pub project_name: String,
    /// Model passed to the AI CLI (CLI default when unset)
    pub model: Option<String>,
    pub candidate_count: usize,
    pub threshold: f64,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: "Akakçe".into(),
            model: None,
            candidate_count: 15,
            threshold: DEFAULT_THRESHOLD,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TestCaseAiError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("testcase-ai").join("config.json"))
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        self.threshold = validate_threshold(threshold)?;
        Ok(())
    }

    pub fn set_candidate_count(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(TestCaseAiError::Config("candidate count must be at least 1".into()));
        }
        self.candidate_count = count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.candidate_count, 15);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"projectName": "ignored", "project_name": "Shop"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.project_name, "Shop");
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.model = Some("sonnet".into());
        config.set_threshold(0.7).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.model.as_deref(), Some("sonnet"));
        assert_eq!(loaded.threshold, 0.7);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        assert!(matches!(config.set_threshold(1.5), Err(TestCaseAiError::InvalidThreshold(_))));
        assert!(config.set_candidate_count(0).is_err());
        assert_eq!(config.threshold, 0.5);
    }
}
