//! AI response cache
//!
//! Keys raw AI answers by a SHA-256 of provider, model and prompt so the
//! same generation request is not sent twice.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".generation-cache.json";

/// Cache file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// Format version
    version: u32,
    /// Request hash → cached answer
    entries: HashMap<String, CacheEntry>,
}

/// Cached AI answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub project_name: String,
    /// Raw response text, parsed again on every hit
    pub response: String,
    /// RFC 3339
    pub created_at: String,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// Load the cache; unreadable or outdated files give an empty cache
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        match serde_json::from_reader::<_, CacheFile>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(_) => {
                eprintln!("Cache version mismatch, starting a new cache");
                Self::default()
            }
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Delete the cache file; `Ok(false)` when there was none
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, project_name: String, response: String) {
        self.entries.insert(
            key,
            CacheEntry {
                project_name,
                response,
                created_at: chrono::Local::now().to_rfc3339(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// Cache key for one AI request
pub fn request_key(provider: &str, model: Option<&str>, prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(provider.as_bytes());
    hasher.update([0u8]);
    hasher.update(model.unwrap_or("").as_bytes());
    hasher.update([0u8]);
    hasher.update(prompt.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_key_is_stable() {
        let a = request_key("claude", None, "prompt");
        let b = request_key("claude", None, "prompt");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_request_key_differs() {
        let base = request_key("claude", None, "prompt");
        assert_ne!(base, request_key("gemini", None, "prompt"));
        assert_ne!(base, request_key("claude", Some("sonnet"), "prompt"));
        assert_ne!(base, request_key("claude", None, "prompt 2"));
    }
}
