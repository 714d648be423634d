//! Configuration
//!
//! Where the question corpus lives and which reference link accompanies
//! the analyzed codebase. Defaults work without any configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::DEFAULT_CORPUS_PATH;

/// Reference documentation for the analyzed codebase
pub const DEEPWIKI_BASE_URL: &str = "https://deepwiki.com/code-423n4/2025-12-rujira";

/// Environment variable overriding [`Config::corpus_path`]
pub const ENV_CORPUS_PATH: &str = "RUJIRA_QUESTIONS_PATH";

/// Environment variable overriding [`Config::deepwiki_base_url`]
pub const ENV_DEEPWIKI_URL: &str = "RUJIRA_DEEPWIKI_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the JSON question corpus
    pub corpus_path: PathBuf,
    /// Reference link for the analyzed codebase
    pub deepwiki_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            deepwiki_base_url: DEEPWIKI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = value(ENV_CORPUS_PATH) {
            config.corpus_path = PathBuf::from(path);
        }
        if let Some(url) = value(ENV_DEEPWIKI_URL) {
            config.deepwiki_base_url = url;
        }
        config
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}
