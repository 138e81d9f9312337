//! Configuration file loading for covenant.
//!
//! Reads `covenant.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or
//! incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_WHITELIST_PATTERNS;

/// Top-level covenant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Largest accepted source unit, in bytes.
    #[serde(default = "default_max_source_size")]
    pub max_source_size: usize,
    /// Deepest tree nesting the walker will descend into.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Substrings that suppress external-checker messages about
    /// sandbox-injected names.
    #[serde(default = "default_whitelist_patterns")]
    pub whitelist_patterns: Vec<String>,
}

fn default_max_source_size() -> usize {
    1_000_000 // 1MB
}

fn default_max_depth() -> usize {
    1024
}

fn default_whitelist_patterns() -> Vec<String> {
    DEFAULT_WHITELIST_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_source_size: default_max_source_size(),
            max_depth: default_max_depth(),
            whitelist_patterns: default_whitelist_patterns(),
        }
    }
}

impl LintConfig {
    /// Load configuration from a `covenant.json` file.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "covenant: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
