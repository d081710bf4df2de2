//! Search Configuration
//!
//! Tunables shared by the suggestion scorer, the lookup pipeline and the
//! search-bar session. Values can be loaded from a JSON file; missing keys
//! fall back to the defaults below.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search is dispatched.
    pub debounce_ms: u64,
    /// Upper bound (K) on the number of type-ahead suggestions.
    pub max_suggestions: usize,
    /// Wall-clock budget for the remote fetch + filter.
    pub remote_timeout_ms: u64,
    /// Number of distinct recent search terms remembered.
    pub history_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            remote_timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Reads a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&raw)?;
        tracing::info!("Loaded search config from {}", path.display());
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}
