//! Configuration management for threadline

use crate::error::{Result, ThreadlineError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default cap on reply nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default search debounce delay in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default post character limit
pub const DEFAULT_CHARACTER_LIMIT: usize = 320;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reply thread settings
    pub thread: ThreadConfig,
    /// Comment search settings
    pub search: SearchConfig,
    /// Post composition settings
    pub compose: ComposeConfig,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ThreadlineError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Render as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the rest of the crate cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.thread.max_depth == 0 {
            return Err(ThreadlineError::Config(
                "thread.max_depth must be at least 1".to_string(),
            ));
        }
        if self.compose.character_limit == 0 {
            return Err(ThreadlineError::Config(
                "compose.character_limit must be at least 1".to_string(),
            ));
        }
        if self.compose.max_media == 0 {
            return Err(ThreadlineError::Config(
                "compose.max_media must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reply thread configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadConfig {
    /// Deepest nesting accepted when building a tree
    pub max_depth: usize,
    /// Spaces per nesting level when printing a thread
    pub indent_width: usize,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            indent_width: 2,
        }
    }
}

/// Comment search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed query runs
    pub debounce_ms: u64,
    /// Queries shorter than this (after trimming) are not run
    pub min_query_chars: usize,
}

impl SearchConfig {
    /// Debounce delay as a Duration
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: 1,
        }
    }
}

/// Post composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Maximum characters in a post body
    pub character_limit: usize,
    /// Media attachments allowed when not quoting another post
    pub max_media: usize,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            character_limit: DEFAULT_CHARACTER_LIMIT,
            max_media: 2,
        }
    }
}
