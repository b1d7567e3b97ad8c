//! Application configuration
//!
//! Loaded from `~/.config/notify-hub/config.json`; every field has a
//! default so a missing file just means "all built-in channels, journal
//! on".

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notification::journal::Journal;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Built-in channels to enable, in registration order.
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,

    /// Whether deliveries are journaled to a JSONL file.
    #[serde(default = "default_journal")]
    pub journal: bool,

    /// Journal file override; defaults next to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_path: Option<PathBuf>,
}

fn default_channels() -> Vec<String> {
    vec!["email".to_string(), "sms".to_string(), "push".to_string()]
}

fn default_journal() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            journal: default_journal(),
            journal_path: None,
        }
    }
}

impl Config {
    /// Config file location under the user config dir.
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("notify-hub")
            .join("config.json")
    }

    /// Load from the default location; absent file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Config::path())
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Effective journal path (override or default).
    pub fn journal_path(&self) -> PathBuf {
        self.journal_path
            .clone()
            .unwrap_or_else(Journal::default_path)
    }
}
