use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for kb-extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KbConfig {
    /// Directory scanned for `*.pdf` files (non-recursive)
    pub directory: PathBuf,
    /// Path of the JSON knowledge base to write
    pub output: PathBuf,
    /// Suppress the per-file "Processing:" lines
    pub quiet: bool,
}

impl KbConfig {
    /// Validates the configuration, ensuring the scan directory exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.directory.is_dir() {
            anyhow::bail!("Directory does not exist: {:?}", self.directory);
        }
        Ok(())
    }

    /// Attempts to load configuration from `kbx.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("kbx.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output: PathBuf::from("ai-consultant-web/data/knowledge_base.json"),
            quiet: false,
        }
    }
}
