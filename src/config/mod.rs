use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "status.toml";
const CONFIG_DIR: &str = ".jarvisctl";

fn default_program() -> String {
    "jarvisctl".to_string()
}

fn default_args() -> Vec<String> {
    vec!["list".to_string()]
}

/// Listing command whose output is summarized.
///
/// ```toml
/// [source]
/// program = "jarvisctl"
/// args = ["list"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct StatusConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

impl StatusConfig {
    /// Search upward from `start` for a `.jarvisctl/status.toml` file and load it.
    /// Returns the default config if no file is found.
    pub fn load(start: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start) {
            Some(path) => Ok((Self::load_file(&path)?, Some(path))),
            None => Ok((StatusConfig::default(), None)),
        }
    }

    /// Load an explicitly named config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_DIR).join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}
