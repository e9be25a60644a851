use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Defaults for the command-line options, read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    pub number: Option<i64>,
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub punctuations: Vec<String>,
}

pub fn default_language() -> String {
    "english".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            number: None,
            stop_words: Vec::new(),
            punctuations: Vec::new(),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("frequent");
        Ok(config_dir)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the file in the user's config
    /// directory is used when present and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Ok(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", config_path.display()))?;

        debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }
}
