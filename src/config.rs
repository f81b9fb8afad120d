//! Report configuration.
//!
//! The config file is located through a chain, first match wins:
//!
//! 1. `--config <path>`: explicit per-invocation override
//! 2. `TRAINING_REPORT_CONFIG` env var
//! 3. `~/.training-report/config.toml`
//!
//! An explicitly named file must exist. The default location is optional:
//! when it is missing, built-in defaults apply.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::{Language, OutputFormat};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TRAINING_REPORT_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Report configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Label language for text reports: `"en"` or `"ru"`.
    pub language: Language,

    /// Output format: `"text"` or `"json"`.
    pub format: OutputFormat,
}

impl Config {
    /// Load config, resolving its location through the lookup chain.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Self::load_from(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// The default config file path: `~/.training-report/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".training-report").join("config.toml"))
    }
}
