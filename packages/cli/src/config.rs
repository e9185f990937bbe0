//! CLI configuration.
//!
//! Settings are resolved in order of precedence: command-line flag, then
//! environment variable (both handled by `clap`), then the TOML config
//! file, then built-in defaults.
//!
//! ```toml
//! [api]
//! base_url = "https://hotspot.example.org/api/v1"
//!
//! [storage]
//! data_dir = "/home/rider/.hotspot"
//! ```

use std::path::{Path, PathBuf};

use hotspot_client::DEFAULT_BASE_URL;
use serde::Deserialize;
use thiserror::Error;

/// Config file read from the working directory when `--config` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "hotspot.toml";

/// Directory holding saved spots when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = ".hotspot";

/// Errors loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`FileConfig`].
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Contents of the TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `[api]` table.
    pub api: ApiSection,
    /// `[storage]` table.
    pub storage: StorageSection,
}

/// `[api]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// API base URL including the version prefix.
    pub base_url: Option<String>,
}

/// `[storage]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory for saved spots.
    pub data_dir: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL.
    pub base_url: String,
    /// Directory for saved spots.
    pub data_dir: PathBuf,
}

impl FileConfig {
    /// Parses config file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `contents` is not valid.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config file.
    ///
    /// An explicitly requested file must exist. When `path` is `None` the
    /// default file is read if present and silently skipped otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = path.map_or_else(
            || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            |p| (p.to_path_buf(), true),
        );

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                log::debug!("Loaded config from {}", path.display());
                Self::parse(&path, &contents)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }
}

impl Config {
    /// Merges flag/environment overrides over the file config and defaults.
    #[must_use]
    pub fn resolve(file: FileConfig, base_url: Option<String>, data_dir: Option<PathBuf>) -> Self {
        Self {
            base_url: base_url
                .or(file.api.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            data_dir: data_dir
                .or(file.storage.data_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }
}
