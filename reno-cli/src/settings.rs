//! Settings file for the estimator CLI.
//!
//! The file is TOML and every key is optional:
//!
//! ```toml
//! [estimator]
//! min_home_value = 50000
//! min_yearly_income = 8000
//! ```

use std::path::{Path, PathBuf};

use reno_core::{ConfigError, EstimatorConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid estimator settings: {0}")]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub estimator: EstimatorConfig,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.estimator.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        debug!(path = %path.display(), "loading settings");
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Reads settings from `path` when given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
