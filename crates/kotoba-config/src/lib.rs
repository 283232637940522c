use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::store::StoreConfig;

pub mod log;
pub mod store;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Defaults, then the optional JSON file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Apply `KOTOBA_*` overrides. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(filter) = lookup("KOTOBA_LOG") {
            self.log.filter = filter;
        }

        if let Some(json) = lookup("KOTOBA_LOG_JSON").and_then(|v| v.parse().ok()) {
            self.log.json = json;
        }

        if let Some(pretty) = lookup("KOTOBA_STORE_PRETTY").and_then(|v| v.parse().ok()) {
            self.store.pretty = pretty;
        }

        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}
