use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::convert::ConvertConfig;
use self::package::PackageConfig;

pub mod cache;
pub mod convert;
pub mod package;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertConfig,
    pub cache: CacheConfig,
    pub package: PackageConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            convert: ConvertConfig::new(),
            cache: CacheConfig::new(),
            package: PackageConfig::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
