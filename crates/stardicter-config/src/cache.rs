use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".stardicter")
}

/// Where checksums of previously built dictionaries are kept
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        let path = env::var_os("STARDICTER_CACHE")
            .map(PathBuf::from)
            .unwrap_or_else(default_path);

        Self { path }
    }
}
