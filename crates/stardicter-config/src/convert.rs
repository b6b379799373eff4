use std::env;

use serde::{Deserialize, Serialize};

fn default_max_key_chars() -> usize {
    256
}

/// How dictionary text is converted on output
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Transliterate keys and entries to plain ASCII
    pub ascii: bool,
    /// Strip markup tags from entries
    pub notags: bool,
    /// Prefix for the checksum cache key
    pub keyprefix: String,
    /// Override source language code
    pub source: Option<String>,
    /// Override target language code
    pub target: Option<String>,
    /// Override whether the reverse dictionary is written
    pub bidirectional: Option<bool>,
    /// Headwords with this many characters or more are dropped
    #[serde(default = "default_max_key_chars")]
    pub max_key_chars: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            ascii: false,
            notags: false,
            keyprefix: String::new(),
            source: None,
            target: None,
            bidirectional: None,
            max_key_chars: default_max_key_chars(),
        }
    }
}

impl ConvertConfig {
    pub fn new() -> Self {
        let max_key_chars = env::var("STARDICTER_MAX_KEY_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_key_chars);

        let keyprefix = env::var("STARDICTER_KEYPREFIX").unwrap_or_default();

        Self {
            keyprefix,
            max_key_chars,
            ..Self::default()
        }
    }

    /// File name suffix for the selected conversions
    pub fn suffix(&self) -> String {
        let mut suffix = String::new();
        if self.ascii {
            suffix.push_str("-ascii");
        }
        if self.notags {
            suffix.push_str("-notags");
        }
        suffix
    }
}
