use sha2::{Digest, Sha256};

use crate::cache::ChecksumCache;
use crate::error::Result;
use crate::source::Source;

/// Hex SHA-256 over every data line of `text`, line breaks excluded
pub fn compute(source: &dyn Source, text: &str) -> String {
    let mut hasher = Sha256::new();
    for line in text.lines().filter(|line| source.is_data_line(line)) {
        hasher.update(line.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Compares a source checksum with the one stored for the same output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDetector {
    key: String,
    checksum: String,
}

impl ChangeDetector {
    pub fn new(key: impl Into<String>, checksum: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            checksum: checksum.into(),
        }
    }

    /// Cache key for an output base filename
    pub fn cache_key(keyprefix: &str, filename: &str) -> String {
        format!("sha256-{keyprefix}{filename}")
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn was_changed(&self, cache: &ChecksumCache) -> bool {
        cache.get(&self.key) != Some(self.checksum.as_str())
    }

    /// Store the checksum, keeping other entries of the cache
    pub fn save(&self, cache: &mut ChecksumCache) -> Result<()> {
        cache.merge([(self.key.as_str(), self.checksum.as_str())]);
        cache.save()
    }
}
