use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::error::{Result, StardictError};

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(10);
const LOCK_RETRIES: u32 = 500;

/// Persisted map of cache key to source checksum.
///
/// Entries are shared by every dictionary, so saving merges local changes
/// into whatever is on disk at that moment instead of overwriting it.
#[derive(Debug, Clone)]
pub struct ChecksumCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    pending: BTreeMap<String, String>,
}

impl ChecksumCache {
    /// Open the cache, a missing or corrupt file is an empty cache
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries,
            pending: BTreeMap::new(),
        }
    }

    pub fn load(path: &Path) -> BTreeMap<String, String> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Cannot read checksum cache {}: {e}", path.display());
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt checksum cache {}: {e}", path.display());
            BTreeMap::new()
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Record changes to be written by the next `save`
    pub fn merge<I, K, V>(&mut self, changes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in changes {
            let (key, value) = (key.into(), value.into());
            self.entries.insert(key.clone(), value.clone());
            self.pending.insert(key, value);
        }
    }

    /// Write pending changes on top of the current file contents
    pub fn save(&mut self) -> Result<()> {
        let _lock = CacheLock::acquire(&self.path)?;

        let mut merged = Self::load(&self.path);
        merged.append(&mut self.pending);

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(&merged)?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!("Saved {} checksums to {}", merged.len(), self.path.display());
        self.entries = merged;
        Ok(())
    }
}

/// Exclusive lock next to the cache file, removed on drop
struct CacheLock {
    path: PathBuf,
    _file: File,
}

impl CacheLock {
    fn acquire(cache: &Path) -> Result<Self> {
        let mut name = cache.as_os_str().to_owned();
        name.push(".lock");
        let path = PathBuf::from(name);

        for _ in 0..LOCK_RETRIES {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok(Self { path, _file: file }),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    thread::sleep(LOCK_RETRY_DELAY);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StardictError::CacheLocked(cache.to_path_buf()))
    }
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("Failed to remove cache lock {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ChecksumCache::open(dir.path().join("cache.json"));
        assert!(cache.get("anything").is_none());
    }

    #[test]
    fn corrupt_file_is_empty_and_gets_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let mut cache = ChecksumCache::open(&path);
        assert!(cache.get("key").is_none());

        cache.merge([("key", "abc")]);
        cache.save().unwrap();
        assert_eq!(ChecksumCache::open(&path).get("key"), Some("abc"));
    }

    #[test]
    fn save_keeps_unrelated_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut first = ChecksumCache::open(&path);
        let mut second = ChecksumCache::open(&path);

        first.merge([("a", "1")]);
        first.save().unwrap();
        second.merge([("b", "2")]);
        second.save().unwrap();

        let cache = ChecksumCache::open(&path);
        assert_eq!(cache.get("a"), Some("1"));
        assert_eq!(cache.get("b"), Some("2"));
        // second picked up the entry written by first
        assert_eq!(second.get("a"), Some("1"));
    }

    #[test]
    fn concurrent_saves_all_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = Arc::new(dir.path().join("cache.json"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let path = Arc::clone(&path);
                thread::spawn(move || {
                    let mut cache = ChecksumCache::open(path.as_path());
                    cache.merge([(format!("key-{i}"), format!("sum-{i}"))]);
                    cache.save().unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cache = ChecksumCache::open(path.as_path());
        for i in 0..8 {
            assert_eq!(cache.get(&format!("key-{i}")), Some(format!("sum-{i}").as_str()));
        }
        assert!(!dir.path().join("cache.json.lock").exists());
    }
}
