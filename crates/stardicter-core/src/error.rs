use std::path::PathBuf;

use crate::fetch::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum StardictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to obtain source data: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to serialize checksum cache: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checksum cache {0} is locked by another process")]
    CacheLocked(PathBuf),

    #[error("Dictionary data exceeds {limit} bytes at key {key:?}")]
    TooLarge { key: String, limit: u64 },
}

pub type Result<T> = std::result::Result<T, StardictError>;
