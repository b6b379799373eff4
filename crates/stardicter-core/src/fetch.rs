use std::fs;
use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;
use flate2::read::GzDecoder;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown charset: {0}")]
    UnknownCharset(String),
}

/// Download `url` and decode it as text
pub async fn fetch_url(
    client: &reqwest::Client,
    url: &str,
    gzip: bool,
    charset: &str,
) -> Result<String, FetchError> {
    tracing::info!("Downloading {url}");

    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    tracing::debug!("Downloaded {} bytes from {url}", bytes.len());
    decode(&bytes, gzip, charset)
}

/// Read a local source file, gzip is detected from the `.gz` suffix
pub fn read_file(path: &Path, charset: &str) -> Result<String, FetchError> {
    tracing::info!("Reading source from file: {}", path.display());

    let bytes = fs::read(path)?;
    let gzip = path.extension().is_some_and(|ext| ext == "gz");
    decode(&bytes, gzip, charset)
}

/// Unwrap the transport container and decode the text
pub fn decode(bytes: &[u8], gzip: bool, charset: &str) -> Result<String, FetchError> {
    let encoding = Encoding::for_label(charset.as_bytes())
        .ok_or_else(|| FetchError::UnknownCharset(charset.to_string()))?;

    let mut raw = Vec::new();
    let bytes = if gzip {
        GzDecoder::new(bytes).read_to_end(&mut raw)?;
        raw.as_slice()
    } else {
        bytes
    };

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!("Source data contains invalid {charset} sequences, replaced");
    }

    Ok(text.into_owned())
}

/// Encode text back into the source charset
pub fn encode(text: &str, charset: &str) -> Result<Vec<u8>, FetchError> {
    let encoding = Encoding::for_label(charset.as_bytes())
        .ok_or_else(|| FetchError::UnknownCharset(charset.to_string()))?;
    let (bytes, _, _) = encoding.encode(text);
    Ok(bytes.into_owned())
}
