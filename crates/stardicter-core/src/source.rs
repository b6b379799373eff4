use async_trait::async_trait;
use stardicter_types::Word;

use crate::fetch::{self, FetchError};

/// Data returned by a source that has nothing to download
pub const SAMPLE_DATA: &str = "word\ttranslation\ttype\tnote\tauthor";

/// One source word list format.
///
/// Implementations describe where the list comes from and override the
/// hooks that differ from the plain tab separated layout.
#[async_trait]
pub trait Source: Send + Sync {
    /// Dictionary name shown to users
    fn name(&self) -> &str;

    /// Name written into the package for one direction
    fn display_name(&self, _forward: bool) -> String {
        self.name().to_string()
    }

    /// Language code of headwords
    fn source_lang(&self) -> &str;

    /// Language code of translations
    fn target_lang(&self) -> &str;

    /// Project homepage
    fn url(&self) -> Option<&str> {
        None
    }

    fn license(&self) -> &str {
        ""
    }

    /// Prepended to package file names
    fn file_prefix(&self) -> &str {
        ""
    }

    /// Whether the reverse dictionary is built
    fn bidirectional(&self) -> bool {
        true
    }

    fn download_url(&self) -> Option<&str> {
        None
    }

    fn download_charset(&self) -> &str {
        "utf-8"
    }

    fn download_gzip(&self) -> bool {
        false
    }

    /// Lines taking part in the checksum, volatile lines can be excluded
    fn is_data_line(&self, _line: &str) -> bool {
        true
    }

    /// Lines holding the dictionary description instead of words
    fn is_header_line(&self, line: &str) -> bool {
        line.starts_with('#')
    }

    /// Words defined on one data line, empty when the line is malformed
    fn parse_line(&self, line: &str) -> Vec<Word> {
        Word::from_tab_line(line).into_iter().collect()
    }

    /// Fetch the raw word list
    async fn download(&self, client: &reqwest::Client) -> Result<String, FetchError> {
        match self.download_url() {
            Some(url) => {
                fetch::fetch_url(client, url, self.download_gzip(), self.download_charset()).await
            }
            None => Ok(SAMPLE_DATA.to_string()),
        }
    }
}

/// Plain tab separated list without a download location
pub struct GenericSource {
    source: String,
    target: String,
}

impl GenericSource {
    pub fn new() -> Self {
        Self {
            source: "aa".to_string(),
            target: "bb".to_string(),
        }
    }

    pub fn with_languages(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Default for GenericSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for GenericSource {
    fn name(&self) -> &str {
        "Generic"
    }

    fn source_lang(&self) -> &str {
        &self.source
    }

    fn target_lang(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hooks() {
        let source = GenericSource::new();
        assert!(source.is_header_line("# comment"));
        assert!(!source.is_header_line(" # indented"));
        assert!(source.is_data_line("# comment"));
        assert!(source.bidirectional());
    }

    #[test]
    fn default_parse_yields_at_most_one_word() {
        let source = GenericSource::new();
        assert_eq!(source.parse_line("dog\tpes").len(), 1);
        assert!(source.parse_line("garbage").is_empty());
    }

    #[tokio::test]
    async fn download_without_url_returns_sample() {
        let source = GenericSource::new();
        let data = source.download(&reqwest::Client::new()).await.unwrap();
        assert_eq!(data, SAMPLE_DATA);
    }
}
