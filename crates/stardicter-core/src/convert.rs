use regex::Regex;
use stardicter_config::convert::ConvertConfig;

use crate::deaccent::deaccent;

/// Turns rendered text into the bytes stored in the package
#[derive(Debug, Clone)]
pub struct TextConverter {
    ascii: bool,
    striptags: Option<Regex>,
}

impl TextConverter {
    pub fn new(ascii: bool, notags: bool) -> Self {
        // non-greedy, markup may span lines
        let striptags = notags.then(|| Regex::new(r"(?s)<.*?>").expect("valid tag pattern"));
        Self { ascii, striptags }
    }

    pub fn from_config(config: &ConvertConfig) -> Self {
        Self::new(config.ascii, config.notags)
    }

    pub fn ascii(&self) -> bool {
        self.ascii
    }

    /// Drop markup when requested, keeps the text otherwise
    pub fn strip<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        match &self.striptags {
            Some(pattern) => pattern.replace_all(text, ""),
            None => std::borrow::Cow::Borrowed(text),
        }
    }

    /// Encode text in the output encoding without touching markup
    pub fn encode(&self, text: &str) -> Vec<u8> {
        if self.ascii {
            deaccent(text).into_bytes()
        } else {
            text.as_bytes().to_vec()
        }
    }

    /// Strip and encode, as used for keys and entries
    pub fn convert(&self, text: &str) -> Vec<u8> {
        self.encode(&self.strip(text))
    }
}
