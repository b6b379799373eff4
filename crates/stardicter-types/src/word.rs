use serde::{Deserialize, Serialize};

/// One translation record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Term in the source language
    pub headword: String,
    /// Term in the target language
    pub translation: String,
    /// Space separated tags, e.g. `n: [neprav.]`
    #[serde(default)]
    pub wtype: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub author: String,
}

impl Word {
    pub fn new(headword: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            translation: translation.into(),
            ..Self::default()
        }
    }

    pub fn with_wtype(mut self, wtype: impl Into<String>) -> Self {
        self.wtype = wtype.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Parse a tab delimited line: `headword\ttranslation\twtype\tnote\tauthor`.
    ///
    /// Everything after the translation is optional. Returns `None` when the
    /// line has no translation column.
    pub fn from_tab_line(line: &str) -> Option<Self> {
        let mut fields = line.split('\t').map(str::trim);

        let headword = fields.next()?;
        let translation = fields.next()?;

        Some(Self {
            headword: headword.to_string(),
            translation: translation.to_string(),
            wtype: fields.next().unwrap_or_default().to_string(),
            note: fields.next().unwrap_or_default().to_string(),
            author: fields.next().unwrap_or_default().to_string(),
        })
    }

    /// Both sides present, so the word can be stored in a dictionary
    pub fn is_complete(&self) -> bool {
        !self.headword.is_empty() && !self.translation.is_empty()
    }

    /// Word for the opposite direction
    pub fn reverse(&self) -> Self {
        Self {
            headword: self.translation.clone(),
            translation: self.headword.clone(),
            wtype: self.wtype.clone(),
            note: self.note.clone(),
            author: self.author.clone(),
        }
    }

    /// Single display line in Pango markup, newline terminated
    pub fn format(&self) -> String {
        let mut result = escape_markup(&self.translation);

        if !self.wtype.is_empty() {
            result.push_str(" <i>");
            result.push_str(&escape_markup(&self.wtype));
            result.push_str("</i>");
        }

        if !self.note.is_empty() {
            result.push_str(" [");
            result.push_str(&escape_markup(&self.note));
            result.push(']');
        }

        result.push('\n');
        result
    }
}

fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
