use serde::{Deserialize, Serialize};

use crate::word::Word;

/// Tag marking an irregular form, listed first within its category
pub const IRREGULAR_MARKER: &str = "[neprav.]";

/// Grammatical category of a translation.
///
/// Variants are declared in output priority order, so the derived `Ord`
/// is the order in which entries are rendered and markers are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Untyped,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Preposition,
        Category::Conjunction,
        Category::Interjection,
        Category::Numeral,
        Category::Untyped,
    ];

    /// Tag token in `wtype`, `None` for the catch-all
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Category::Noun => Some("n:"),
            Category::Verb => Some("v:"),
            Category::Adjective => Some("adj:"),
            Category::Adverb => Some("adv:"),
            Category::Preposition => Some("prep:"),
            Category::Conjunction => Some("conj:"),
            Category::Interjection => Some("interj:"),
            Category::Numeral => Some("num:"),
            Category::Untyped => None,
        }
    }

    pub fn priority(self) -> usize {
        self as usize
    }

    /// First category, in priority order, whose marker is among `tokens`
    pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Category {
        Self::ALL
            .into_iter()
            .find(|category| {
                category
                    .marker()
                    .is_some_and(|marker| tokens.iter().any(|t| t.as_ref() == marker))
            })
            .unwrap_or(Category::Untyped)
    }
}

/// Word split into its category and the tags left after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub category: Category,
    pub irregular: bool,
    /// Copy of the source word with the category marker removed from `wtype`
    pub word: Word,
}

impl Classified {
    pub fn new(word: &Word) -> Self {
        let mut tokens: Vec<&str> = word.wtype.split_whitespace().collect();
        let category = Category::classify(tokens.as_slice());

        let (irregular, wtype) = match category.marker() {
            Some(marker) => {
                if let Some(pos) = tokens.iter().position(|t| *t == marker) {
                    tokens.remove(pos);
                }
                (tokens.contains(&IRREGULAR_MARKER), tokens.join(" "))
            }
            // untyped words keep their tags untouched
            None => (false, word.wtype.clone()),
        };

        Self {
            category,
            irregular,
            word: Word {
                wtype,
                ..word.clone()
            },
        }
    }
}
