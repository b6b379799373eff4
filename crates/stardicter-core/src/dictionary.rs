use std::collections::HashMap;

use stardicter_types::Word;

use crate::source::Source;

/// Headword to its translations, for one direction
pub type Dictionary = HashMap<String, Vec<Word>>;

/// Result of parsing a whole word list
#[derive(Debug, Default, Clone)]
pub struct Dictionaries {
    pub forward: Dictionary,
    pub reverse: Dictionary,
    /// Text collected from header lines
    pub description: String,
}

/// Builds forward and reverse dictionaries from raw source text
pub struct Aggregator<'a> {
    source: &'a dyn Source,
    bidirectional: bool,
    max_key_chars: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(source: &'a dyn Source, bidirectional: bool, max_key_chars: usize) -> Self {
        Self {
            source,
            bidirectional,
            max_key_chars,
        }
    }

    fn fits(&self, key: &str) -> bool {
        key.chars().count() < self.max_key_chars
    }

    pub fn aggregate(&self, text: &str) -> Dictionaries {
        let mut result = Dictionaries::default();
        let mut skipped = 0usize;

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if self.source.is_header_line(line) {
                let mut chars = line.chars();
                chars.next();
                result.description.push_str(chars.as_str());
                result.description.push('\n');
                continue;
            }

            let words = self.source.parse_line(line);
            if words.is_empty() {
                tracing::trace!("Skipping unparsable line: {line:?}");
                skipped += 1;
            }

            for word in words {
                if !word.is_complete() {
                    tracing::trace!("Skipping untranslated word: {:?}", word.headword);
                    skipped += 1;
                    continue;
                }

                if self.bidirectional && self.fits(&word.translation) {
                    result
                        .reverse
                        .entry(word.translation.clone())
                        .or_default()
                        .push(word.reverse());
                }

                if self.fits(&word.headword) {
                    result
                        .forward
                        .entry(word.headword.clone())
                        .or_default()
                        .push(word);
                } else {
                    tracing::trace!("Skipping overlong headword: {:?}", word.headword);
                }
            }
        }

        // stable, equal translations keep their source order
        for words in result.forward.values_mut() {
            words.sort_by(|a, b| a.translation.cmp(&b.translation));
        }
        for words in result.reverse.values_mut() {
            words.sort_by(|a, b| a.translation.cmp(&b.translation));
        }

        tracing::debug!(
            "Aggregated {} forward and {} reverse headwords, skipped {skipped} entries",
            result.forward.len(),
            result.reverse.len(),
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::GenericSource;

    fn aggregate(text: &str, bidirectional: bool) -> Dictionaries {
        Aggregator::new(&GenericSource::new(), bidirectional, 256).aggregate(text)
    }

    #[test]
    fn collects_description_from_headers() {
        let result = aggregate("# First line\n#Second\ndog\tpes\n", true);
        assert_eq!(result.description, " First line\nSecond\n");
        assert_eq!(result.forward.len(), 1);
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let result = aggregate("\n   \ngarbage\n\tpes\ndog\t\ndog\tpes\n", true);
        assert_eq!(result.forward.len(), 1);
        assert_eq!(result.forward["dog"].len(), 1);
        assert_eq!(result.reverse.len(), 1);
    }

    #[test]
    fn reverse_only_when_bidirectional() {
        let result = aggregate("dog\tpes\n", false);
        assert!(result.reverse.is_empty());

        let result = aggregate("dog\tpes\n", true);
        assert_eq!(result.reverse["pes"][0].translation, "dog");
    }

    #[test]
    fn translations_sorted_stably() {
        let text = "dog\tpsisko\tb\ndog\tpes\tfirst\ndog\tpes\tsecond\ndog\tčokl\n";
        let result = aggregate(text, true);
        let order: Vec<(&str, &str)> = result.forward["dog"]
            .iter()
            .map(|w| (w.translation.as_str(), w.wtype.as_str()))
            .collect();
        assert_eq!(
            order,
            [("pes", "first"), ("pes", "second"), ("psisko", "b"), ("čokl", "")]
        );
    }

    #[test]
    fn length_guard_on_keys() {
        let ok = "a".repeat(255);
        let long = "a".repeat(256);
        let text = format!("{ok}\tx\n{long}\ty\nz\t{long}\n");
        let result = aggregate(&text, true);

        assert!(result.forward.contains_key(&ok));
        assert!(!result.forward.contains_key(&long));
        assert!(result.forward.contains_key("z"));
        assert!(!result.reverse.contains_key(&long));
        assert!(result.reverse.contains_key("y"));
    }

    #[test]
    fn length_guard_counts_characters() {
        let wide = "ř".repeat(255);
        let result = aggregate(&format!("{wide}\tx\n"), false);
        assert!(result.forward.contains_key(&wide));
    }

    #[test]
    fn length_guard_is_configurable() {
        let source = GenericSource::new();
        let result = Aggregator::new(&source, false, 4).aggregate("abc\tx\nabcd\ty\n");
        assert!(result.forward.contains_key("abc"));
        assert!(!result.forward.contains_key("abcd"));
    }
}
