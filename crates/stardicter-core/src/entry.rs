use std::collections::VecDeque;

use stardicter_types::{Category, Classified, Word};

/// Label line preceding each typed group, Pango markup
pub fn category_label(marker: &str) -> String {
    format!("<span size=\"larger\" color=\"darkred\" weight=\"bold\">{marker}</span>\n")
}

/// Render all translations of one headword.
///
/// Words are grouped by category in priority order. Irregular words are
/// pushed to the front of their group, so later irregular words come
/// first.
pub fn format_entry(words: &[Word]) -> String {
    let mut buckets: [VecDeque<Word>; Category::ALL.len()] = Default::default();

    for word in words {
        let Classified {
            category,
            irregular,
            word,
        } = Classified::new(word);

        let bucket = &mut buckets[category.priority()];
        if irregular {
            bucket.push_front(word);
        } else {
            bucket.push_back(word);
        }
    }

    let mut result = String::new();
    for (category, bucket) in Category::ALL.iter().zip(&buckets) {
        if bucket.is_empty() {
            continue;
        }

        match category.marker() {
            Some(marker) => result.push_str(&category_label(marker)),
            None => result.push('\n'),
        }

        for word in bucket {
            result.push_str("    ");
            result.push_str(&word.format());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_noun() {
        let words = [Word::new("dog", "pes").with_wtype("n:")];
        assert_eq!(
            format_entry(&words),
            "<span size=\"larger\" color=\"darkred\" weight=\"bold\">n:</span>\n    pes\n"
        );
    }

    #[test]
    fn categories_in_priority_order() {
        let words = [
            Word::new("x", "a").with_wtype("num:"),
            Word::new("x", "b"),
            Word::new("x", "c").with_wtype("v:"),
            Word::new("x", "d").with_wtype("n:"),
        ];
        let expected = format!(
            "{}    d\n{}    c\n{}    a\n\n    b\n",
            category_label("n:"),
            category_label("v:"),
            category_label("num:"),
        );
        assert_eq!(format_entry(&words), expected);
    }

    #[test]
    fn untyped_keeps_remaining_tags() {
        let words = [Word::new("x", "a").with_wtype("hovor. [neprav.]")];
        assert_eq!(format_entry(&words), "\n    a <i>hovor. [neprav.]</i>\n");
    }

    #[test]
    fn word_with_two_markers_filed_once() {
        let words = [Word::new("x", "a").with_wtype("v: n:")];
        let expected = format!("{}    a <i>v:</i>\n", category_label("n:"));
        assert_eq!(format_entry(&words), expected);
    }

    #[test]
    fn irregular_words_first() {
        let words = [
            Word::new("x", "a").with_wtype("v:"),
            Word::new("x", "b").with_wtype("v: [neprav.]"),
            Word::new("x", "c").with_wtype("v:"),
            Word::new("x", "d").with_wtype("v: [neprav.]"),
        ];
        let expected = format!(
            "{}    d <i>[neprav.]</i>\n    b <i>[neprav.]</i>\n    a\n    c\n",
            category_label("v:"),
        );
        assert_eq!(format_entry(&words), expected);
    }

    #[test]
    fn formatting_does_not_touch_input() {
        let words = vec![Word::new("x", "a").with_wtype("n: [neprav.]")];
        let first = format_entry(&words);
        assert_eq!(words[0].wtype, "n: [neprav.]");
        assert_eq!(format_entry(&words), first);
    }
}
