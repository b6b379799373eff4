use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Replacement for characters with no ASCII approximation
const UNKNOWN: char = '?';

/// Letters and punctuation that do not decompose into ASCII
fn fallback(c: char) -> Option<&'static str> {
    let replacement = match c {
        'ß' => "ss",
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'Ø' => "O",
        'ø' => "o",
        'Ł' => "L",
        'ł' => "l",
        'Đ' | 'Ð' => "D",
        'đ' | 'ð' => "d",
        'Þ' => "TH",
        'þ' => "th",
        'ı' => "i",
        'ĸ' => "k",
        '‘' | '’' | '‚' | '′' => "'",
        '“' | '”' | '„' | '″' => "\"",
        '‐' | '‑' | '‒' | '–' | '—' | '−' => "-",
        '«' => "<<",
        '»' => ">>",
        '…' => "...",
        '•' | '·' => "*",
        '×' => "x",
        '⁄' => "/",
        _ => return None,
    };
    Some(replacement)
}

/// Transliterate text to plain ASCII.
///
/// Accented letters lose their diacritics, a few letters without a
/// decomposition are spelled out and anything else becomes `?`.
pub fn deaccent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }

        for d in c.to_string().nfkd() {
            if d.is_ascii() {
                out.push(d);
            } else if is_combining_mark(d) {
                continue;
            } else if let Some(replacement) = fallback(d) {
                out.push_str(replacement);
            } else {
                out.push(UNKNOWN);
            }
        }
    }

    out
}
