use crate::convert::TextConverter;

/// Headwords in write order.
///
/// Sorted by their encoded form with ASCII letters lowercased, equal sort
/// keys fall back to the raw UTF-8 bytes.
pub fn order<'a, I>(keys: I, converter: &TextConverter) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut keyed: Vec<(Vec<u8>, &str)> = keys
        .into_iter()
        .map(|key| {
            let mut sort_key = converter.encode(key);
            sort_key.make_ascii_lowercase();
            (sort_key, key.as_str())
        })
        .collect();

    keyed.sort_unstable_by(|(a_key, a), (b_key, b)| {
        a_key.cmp(b_key).then_with(|| a.as_bytes().cmp(b.as_bytes()))
    });

    keyed.into_iter().map(|(_, key)| key).collect()
}
