// src/domain/article/text.rs
//! Read-only text derivations over article content.
use indexmap::IndexMap;

/// Separators that may end an introduction.
const BREAKS: [char; 2] = [' ', '\n'];

/// Returns the longest prefix of `content` that fits in `max_characters`
/// without splitting a word.
///
/// Content that already fits is returned whole. Otherwise a window of
/// `max_characters + 1` characters is taken and cut back to its last space or
/// newline, so a word ending exactly at the limit is kept. A window without
/// any separator yields an empty string.
pub fn short_introduction(content: &str, max_characters: usize) -> &str {
    let window_end = match content.char_indices().nth(max_characters) {
        None => return content,
        Some((byte_idx, ch)) => byte_idx + ch.len_utf8(),
    };
    let window = &content[..window_end];
    window
        .rfind(BREAKS)
        .map_or("", |separator| &window[..separator])
}

/// Counts words case- and punctuation-insensitively and returns the `n` most
/// frequent ones, highest count first. Equal counts keep first-seen order.
pub fn most_common_words(content: &str, n: usize) -> IndexMap<String, usize> {
    let normalized: String = content
        .chars()
        .map(|ch| if ch.is_ascii_punctuation() { ' ' } else { ch })
        .collect::<String>()
        .to_lowercase();

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in normalized.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // stable: ties stay in first-occurrence order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, count)| (word.to_owned(), count))
        .collect()
}
