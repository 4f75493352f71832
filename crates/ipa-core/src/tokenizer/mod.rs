//! Greedy longest-match segmentation over normalized text.

mod cache;
#[cfg(test)]
mod tests;

pub use cache::{TokenCache, DEFAULT_CACHE_CAPACITY};

use tracing::{debug, debug_span};

use crate::dict::PronunciationStore;
use crate::normalize::normalize;

/// Split `sentence` into dictionary words and single leftover characters.
///
/// The sentence is normalized first. At each position the longest prefix
/// found in `store` is taken; if none matches, one character is taken
/// instead. Concatenating the tokens yields `normalize(sentence)` exactly.
///
/// Worst case is O(n * k) lookups for n chars and a longest key of k chars.
pub fn tokenize(store: &PronunciationStore, sentence: &str) -> Vec<String> {
    let text = normalize(sentence);
    // Byte offset of every char boundary, including the end of the string.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let _span = debug_span!("tokenize", char_count).entered();

    let max_len = store.max_key_chars();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < char_count {
        let longest = (char_count - pos).min(max_len);
        let len = (1..=longest)
            .rev()
            .find(|&len| store.contains(&text[bounds[pos]..bounds[pos + len]]))
            .unwrap_or(1);
        tokens.push(text[bounds[pos]..bounds[pos + len]].to_string());
        pos += len;
    }

    debug!(token_count = tokens.len());
    tokens
}
