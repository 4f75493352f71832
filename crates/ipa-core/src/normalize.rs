//! Input normalization applied before segmentation.

/// ASCII punctuation removed from input. The apostrophe is not included,
/// so contractions like "don't" survive as one word.
pub const PUNCTUATION: &str = r##"!"#$%&()*+,-./:;<=>?@[\]^_`{|}~"##;

fn is_punctuation(c: char) -> bool {
    c.is_ascii() && PUNCTUATION.contains(c)
}

/// Normalize a sentence for dictionary lookup.
///
/// Punctuation is deleted (not replaced), every other whitespace character
/// becomes a plain space, the text is lowercased and outer spaces are
/// trimmed. Runs of inner spaces are kept as-is.
pub fn normalize(sentence: &str) -> String {
    let cleaned: String = sentence
        .chars()
        .filter(|&c| !is_punctuation(c))
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    cleaned.to_lowercase().trim_matches(' ').to_string()
}
