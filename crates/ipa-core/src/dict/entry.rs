/// Split a raw pronunciation value into its alternatives.
///
/// Each alternative is trimmed of whitespace and then of surrounding `/`
/// delimiters. Empty alternatives are kept so indices line up with the
/// source text.
pub fn alternatives(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(|alt| alt.trim().trim_matches('/'))
        .collect()
}

/// The first listed alternative, which is the one used for transcription.
pub fn primary(raw: &str) -> &str {
    let first = raw.split(',').next().unwrap_or(raw);
    first.trim().trim_matches('/')
}
