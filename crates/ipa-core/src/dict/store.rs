use std::collections::HashMap;

/// Merged word → raw pronunciation mapping.
///
/// Entries are only ever added or overwritten, never removed.
#[derive(Debug, Default, Clone)]
pub struct PronunciationStore {
    entries: HashMap<String, String>,
    /// Longest key in chars; no match can be longer.
    max_key_chars: usize,
}

impl PronunciationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge entries into the store, overwriting existing keys.
    /// Returns the number of entries merged.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, String)>) -> usize {
        let mut merged = 0;
        for (word, pron) in entries {
            self.max_key_chars = self.max_key_chars.max(word.chars().count());
            self.entries.insert(word, pron);
            merged += 1;
        }
        merged
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PronunciationStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.merge(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
        store
    }
}
