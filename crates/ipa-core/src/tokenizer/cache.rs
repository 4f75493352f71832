use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use lru::LruCache;

/// Matches the memoization bound the tokenizer has always used.
pub const DEFAULT_CACHE_CAPACITY: usize = 65536;

/// Bounded LRU tokenization cache keyed by the exact raw sentence.
///
/// Must be cleared whenever the dictionary store changes. A capacity of
/// zero stores nothing.
pub struct TokenCache {
    capacity: usize,
    inner: Option<Mutex<LruCache<String, Vec<String>>>>,
}

impl TokenCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a sentence, marking it as most recently used.
    pub fn get(&self, sentence: &str) -> Option<Vec<String>> {
        let mut cache = self.inner.as_ref()?.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get(sentence).cloned()
    }

    pub fn insert(&self, sentence: &str, tokens: Vec<String>) {
        let Some(inner) = &self.inner else {
            return;
        };
        let mut cache = inner.lock().unwrap_or_else(PoisonError::into_inner);
        cache.put(sentence.to_string(), tokens);
    }

    pub fn clear(&self) {
        if let Some(inner) = &self.inner {
            inner.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| {
            inner.lock().unwrap_or_else(PoisonError::into_inner).len()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
