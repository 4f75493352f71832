//! Translation engine: dictionary loading, cached tokenization and
//! token → IPA mapping.

mod policy;
mod sink;

pub use policy::{bracket_unknown, TransformError, TranslateError, UnknownPolicy};
pub use sink::{DiagnosticSink, NoopSink, TracingSink};

use std::sync::Arc;

use tracing::{debug, debug_span, info};

use crate::catalog::{self, Language, DEFAULT_LANGUAGES};
use crate::dict::{self, DictError, DictSource, DirSource, PronunciationStore};
use crate::normalize::normalize;
use crate::settings::Settings;
use crate::tokenizer::{tokenize, TokenCache, DEFAULT_CACHE_CAPACITY};
use policy::not_found_message;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Languages to load at construction. `None` loads [`DEFAULT_LANGUAGES`];
    /// an empty list loads nothing.
    pub languages: Option<Vec<String>>,
    pub cache: bool,
    pub cache_capacity: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            languages: None,
            cache: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

pub struct IpaEngine {
    source: Box<dyn DictSource>,
    store: PronunciationStore,
    loaded: Vec<&'static Language>,
    cache: Option<TokenCache>,
    sink: Arc<dyn DiagnosticSink>,
}

impl IpaEngine {
    /// Build an engine and load the requested languages in order.
    pub fn new(
        source: impl DictSource + 'static,
        options: EngineOptions,
    ) -> Result<Self, DictError> {
        let mut engine = Self {
            source: Box::new(source),
            store: PronunciationStore::new(),
            loaded: Vec::new(),
            cache: options
                .cache
                .then(|| TokenCache::new(options.cache_capacity)),
            sink: Arc::new(NoopSink),
        };

        match &options.languages {
            Some(codes) => {
                for code in codes {
                    engine.load(code)?;
                }
            }
            None => {
                for code in DEFAULT_LANGUAGES {
                    engine.load(code)?;
                }
            }
        }
        Ok(engine)
    }

    /// Build an engine reading `<resource_dir>/<code>.json` as configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, DictError> {
        let options = EngineOptions {
            languages: settings.dictionary.languages.clone(),
            cache: settings.tokenizer.cache,
            cache_capacity: settings.tokenizer.cache_capacity,
        };
        Self::new(DirSource::new(&settings.dictionary.resource_dir), options)
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Load a language and merge its entries over the current store.
    ///
    /// The resource is read in full before anything is merged, so a failed
    /// load leaves the engine unchanged.
    pub fn load(&mut self, code: &str) -> Result<&'static Language, DictError> {
        let lang =
            catalog::resolve(code).ok_or_else(|| DictError::UnsupportedLanguage(code.to_string()))?;
        let _span = debug_span!("load", lang = lang.code).entered();

        let entries = self.source.read(lang)?;
        let merged = self.store.merge(entries);
        if let Some(cache) = &self.cache {
            cache.clear();
        }
        if !self.loaded.iter().any(|l| l.code == lang.code) {
            self.loaded.push(lang);
        }

        info!(lang = lang.code, merged, total = self.store.len(), "dictionary loaded");
        Ok(lang)
    }

    pub fn loaded_languages(&self) -> &[&'static Language] {
        &self.loaded
    }

    pub fn store(&self) -> &PronunciationStore {
        &self.store
    }

    pub fn cache(&self) -> Option<&TokenCache> {
        self.cache.as_ref()
    }

    /// Segment a sentence into dictionary words, spaces and leftover chars.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let Some(cache) = &self.cache else {
            return tokenize(&self.store, sentence);
        };
        if let Some(tokens) = cache.get(sentence) {
            debug!("token cache hit");
            return tokens;
        }
        let tokens = tokenize(&self.store, sentence);
        cache.insert(sentence, tokens.clone());
        tokens
    }

    /// Map each token to its first pronunciation.
    ///
    /// Spaces are kept as `" "` fragments. Tokens without an entry are
    /// handled by `policy`.
    pub fn translate(
        &self,
        sentence: &str,
        policy: &UnknownPolicy<'_>,
    ) -> Result<Vec<String>, TranslateError> {
        let tokens = self.tokenize(sentence);
        let mut fragments = Vec::with_capacity(tokens.len());

        for token in tokens {
            if let Some(raw) = self.store.get(&token) {
                fragments.push(dict::primary(raw).to_string());
            } else if token == " " {
                fragments.push(token);
            } else {
                match policy {
                    UnknownPolicy::Drop => self.sink.warn(&not_found_message(&token)),
                    UnknownPolicy::KeepLiteral => fragments.push(token),
                    UnknownPolicy::Transform(transform) => {
                        let fragment = transform(token.as_str()).map_err(|source| {
                            TranslateError::Transform {
                                token: token.clone(),
                                source,
                            }
                        })?;
                        fragments.push(fragment);
                    }
                }
            }
        }
        Ok(fragments)
    }

    /// [`translate`](Self::translate) with the fragments joined into one string.
    pub fn transcribe(
        &self,
        sentence: &str,
        policy: &UnknownPolicy<'_>,
    ) -> Result<String, TranslateError> {
        Ok(self.translate(sentence, policy)?.concat())
    }

    /// All listed pronunciations of a single word, in dictionary order.
    pub fn pronunciations(&self, word: &str) -> Option<Vec<String>> {
        let raw = self.store.get(&normalize(word))?;
        Some(dict::alternatives(raw).into_iter().map(str::to_string).collect())
    }
}
