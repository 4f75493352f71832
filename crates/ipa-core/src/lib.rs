//! Dictionary-driven IPA transcription.
//!
//! Text is normalized, segmented by greedy longest match against the loaded
//! pronunciation dictionaries, and each segment is replaced by its first
//! listed pronunciation.

pub mod catalog;
pub mod dict;
pub mod engine;
pub mod normalize;
pub mod settings;
pub mod tokenizer;
pub mod trace_init;

pub use catalog::{Language, DEFAULT_LANGUAGES, LANGUAGES};
pub use dict::{DictError, DictSource, DirSource, MemorySource, PronunciationStore};
pub use engine::{
    DiagnosticSink, EngineOptions, IpaEngine, NoopSink, TracingSink, TransformError,
    TranslateError, UnknownPolicy,
};
pub use normalize::normalize;
pub use tokenizer::{tokenize, TokenCache};
