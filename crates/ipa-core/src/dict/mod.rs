//! Pronunciation dictionaries.
//!
//! `PronunciationStore` holds the merged word → raw pronunciation mapping.
//! `DictSource` implementations supply one flat JSON document per language.

mod entry;
mod source;
mod store;

pub use entry::{alternatives, primary};
pub use source::{DirSource, MemorySource};
pub use store::PronunciationStore;

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::catalog::Language;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("Language {0} is not supported.")]
    UnsupportedLanguage(String),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dictionary for {lang}: {source}")]
    Json {
        lang: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no dictionary resource for {0}")]
    Missing(String),
}

/// Supplies the raw entries of one language's dictionary resource.
pub trait DictSource: Send + Sync {
    fn read(&self, lang: &Language) -> Result<HashMap<String, String>, DictError>;
}

/// Parse a flat JSON object of `word: "/alt1/, /alt2/"` pairs.
///
/// Any value that is not a string makes the whole document invalid.
pub fn parse_dictionary_json(
    lang: &str,
    text: &str,
) -> Result<HashMap<String, String>, DictError> {
    serde_json::from_str(text).map_err(|source| DictError::Json {
        lang: lang.to_string(),
        source,
    })
}
