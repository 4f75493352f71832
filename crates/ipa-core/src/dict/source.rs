use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{parse_dictionary_json, DictError, DictSource};
use crate::catalog::Language;

/// Reads `<dir>/<code>.json` for each language.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, lang: &Language) -> PathBuf {
        self.dir.join(format!("{}.json", lang.code))
    }
}

impl DictSource for DirSource {
    fn read(&self, lang: &Language) -> Result<HashMap<String, String>, DictError> {
        let path = self.path_for(lang);
        debug!(path = %path.display(), "reading dictionary");
        let text = fs::read_to_string(&path).map_err(|source| DictError::Io { path, source })?;
        parse_dictionary_json(lang.code, &text)
    }
}

/// In-memory dictionaries keyed by canonical language code.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    dicts: HashMap<String, HashMap<String, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the dictionary for `code`.
    pub fn with<K, V>(mut self, code: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(code, entries);
        self
    }

    pub fn insert<K, V>(&mut self, code: &str, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.dicts.insert(code.to_string(), map);
    }
}

impl DictSource for MemorySource {
    fn read(&self, lang: &Language) -> Result<HashMap<String, String>, DictError> {
        self.dicts
            .get(lang.code)
            .cloned()
            .ok_or_else(|| DictError::Missing(lang.code.to_string()))
    }
}
