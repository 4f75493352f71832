//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::catalog;
use crate::engine::{bracket_unknown, TransformError, UnknownPolicy};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub tokenizer: TokenizerSettings,
    pub translate: TranslateSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub resource_dir: PathBuf,
    /// Omitted means the built-in default set.
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    pub cache: bool,
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateSettings {
    pub unknown: UnknownMode,
}

/// Configurable form of [`UnknownPolicy`]; custom callbacks are API-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownMode {
    Drop,
    Keep,
    Mark,
}

static MARK: fn(&str) -> Result<String, TransformError> = bracket_unknown;

impl UnknownMode {
    pub fn policy(self) -> UnknownPolicy<'static> {
        match self {
            UnknownMode::Drop => UnknownPolicy::Drop,
            UnknownMode::Keep => UnknownPolicy::KeepLiteral,
            UnknownMode::Mark => UnknownPolicy::Transform(&MARK),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if let Some(languages) = &s.dictionary.languages {
        for code in languages {
            if catalog::resolve(code).is_none() {
                return Err(SettingsError::InvalidValue {
                    field: "dictionary.languages".to_string(),
                    reason: format!("unsupported language {code}"),
                });
            }
        }
    }
    if s.dictionary.resource_dir.as_os_str().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.resource_dir".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.tokenizer.cache && s.tokenizer.cache_capacity == 0 {
        return Err(SettingsError::InvalidValue {
            field: "tokenizer.cache_capacity".to_string(),
            reason: "must be positive when the cache is enabled".to_string(),
        });
    }
    Ok(())
}
