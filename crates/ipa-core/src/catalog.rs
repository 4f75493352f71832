//! Fixed table of supported languages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Canonical code, also the dictionary resource stem (`fr_FR.json`).
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        code: "en_US",
        name: "English (United States)",
    },
    Language {
        code: "eo",
        name: "Esperanto",
    },
    Language {
        code: "es_MX",
        name: "Spanish (Mexico)",
    },
    Language {
        code: "fa",
        name: "Persian",
    },
    Language {
        code: "fr_FR",
        name: "French (France)",
    },
    Language {
        code: "ja",
        name: "Japanese",
    },
    Language {
        code: "yue",
        name: "Cantonese",
    },
    Language {
        code: "zh_hans",
        name: "Chinese (Simplified)",
    },
    Language {
        code: "zh_hant",
        name: "Chinese (Traditional)",
    },
];

/// Languages loaded when the caller does not name any, in load order.
pub const DEFAULT_LANGUAGES: &[&str] = &["en_US", "fr_FR", "es_MX", "zh_hans"];

/// Resolve a language code case-insensitively to its catalog entry.
pub fn resolve(code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
}

pub fn display_name(code: &str) -> Option<&'static str> {
    resolve(code).map(|lang| lang.name)
}

pub fn is_default(code: &str) -> bool {
    DEFAULT_LANGUAGES
        .iter()
        .any(|default| default.eq_ignore_ascii_case(code))
}
