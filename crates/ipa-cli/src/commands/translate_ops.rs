use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use ipa_core::settings::{settings, Settings, UnknownMode};
use ipa_core::{IpaEngine, TracingSink, TranslateError};

/// Where to read dictionaries from and which languages to load.
/// Unset fields fall back to the global settings.
#[derive(Debug, Default, Clone)]
pub struct DictOptions {
    pub dict_dir: Option<PathBuf>,
    pub languages: Vec<String>,
    pub no_cache: bool,
}

#[derive(Debug, Serialize)]
struct TokenizeOutput<'a> {
    sentence: &'a str,
    tokens: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TranslateOutput<'a> {
    sentence: &'a str,
    fragments: Vec<String>,
    ipa: String,
}

#[derive(Debug, Serialize)]
struct LookupOutput<'a> {
    word: &'a str,
    pronunciations: Vec<String>,
}

/// Apply command-line overrides to a copy of the settings.
pub fn effective_settings(opts: &DictOptions, s: &Settings) -> Settings {
    let mut s = s.clone();
    if let Some(dir) = &opts.dict_dir {
        s.dictionary.resource_dir = dir.clone();
    }
    if !opts.languages.is_empty() {
        s.dictionary.languages = Some(opts.languages.clone());
    }
    if opts.no_cache {
        s.tokenizer.cache = false;
    }
    s
}

pub fn open_engine(opts: &DictOptions) -> IpaEngine {
    let s = effective_settings(opts, settings());
    debug!(
        dir = %s.dictionary.resource_dir.display(),
        languages = ?s.dictionary.languages,
        "opening engine"
    );
    let engine = die!(IpaEngine::from_settings(&s), "Error loading dictionaries: {}");
    engine.with_sink(Arc::new(TracingSink))
}

/// Run `f` on the given sentence, or on every stdin line when there is none.
fn for_each_input(sentence: Option<&str>, mut f: impl FnMut(&str)) {
    if let Some(s) = sentence {
        f(s);
        return;
    }
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Failed to read line: {}");
        f(&line);
    }
}

pub fn render_tokens(engine: &IpaEngine, sentence: &str, json: bool) -> String {
    let tokens = engine.tokenize(sentence);
    if json {
        let out = TokenizeOutput { sentence, tokens };
        serde_json::to_string(&out).expect("JSON serialization failed")
    } else {
        tokens
            .iter()
            .map(|t| format!("[{t}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn render_translation(
    engine: &IpaEngine,
    sentence: &str,
    mode: UnknownMode,
    json: bool,
) -> Result<String, TranslateError> {
    let fragments = engine.translate(sentence, &mode.policy())?;
    let ipa = fragments.concat();
    if json {
        let out = TranslateOutput {
            sentence,
            fragments,
            ipa,
        };
        Ok(serde_json::to_string(&out).expect("JSON serialization failed"))
    } else {
        Ok(ipa)
    }
}

pub fn render_lookup(engine: &IpaEngine, word: &str, json: bool) -> Option<String> {
    let pronunciations = engine.pronunciations(word)?;
    if json {
        let out = LookupOutput {
            word,
            pronunciations,
        };
        Some(serde_json::to_string(&out).expect("JSON serialization failed"))
    } else {
        Some(pronunciations.join("\n"))
    }
}

pub fn tokenize_cmd(opts: &DictOptions, sentence: Option<&str>, json: bool) {
    let engine = open_engine(opts);
    for_each_input(sentence, |s| println!("{}", render_tokens(&engine, s, json)));
}

pub fn translate_cmd(
    opts: &DictOptions,
    sentence: Option<&str>,
    mode: Option<UnknownMode>,
    json: bool,
) {
    let engine = open_engine(opts);
    let mode = mode.unwrap_or(settings().translate.unknown);
    for_each_input(sentence, |s| {
        let line = die!(render_translation(&engine, s, mode, json), "Error: {}");
        println!("{line}");
    });
}

pub fn lookup_cmd(opts: &DictOptions, word: &str, json: bool) {
    let engine = open_engine(opts);
    match render_lookup(&engine, word, json) {
        Some(text) => println!("{text}"),
        None => {
            eprintln!("'{word}' not found in the loaded dictionaries");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ipa_core::settings::parse_settings_toml;
    use ipa_core::settings::DEFAULT_SETTINGS_TOML;

    use super::*;

    fn test_engine() -> (tempfile::TempDir, IpaEngine) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fr_FR.json"),
            r#"{"ça": "/sa/", "va": "/va/", "bien": "/bjɛ̃/, /bjɛn/"}"#,
        )
        .unwrap();
        let opts = DictOptions {
            dict_dir: Some(dir.path().to_path_buf()),
            languages: vec!["fr_FR".to_string()],
            no_cache: false,
        };
        let defaults = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let engine = IpaEngine::from_settings(&effective_settings(&opts, &defaults)).unwrap();
        (dir, engine)
    }

    #[test]
    fn settings_used_when_no_overrides() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let eff = effective_settings(&DictOptions::default(), &s);
        assert_eq!(eff.dictionary.resource_dir, PathBuf::from("ipa_resources"));
        assert_eq!(eff.dictionary.languages.unwrap().len(), 4);
        assert!(eff.tokenizer.cache);
    }

    #[test]
    fn overrides_replace_settings() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let opts = DictOptions {
            dict_dir: Some(PathBuf::from("/tmp/dicts")),
            languages: vec!["ja".to_string()],
            no_cache: true,
        };
        let eff = effective_settings(&opts, &s);
        assert_eq!(eff.dictionary.resource_dir, PathBuf::from("/tmp/dicts"));
        assert_eq!(eff.dictionary.languages, Some(vec!["ja".to_string()]));
        assert!(!eff.tokenizer.cache);
        assert_eq!(eff.tokenizer.cache_capacity, s.tokenizer.cache_capacity);
    }

    #[test]
    fn engine_opens_from_overridden_dir() {
        let (_dir, engine) = test_engine();
        let codes: Vec<&str> = engine.loaded_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["fr_FR"]);
        assert!(engine.cache().is_some());
    }

    #[test]
    fn translation_text_and_json() {
        let (_dir, engine) = test_engine();
        assert_eq!(
            render_translation(&engine, "Ça va bien?", UnknownMode::Drop, false).unwrap(),
            "sa va bjɛ̃"
        );
        assert_eq!(
            render_translation(&engine, "ça xx", UnknownMode::Mark, false).unwrap(),
            "sa [x][x]"
        );
        let json = render_translation(&engine, "ça va", UnknownMode::Keep, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["ipa"], "sa va");
        assert_eq!(v["fragments"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn tokens_text() {
        let (_dir, engine) = test_engine();
        assert_eq!(render_tokens(&engine, "ça va", false), "[ça] [ ] [va]");
    }

    #[test]
    fn lookup_lists_alternatives() {
        let (_dir, engine) = test_engine();
        assert_eq!(
            render_lookup(&engine, "Bien", false).as_deref(),
            Some("bjɛ̃\nbjɛn")
        );
        assert!(render_lookup(&engine, "non", false).is_none());
    }
}
