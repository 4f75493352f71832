use std::fs;

pub fn settings_export() {
    print!("{}", ipa_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        ipa_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let languages = s
        .dictionary
        .languages
        .as_ref()
        .map(|l| l.join(","))
        .unwrap_or_else(|| "(default)".to_string());
    println!(
        "OK: dictionary.resource_dir={}, dictionary.languages={}, tokenizer.cache={}",
        s.dictionary.resource_dir.display(),
        languages,
        s.tokenizer.cache
    );
}

/// Install a custom settings file before anything reads the global settings.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        ipa_core::settings::init_custom(content),
        "Error in {file}: {}"
    );
}
