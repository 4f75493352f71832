use ipa_core::catalog::{self, LANGUAGES};

/// Print the language catalog, marking languages loaded by default.
pub fn languages() {
    print!("{}", format_languages());
}

pub fn format_languages() -> String {
    let width = LANGUAGES.iter().map(|l| l.code.len()).max().unwrap_or(0);
    let mut out = String::new();
    for lang in LANGUAGES {
        let marker = if catalog::is_default(lang.code) { "*" } else { " " };
        out.push_str(&format!("{marker} {:<width$}  {}\n", lang.code, lang.name));
    }
    out
}
