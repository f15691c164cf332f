//! Translation lookup commands.

use quickfund_core::i18n::{self, Language};

/// Prints every supported language, marking the active one.
pub fn languages(current: Language) {
    for language in Language::all() {
        let marker = if *language == current { "*" } else { " " };
        println!("{marker} {}  {}", language.code(), language.native_name());
    }
}

/// Prints the text for `key`; unknown keys echo the key itself.
pub fn translate(key: &str, language: Language) {
    if !i18n::has_translation(language, key) {
        tracing::warn!(key, language = language.code(), "no translation for key");
    }
    println!("{}", i18n::translate(language, key));
}
