//! Translation lookup.
//!
//! Each supported language has a static dictionary keyed by dotted message
//! keys (`nav.home`, `auth.email`, ...). Dictionaries are never mutated.
//!
//! ## Missing translations
//!
//! A key absent from the active language's dictionary resolves to the key
//! itself. This is the documented lookup policy, not an error: callers always
//! get something renderable, and untranslated keys stay visible on screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the landing page ships dictionaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Hindi
    Hi,
    /// Telugu
    Te,
    /// Tamil
    Ta,
}

impl Language {
    /// Returns all languages in picker order.
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi, Language::Te, Language::Ta]
    }

    /// Returns the ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Ta => "ta",
        }
    }

    /// Returns the language name written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Te => "తెలుగు",
            Language::Ta => "தமிழ்",
        }
    }

    /// Parses a language code, case-insensitive and tolerant of region tags
    /// (`hi-IN`, `ta_LK`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "te" => Some(Language::Te),
            "ta" => Some(Language::Ta),
            _ => None,
        }
    }

    fn dictionary(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Hi => HI,
            Language::Te => TE,
            Language::Ta => TA,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| {
            let supported: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
            format!(
                "unknown language '{s}' (supported: {})",
                supported.join(", ")
            )
        })
    }
}

/// Looks up `key` in the dictionary for `language`.
///
/// Returns the key itself when the language has no entry for it.
pub fn translate(language: Language, key: &str) -> &str {
    language
        .dictionary()
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}

/// Returns true if `language` has its own entry for `key`.
pub fn has_translation(language: Language, key: &str) -> bool {
    language.dictionary().iter().any(|(k, _)| *k == key)
}

/// Returns every key known to the English dictionary, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|(k, _)| *k)
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.features", "Features"),
    ("nav.contact", "Contact"),
    ("nav.login", "Sign In"),
    ("nav.signup", "Sign Up"),
    (
        "hero.title",
        "Emergency Financial Support When You Need It Most",
    ),
    (
        "hero.subtitle",
        "Connect with compassionate donors and get verified emergency funding quickly and securely.",
    ),
    ("hero.cta.help", "Get Help Now"),
    ("hero.cta.donor", "Become a Donor"),
    ("auth.login", "Sign In"),
    ("auth.signup", "Sign Up"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.role", "I am a"),
    ("common.loading", "Loading..."),
];

const HI: &[(&str, &str)] = &[
    ("nav.home", "होम"),
    ("nav.about", "हमारे बारे में"),
    ("nav.features", "विशेषताएं"),
    ("nav.contact", "संपर्क"),
    ("nav.login", "साइन इन"),
    ("nav.signup", "साइन अप"),
    (
        "hero.title",
        "आपातकालीन वित्तीय सहायता जब आपको इसकी सबसे ज्यादा जरूरत हो",
    ),
    (
        "hero.subtitle",
        "दयालु दानदाताओं से जुड़ें और सत्यापित आपातकालीन फंडिंग जल्दी और सुरक्षित रूप से प्राप्त करें।",
    ),
    ("hero.cta.help", "अभी मदद लें"),
    ("hero.cta.donor", "दानदाता बनें"),
    ("auth.login", "साइन इन"),
    ("auth.signup", "साइन अप"),
    ("auth.email", "ईमेल"),
    ("auth.password", "पासवर्ड"),
    ("auth.role", "मैं हूँ"),
    ("common.loading", "लोड हो रहा है..."),
];

const TE: &[(&str, &str)] = &[
    ("nav.home", "హోమ్"),
    ("nav.about", "మా గురించి"),
    ("nav.features", "ఫీచర్లు"),
    ("nav.contact", "సంప్రదించండి"),
    ("nav.login", "సైన్ ఇన్"),
    ("nav.signup", "సైన్ అప్"),
    ("hero.title", "మీకు అత్యవసర ఆర్థిక సహాయం అవసరమైనప్పుడు"),
    (
        "hero.subtitle",
        "దయగల దాతలతో కనెక్ట్ అవ్వండి మరియు వేగంగా మరియు సురక్షితంగా ధృవీకరించబడిన అత్యవసర నిధులను పొందండి।",
    ),
    ("hero.cta.help", "ఇప్పుడే సహాయం పొందండి"),
    ("hero.cta.donor", "దాతగా మారండి"),
    ("auth.login", "సైన్ ఇన్"),
    ("auth.signup", "సైన్ అప్"),
    ("auth.email", "ఇమెయిల్"),
    ("auth.password", "పాస్‌వర్డ్"),
    ("auth.role", "నేను"),
    ("common.loading", "లోడ్ అవుతోంది..."),
];

const TA: &[(&str, &str)] = &[
    ("nav.home", "முகப்பு"),
    ("nav.about", "எங்களை பற்றி"),
    ("nav.features", "அம்சங்கள்"),
    ("nav.contact", "தொடர்பு"),
    ("nav.login", "உள்நுழைய"),
    ("nav.signup", "பதிவுசெய்ய"),
    (
        "hero.title",
        "அவசர நிதி உதவி உங்களுக்கு மிகவும் தேவையான நேரத்தில்",
    ),
    (
        "hero.subtitle",
        "அனுதாபமுள்ள நன்கொடையாளர்களுடன் இணைந்து சரிபார்க்கப்பட்ட அவசர நிதியுதவியை விரைவாகவும் பாதுகாப்பாகவும் பெறுங்கள்।",
    ),
    ("hero.cta.help", "இப்போது உதவி பெறுங்கள்"),
    ("hero.cta.donor", "நன்கொடையாளராக மாறுங்கள்"),
    ("auth.login", "உள்நுழைய"),
    ("auth.signup", "பதிவுசெய்ய"),
    ("auth.email", "மின்னஞ்சல்"),
    ("auth.password", "கடவுச்சொல்"),
    ("auth.role", "நான்"),
    ("common.loading", "ஏற்றுகிறது..."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Language::En, "nav.home"), "Home");
        assert_eq!(translate(Language::Hi, "auth.email"), "ईमेल");
        assert_eq!(translate(Language::Ta, "nav.contact"), "தொடர்பு");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key_for_every_language() {
        for &lang in Language::all() {
            assert_eq!(translate(lang, "missing.key"), "missing.key");
            assert_eq!(translate(lang, ""), "");
        }
    }

    #[test]
    fn test_every_language_covers_every_english_key() {
        for &lang in Language::all() {
            for key in keys() {
                assert!(
                    has_translation(lang, key),
                    "{} is missing {key}",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn test_parse_accepts_region_tags() {
        assert_eq!(Language::parse("hi-IN"), Some(Language::Hi));
        assert_eq!(Language::parse(" TA_lk "), Some(Language::Ta));
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_from_str_error_lists_supported_codes() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(err.contains("en, hi, te, ta"));
    }
}
