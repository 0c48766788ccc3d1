//! Localized validation messages
//!
//! Each language is a static [`MessageTable`]; the validator reads messages from
//! whichever table it was built with, so switching language never touches the rules.

mod en_us;
mod keys;
mod ru_ru;

pub use keys::MessageTable;

/// Placeholder replaced by the configured length limit
pub const MAX_PLACEHOLDER: &str = "{max}";

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (United States)
    #[default]
    EnUs,
    /// Russian (Russia)
    RuRu,
}

impl Language {
    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::RuRu]
    }

    /// Language code (BCP 47)
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::RuRu => "ru-RU",
        }
    }

    /// Parse from a language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ru-RU" | "ru" => Some(Language::RuRu),
            _ => None,
        }
    }

    /// Message table for this language
    pub fn messages(&self) -> &'static MessageTable {
        match self {
            Language::EnUs => &en_us::MESSAGES,
            Language::RuRu => &ru_ru::MESSAGES,
        }
    }
}
