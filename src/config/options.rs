// src/config/options.rs
use std::fmt;

use serde::Deserialize;

use crate::error::{LookupError, Result};
use crate::pair::LanguagePair;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Han,
    Hangul,
    Arabic,
    Hebrew,
}

impl Script {
    pub fn is_rtl(self) -> bool {
        matches!(self, Script::Arabic | Script::Hebrew)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum), value(rename_all = "lower"))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
    Spanish,
    Italian,
    Portuguese,
    Romanian,
    German,
    Dutch,
    Polish,
    Czech,
    Swedish,
    Icelandic,
    Turkish,
    Greek,
    Russian,
    Chinese,
    Korean,
    Arabic,
    Hebrew,
}

impl Language {
    /// Foreign languages offered for selection, in menu order.
    pub const SELECTABLE: [Language; 17] = [
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Romanian,
        Language::German,
        Language::Dutch,
        Language::Polish,
        Language::Czech,
        Language::Swedish,
        Language::Icelandic,
        Language::Turkish,
        Language::Greek,
        Language::Chinese,
        Language::Korean,
        Language::Arabic,
        Language::Hebrew,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Romanian => "Romanian",
            Language::German => "German",
            Language::Dutch => "Dutch",
            Language::Polish => "Polish",
            Language::Czech => "Czech",
            Language::Swedish => "Swedish",
            Language::Icelandic => "Icelandic",
            Language::Turkish => "Turkish",
            Language::Greek => "Greek",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
            Language::Hebrew => "Hebrew",
        }
    }

    /// Two-letter code as WordReference spells it (note `cz` and `gr`).
    pub fn code(self) -> Option<&'static str> {
        let c = match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::German => "de",
            Language::Dutch => "nl",
            Language::Polish => "pl",
            Language::Czech => "cz",
            Language::Swedish => "sv",
            Language::Icelandic => "is",
            Language::Turkish => "tr",
            Language::Greek => "gr",
            Language::Russian => "ru",
            Language::Korean => "ko",
            Language::Arabic => "ar",
            Language::Chinese | Language::Hebrew => return None,
        };
        Some(c)
    }

    pub fn script(self) -> Script {
        match self {
            Language::Greek => Script::Greek,
            Language::Russian => Script::Cyrillic,
            Language::Chinese => Script::Han,
            Language::Korean => Script::Hangul,
            Language::Arabic => Script::Arabic,
            Language::Hebrew => Script::Hebrew,
            _ => Script::Latin,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.script().is_rtl()
    }

    pub fn uses_latin(self) -> bool {
        self.script() == Script::Latin
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum), value(rename_all = "lower"))]
#[serde(rename_all = "lowercase")]
pub enum Dictionary {
    WordReference,
    Mdbg,
    ArabDict,
    Morfix,
}

impl Dictionary {
    pub fn name(self) -> &'static str {
        match self {
            Dictionary::WordReference => "WordReference",
            Dictionary::Mdbg => "MDBG",
            Dictionary::ArabDict => "ArabDict",
            Dictionary::Morfix => "Morfix",
        }
    }

    /// Dictionaries serving `language`; the first one is the default choice.
    pub fn available_for(language: Language) -> &'static [Dictionary] {
        match language {
            Language::Chinese => &[Dictionary::Mdbg],
            Language::Arabic => &[Dictionary::ArabDict, Dictionary::WordReference],
            Language::Hebrew => &[Dictionary::Morfix],
            Language::English | Language::Russian => &[],
            _ => &[Dictionary::WordReference],
        }
    }

    pub fn serves(self, language: Language) -> bool {
        Dictionary::available_for(language).contains(&self)
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    EnglishToForeign,
    ForeignToEnglish,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::EnglishToForeign => Direction::ForeignToEnglish,
            Direction::ForeignToEnglish => Direction::EnglishToForeign,
        }
    }

    /// "English to French" / "French to English"
    pub fn label(self, foreign: Language) -> String {
        match self {
            Direction::EnglishToForeign => join!("English to ", foreign.name()),
            Direction::ForeignToEnglish => join!(foreign.name(), " to English"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub language: Language,
    pub dictionary: Dictionary,
    pub direction: Direction,
    /// Reject pages that come back in the reverse language order.
    pub strict: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            language: Language::French,
            dictionary: Dictionary::WordReference,
            direction: Direction::EnglishToForeign,
            strict: true,
        }
    }
}

impl LookupOptions {
    pub fn new(language: Language, dictionary: Dictionary) -> Self {
        Self { language, dictionary, ..Self::default() }
    }

    /// Requested (source, target) order.
    pub fn pair(&self) -> LanguagePair {
        match self.direction {
            Direction::EnglishToForeign => LanguagePair::new(Language::English, self.language),
            Direction::ForeignToEnglish => LanguagePair::new(self.language, Language::English),
        }
    }

    /// Order ambiguity only exists between Latin-script languages, so strict
    /// mode is dropped for everything else.
    pub fn effective_strict(&self) -> bool {
        self.strict && self.language.uses_latin()
    }

    pub fn validate(&self) -> Result<()> {
        if self.dictionary.serves(self.language) {
            Ok(())
        } else {
            Err(LookupError::Unsupported {
                dictionary: self.dictionary,
                language: self.language,
            })
        }
    }

    /// Switch language, keeping the dictionary when it still applies.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if !self.dictionary.serves(language) {
            if let Some(first) = Dictionary::available_for(language).first() {
                self.dictionary = *first;
            }
        }
    }
}
