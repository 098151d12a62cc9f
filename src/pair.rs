// src/pair.rs
//
// Language pairs and the WordReference order check.
//
// WordReference labels its result table header in the foreign language
// ("Anglais | Français"), except Spanish which uses whichever language the
// query was in. Matching those labels tells us which order the page really
// delivered, since a French query for "chat" may come back as English→French.

use std::fmt;

use crate::config::options::Language::{self, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    pub fn reversed(self) -> Self {
        Self { source: self.target, target: self.source }
    }

    /// The non-English side. Falls back to the target for pairs without English.
    pub fn foreign(self) -> Language {
        if self.source == English { self.target } else { self.source }
    }

    /// Order only needs verifying when both sides share the Latin alphabet.
    pub fn verifies_order(self) -> bool {
        self.foreign().uses_latin()
    }

    /// URL path segment for a WordReference query; the term is appended as-is.
    pub fn path_segment(self) -> Option<String> {
        match (self.source, self.target) {
            (English, Spanish) => Some(s!("es/translation.asp?tranword=")),
            (Spanish, English) => Some(s!("es/en/translation.asp?spen=")),
            (src, tgt) => Some(join!(src.code()?, tgt.code()?, "/")),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.source, self.target)
    }
}

/// Foreign-language word for "English", as shown in WordReference headers.
pub fn english_name_in(language: Language) -> Option<&'static str> {
    let name = match language {
        French => "Anglais",
        Italian => "Inglese",
        Arabic => "الإنجليزية",
        German => "Englisch",
        Dutch => "Engels",
        Swedish => "Engelska",
        Icelandic => "enska",
        Portuguese => "Inglês",
        Polish => "Angielski",
        Romanian => "Engleză",
        Czech => "Angličtina",
        Greek => "Αγγλικά",
        Turkish => "İngilizce",
        Korean => "영어",
        _ => return None,
    };
    Some(name)
}

/// What each language calls itself.
pub fn autoglottonym(language: Language) -> Option<&'static str> {
    let name = match language {
        French => "Français",
        Italian => "Italiano",
        Arabic => "العربية",
        German => "Deutsch",
        Dutch => "Nederlands",
        Swedish => "Svenska",
        Icelandic => "íslenska",
        Portuguese => "Português",
        Polish => "Polski",
        Romanian => "Română",
        Czech => "Čeština",
        Greek => "Ελληνικά",
        Turkish => "Türkçe",
        Korean => "한국어",
        _ => return None,
    };
    Some(name)
}

const SPANISH_HEADER_ENGLISH: [&str; 2] = ["English", "Inglés"];
const SPANISH_HEADER_SPANISH: [&str; 2] = ["Spanish", "Español"];

/// Map one header label to a language, relative to the pair's foreign side.
fn label_language(foreign: Language, label: &str) -> Option<Language> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    if foreign == Spanish {
        if SPANISH_HEADER_ENGLISH.contains(&label) {
            return Some(English);
        }
        if SPANISH_HEADER_SPANISH.contains(&label) {
            return Some(Spanish);
        }
        return None;
    }
    if autoglottonym(foreign) == Some(label) {
        Some(foreign)
    } else if english_name_in(foreign) == Some(label) {
        Some(English)
    } else {
        None
    }
}

/// Read the delivered order off the header labels. Needs two recognised labels.
pub fn detect<S: AsRef<str>>(requested: LanguagePair, labels: &[S]) -> Option<LanguagePair> {
    let foreign = requested.foreign();
    let mut found = labels
        .iter()
        .filter_map(|l| label_language(foreign, l.as_ref()));
    let source = found.next()?;
    let target = found.next()?;
    (source != target).then(|| LanguagePair::new(source, target))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Page order equals the requested order.
    Matches(LanguagePair),
    /// Page came back the other way round.
    Reversed(LanguagePair),
    /// Header missing or unrecognised; assume the requested order.
    Undetected(LanguagePair),
}

impl Resolution {
    /// The order entries on the page should be labelled with.
    pub fn page_pair(self) -> LanguagePair {
        match self {
            Resolution::Matches(p) | Resolution::Reversed(p) | Resolution::Undetected(p) => p,
        }
    }

    /// Strict lookups refuse reversed pages.
    pub fn rejected(self, strict: bool) -> bool {
        strict && matches!(self, Resolution::Reversed(_))
    }
}

pub fn resolve(requested: LanguagePair, detected: Option<LanguagePair>) -> Resolution {
    match detected {
        Some(p) if p == requested => Resolution::Matches(p),
        Some(p) => Resolution::Reversed(p),
        None => Resolution::Undetected(requested),
    }
}
