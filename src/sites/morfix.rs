// src/sites/morfix.rs
//
// morfix.co.il. The site decides the direction itself: an English query
// yields `..._enTohe` sections, a Hebrew query `..._heToen`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Parsed, Site, encode_term};
use crate::config::consts::MORFIX_BASE;
use crate::config::options::{Dictionary, Language, LookupOptions};
use crate::core::html::{first_text, raw_text, selector, text};
use crate::core::sanitize::note;
use crate::entry::{Entry, Word};
use crate::error::Result;
use crate::pair::LanguagePair;

struct Layout {
    pair: LanguagePair,
    section: Selector,
    word: Selector,
    note: Selector,
}

static EN_TO_HE: LazyLock<Layout> = LazyLock::new(|| Layout {
    pair: LanguagePair::new(Language::English, Language::Hebrew),
    section: selector("div.Translation_content_enTohe"),
    word: selector("span.Translation_spTop_enTohe"),
    note: selector("span.Translation_sp2Top_enTohe"),
});

static HE_TO_EN: LazyLock<Layout> = LazyLock::new(|| Layout {
    pair: LanguagePair::new(Language::Hebrew, Language::English),
    section: selector("div.Translation_content_heToen"),
    word: selector("span.Translation_spTop_heToen"),
    note: selector("span.Translation_sp2Top_heToen"),
});

// Sic: the site spells it "Transletion".
static NO_RESULT: LazyLock<Selector> = LazyLock::new(|| selector("div.Transletion_noresult_content"));
static TRANSLATION: LazyLock<Selector> = LazyLock::new(|| selector("div.normal_translation_div"));

pub struct Morfix;

impl Site for Morfix {
    fn dictionary(&self) -> Dictionary {
        Dictionary::Morfix
    }

    fn request_url(&self, term: &str, _options: &LookupOptions) -> Result<Url> {
        Ok(Url::parse(&join!(MORFIX_BASE, &encode_term(term)))?)
    }

    fn parse(&self, doc: &Html, _options: &LookupOptions) -> Parsed {
        if doc.select(&NO_RESULT).next().is_some() {
            return Parsed::NotFound;
        }

        let layout: &Layout = if doc.select(&EN_TO_HE.section).next().is_some() {
            &EN_TO_HE
        } else {
            &HE_TO_EN
        };

        let entries = doc
            .select(&layout.section)
            .filter_map(|sec| {
                let entry = read_section(sec, layout);
                if entry.is_none() {
                    logd!("Morfix: skipping section without word or translation");
                }
                entry
            })
            .collect();

        Parsed::from_entries(layout.pair, entries)
    }
}

fn read_section(sec: ElementRef<'_>, layout: &Layout) -> Option<Entry> {
    let word = first_text(sec, &layout.word).filter(|w| !w.is_empty())?;
    let word_note = sec.select(&layout.note).next().and_then(|el| note(&raw_text(el)));
    let translation = sec.select(&TRANSLATION).next().map(text).filter(|t| !t.is_empty())?;
    Some(Entry::new(Word::with_note(word, word_note)).target(Word::new(translation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Parsed {
        Morfix.parse(&Html::parse_document(html), &LookupOptions::new(Language::Hebrew, Dictionary::Morfix))
    }

    #[test]
    fn english_to_hebrew_sections() {
        let html = r#"
            <div class="Translation_content_enTohe">
              <span class="Translation_spTop_enTohe">dog </span>
              <span class="Translation_sp2Top_enTohe">noun</span>
              <div class="normal_translation_div">
                כלב;            כלבה
              </div>
            </div>
            <div class="Translation_content_enTohe">
              <span class="Translation_spTop_enTohe">dog </span>
              <span class="Translation_sp2Top_enTohe"></span>
              <div class="normal_translation_div">עקב</div>
            </div>"#;
        let Parsed::Entries { pair, entries } = parse(html) else {
            panic!("expected entries");
        };
        assert_eq!(pair, LanguagePair::new(Language::English, Language::Hebrew));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source, Word::with_note("dog", Some(s!("noun"))));
        assert_eq!(entries[0].targets[0].text, "כלב; כלבה");
        assert_eq!(entries[1].source.note, None);
    }

    #[test]
    fn hebrew_to_english_detected_from_classes() {
        let html = r#"
            <div class="Translation_content_heToen">
              <span class="Translation_spTop_heToen">כלב</span>
              <span class="Translation_sp2Top_heToen">שם עצם</span>
              <div class="normal_translation_div">dog</div>
            </div>"#;
        let Parsed::Entries { pair, entries } = parse(html) else {
            panic!("expected entries");
        };
        assert_eq!(pair, LanguagePair::new(Language::Hebrew, Language::English));
        assert_eq!(entries[0].format(pair), "Hebrew:\nכלב (שם עצם)\nEnglish:\n  dog\n\n");
    }

    #[test]
    fn no_result_marker() {
        let html = r#"<div class="Transletion_noresult_content">לא נמצאו תוצאות</div>"#;
        assert_eq!(parse(html), Parsed::NotFound);
    }

    #[test]
    fn page_without_sections_is_not_found() {
        assert_eq!(parse("<html><body><p>maintenance</p></body></html>"), Parsed::NotFound);
    }
}
