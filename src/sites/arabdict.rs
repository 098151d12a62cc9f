// src/sites/arabdict.rs
//
// arabdict.com, English → Arabic only.
//
// Layout (one result):
//   <div class="rec-body description">
//     <div class="latin"><span class="latin-term">book</span><span class="term-info">(n.)</span></div>
//     <div class="arabic"><span class="arabic-term">كتاب</span><span class="term-info"> </span></div>
//   </div>
// The "no results" box reuses the same classes plus `text-center p-10`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Parsed, Site, encode_term};
use crate::config::consts::ARABDICT_BASE;
use crate::config::options::{Dictionary, Language, LookupOptions};
use crate::core::html::{first_text, has_exact_classes, raw_text, selector};
use crate::core::sanitize::note;
use crate::entry::{Entry, Word};
use crate::error::Result;
use crate::pair::LanguagePair;

static SECTION: LazyLock<Selector> = LazyLock::new(|| selector("div.rec-body.description"));
static NO_RESULT: LazyLock<Selector> =
    LazyLock::new(|| selector("div.rec-body.description.text-center.p-10"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static LATIN: LazyLock<Selector> = LazyLock::new(|| selector(".latin"));
static LATIN_TERM: LazyLock<Selector> = LazyLock::new(|| selector(".latin-term"));
static ARABIC: LazyLock<Selector> = LazyLock::new(|| selector(".arabic"));
static ARABIC_TERM: LazyLock<Selector> = LazyLock::new(|| selector(".arabic-term"));
static TERM_INFO: LazyLock<Selector> = LazyLock::new(|| selector(".term-info"));

const NO_RESULT_TEXT: &str = "No exact translation found for";

pub struct ArabDict;

impl Site for ArabDict {
    fn dictionary(&self) -> Dictionary {
        Dictionary::ArabDict
    }

    fn request_url(&self, term: &str, _options: &LookupOptions) -> Result<Url> {
        Ok(Url::parse(&join!(ARABDICT_BASE, &encode_term(term)))?)
    }

    fn parse(&self, doc: &Html, _options: &LookupOptions) -> Parsed {
        if has_no_result_box(doc) {
            return Parsed::NotFound;
        }

        let entries = doc
            .select(&SECTION)
            .filter(|sec| has_exact_classes(*sec, &["rec-body", "description"]))
            .filter_map(|sec| {
                let entry = read_section(sec);
                if entry.is_none() {
                    logd!("ArabDict: skipping section without both terms");
                }
                entry
            })
            .collect();

        Parsed::from_entries(LanguagePair::new(Language::English, Language::Arabic), entries)
    }
}

fn has_no_result_box(doc: &Html) -> bool {
    doc.select(&NO_RESULT)
        .flat_map(|div| div.select(&SPAN))
        .any(|span| raw_text(span).contains(NO_RESULT_TEXT))
}

fn read_section(sec: ElementRef<'_>) -> Option<Entry> {
    let english = read_side(sec, &LATIN, &LATIN_TERM)?;
    let arabic = read_side(sec, &ARABIC, &ARABIC_TERM)?;
    Some(Entry::new(english).target(arabic))
}

fn read_side(sec: ElementRef<'_>, side: &Selector, term: &Selector) -> Option<Word> {
    let side = sec.select(side).next()?;
    let text = first_text(side, term).filter(|t| !t.is_empty())?;
    let info = side.select(&TERM_INFO).next().and_then(|el| note(&raw_text(el)));
    Some(Word::with_note(text, info))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUND: &str = r#"
        <html><body>
          <div class="rec-body description">
            <div class="latin"><span class="latin-term"><mark>book</mark></span><span class="term-info"> (n.) </span></div>
            <div class="arabic"><span class="arabic-term">كتاب</span><span class="term-info"> </span></div>
          </div>
          <div class="rec-body description">
            <div class="latin"><span class="latin-term">book</span><span class="term-info">(v.)</span></div>
            <div class="arabic"><span class="arabic-term">حجز</span><span class="term-info">مقعدا</span></div>
          </div>
          <div class="rec-body description">
            <div class="latin"><span class="latin-term">broken</span></div>
          </div>
        </body></html>"#;

    const MISSING_BOX: &str = r#"
          <div class="rec-body description text-center p-10">
            <span>No exact translation found for "qwzx".</span>
          </div>"#;

    fn missing() -> String {
        join!("<html><body>", MISSING_BOX, "</body></html>")
    }

    fn parse(html: &str) -> Parsed {
        ArabDict.parse(&Html::parse_document(html), &LookupOptions::new(Language::Arabic, Dictionary::ArabDict))
    }

    #[test]
    fn extracts_both_sides_and_skips_broken_section() {
        let Parsed::Entries { pair, entries } = parse(FOUND) else {
            panic!("expected entries");
        };
        assert_eq!(pair, LanguagePair::new(Language::English, Language::Arabic));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source, Word::with_note("book", Some(s!("(n.)"))));
        assert_eq!(entries[0].targets, vec![Word::new("كتاب")]);
        assert_eq!(entries[1].targets, vec![Word::with_note("حجز", Some(s!("مقعدا")))]);
    }

    #[test]
    fn no_result_box_wins() {
        assert_eq!(parse(&missing()), Parsed::NotFound);
    }

    #[test]
    fn no_result_box_wins_over_sections() {
        let page = FOUND.replace("<html><body>", &join!("<html><body>", MISSING_BOX));
        assert_eq!(parse(&page), Parsed::NotFound);
    }

    #[test]
    fn url_encodes_term() {
        let opts = LookupOptions::new(Language::Arabic, Dictionary::ArabDict);
        let url = ArabDict.request_url("ice cream", &opts).unwrap();
        assert_eq!(url.as_str(), "https://www.arabdict.com/en/english-arabic/ice%20cream");
    }
}
