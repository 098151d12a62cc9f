// src/sites/wordreference.rs
//
// wordreference.com. Results are rows of a table, read cell by cell:
//
//   FrWrd      source word; starts a new entry
//   (no class) right after FrWrd: source note, may nest a `dsense` that
//              belongs to the next target word
//   To2        note for the next ToWrd
//   ToWrd      target word
//   FrEx/ToEx  example sentences
//
// Continuation rows leave the FrWrd cell out, so one entry can span rows.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Parsed, Site, encode_term};
use crate::config::consts::WORDREFERENCE_BASE;
use crate::config::options::{Dictionary, Language, LookupOptions};
use crate::core::html::{child_elements, has_exact_classes, is_unclassed, selector, text, text_excluding};
use crate::core::sanitize::{note, remove_once};
use crate::entry::{Entry, Word};
use crate::error::{LookupError, Result};
use crate::pair::{self, LanguagePair};

static NO_TRANSLATION: LazyLock<Selector> = LazyLock::new(|| selector("#noTransFound"));
static LANG_HEADER: LazyLock<Selector> = LazyLock::new(|| selector("tr.langHeader"));
static ROWS: LazyLock<Selector> = LazyLock::new(|| selector("tr.odd, tr.even"));
static TOOLTIP: LazyLock<Selector> = LazyLock::new(|| selector(".tooltip span"));

pub struct WordReference;

impl Site for WordReference {
    fn dictionary(&self) -> Dictionary {
        Dictionary::WordReference
    }

    fn request_url(&self, term: &str, options: &LookupOptions) -> Result<Url> {
        let segment = options.pair().path_segment().ok_or(LookupError::Unsupported {
            dictionary: Dictionary::WordReference,
            language: options.language,
        })?;
        Ok(Url::parse(&join!(WORDREFERENCE_BASE, &segment, &encode_term(term)))?)
    }

    fn parse(&self, doc: &Html, options: &LookupOptions) -> Parsed {
        if doc.select(&NO_TRANSLATION).next().is_some() {
            return Parsed::NotFound;
        }

        let requested = options.pair();
        let detected = header_labels(doc).and_then(|labels| pair::detect(requested, &labels));
        let resolution = pair::resolve(requested, detected);
        logd!("WordReference: requested {requested}, page {resolution:?}");

        if resolution.rejected(options.effective_strict()) {
            return Parsed::WrongOrder;
        }

        Parsed::from_entries(resolution.page_pair(), read_entries(doc))
    }
}

fn header_labels(doc: &Html) -> Option<Vec<String>> {
    let header = doc.select(&LANG_HEADER).next()?;
    Some(child_elements(header).map(text).collect())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Source,
    TargetNote,
    Target,
    SourceExample,
    TargetExample,
    Unclassed,
    Other,
}

fn classify(cell: ElementRef<'_>) -> Cell {
    if is_unclassed(cell) {
        return Cell::Unclassed;
    }
    for (class, kind) in [
        ("FrWrd", Cell::Source),
        ("To2", Cell::TargetNote),
        ("ToWrd", Cell::Target),
        ("FrEx", Cell::SourceExample),
        ("ToEx", Cell::TargetExample),
    ] {
        if has_exact_classes(cell, &[class]) {
            return kind;
        }
    }
    Cell::Other
}

/// Walk every result row in document order and fold the cells into entries.
pub fn read_entries(doc: &Html) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;
    let mut after_source = false;

    for row in doc.select(&ROWS) {
        // A pending target note never carries over into the next row.
        let mut target_note: Option<String> = None;

        for cell in child_elements(row) {
            match classify(cell) {
                Cell::Source => {
                    if let Some(done) = current.take() {
                        entries.push(done);
                    }
                    current = Some(Entry::new(Word::new(text_excluding(cell, &TOOLTIP))));
                    after_source = true;
                }
                Cell::Unclassed if after_source => {
                    let whole = text(cell);
                    // Both sides' notes share this cell when the target has one too.
                    let sense = child_elements(cell)
                        .find(|c| has_exact_classes(*c, &["dsense"]))
                        .map(text);
                    let source_note = match &sense {
                        Some(s) => remove_once(&whole, s),
                        None => whole,
                    };
                    if let Some(e) = current.as_mut() {
                        e.source.note = note(&source_note);
                    }
                    target_note = sense.and_then(|s| note(&s));
                    after_source = false;
                }
                Cell::TargetNote => {
                    target_note = note(&text(cell));
                    after_source = false;
                }
                Cell::Target => {
                    let word = Word::with_note(text_excluding(cell, &TOOLTIP), target_note.take());
                    match current.as_mut() {
                        Some(e) => e.targets.push(word),
                        None => logd!("WordReference: target {:?} before any source word", word.text),
                    }
                    after_source = false;
                }
                Cell::SourceExample => {
                    if let Some(e) = current.as_mut() {
                        e.source_examples.push(text(cell));
                    }
                    after_source = false;
                }
                Cell::TargetExample => {
                    if let Some(e) = current.as_mut() {
                        e.target_examples.push(text(cell));
                    }
                    after_source = false;
                }
                Cell::Unclassed | Cell::Other => {}
            }
        }
    }

    if let Some(last) = current {
        entries.push(last);
    }
    entries
}

/// Language labels as they would appear for `pair` (used in tests and benches).
pub fn header_for(pair: LanguagePair) -> Option<[&'static str; 2]> {
    let label = |lang: Language| {
        if lang == Language::English {
            pair::english_name_in(pair.foreign())
        } else {
            pair::autoglottonym(lang)
        }
    };
    Some([label(pair.source)?, label(pair.target)?])
}
