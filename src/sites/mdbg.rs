// src/sites/mdbg.rs
//
// mdbg.net Chinese dictionary. Accepts hanzi, pinyin or English in the same
// box; results are always rendered Chinese → English.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Parsed, Site};
use crate::config::consts::MDBG_BASE;
use crate::config::options::{Dictionary, Language, LookupOptions};
use crate::core::html::{first_text, selector, text};
use crate::entry::{Entry, Word};
use crate::error::Result;
use crate::pair::LanguagePair;

static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.row"));
static HANZI: LazyLock<Selector> = LazyLock::new(|| selector("div.hanzi"));
static PINYIN: LazyLock<Selector> = LazyLock::new(|| selector("div.pinyin"));
static DEFS: LazyLock<Selector> = LazyLock::new(|| selector("div.defs"));

pub struct Mdbg;

impl Site for Mdbg {
    fn dictionary(&self) -> Dictionary {
        Dictionary::Mdbg
    }

    fn request_url(&self, term: &str, _options: &LookupOptions) -> Result<Url> {
        Ok(Url::parse_with_params(MDBG_BASE, &[("wdqb", term)])?)
    }

    // MDBG has no explicit "no results" marker; an empty table means nothing found.
    fn parse(&self, doc: &Html, _options: &LookupOptions) -> Parsed {
        let entries = doc
            .select(&ROW)
            .filter_map(|row| {
                let entry = read_row(row);
                if entry.is_none() {
                    logd!("MDBG: skipping row without hanzi or definition");
                }
                entry
            })
            .collect();

        Parsed::from_entries(LanguagePair::new(Language::Chinese, Language::English), entries)
    }
}

fn read_row(row: ElementRef<'_>) -> Option<Entry> {
    let hanzi: Vec<String> = row
        .select(&HANZI)
        .map(text)
        .filter(|h| !h.is_empty())
        .collect();

    // Two forms listed → simplified then traditional, both labelled.
    let mut entry = match hanzi.as_slice() {
        [] => return None,
        [simp, trad] => Entry::new(Word::new(simp.as_str()))
            .detail("Simplified", simp.as_str())
            .detail("Traditional", trad.as_str()),
        [first, ..] => Entry::new(Word::new(first.as_str())),
    };

    if let Some(pinyin) = first_text(row, &PINYIN).filter(|p| !p.is_empty()) {
        entry = entry.detail("Pinyin", pinyin);
    }

    let defs = first_text(row, &DEFS).filter(|d| !d.is_empty())?;
    Some(entry.target(Word::new(defs)))
}
