// src/sites/mod.rs
//! # Dictionary sites
//!
//! One submodule per dictionary website. Each knows **where a term's page
//! lives** and **how to read entries off it**; nothing else.
//!
//! ## What lives here
//! - Building the request URL for a term (path segment or query string).
//! - Detecting the site's "no results" marker.
//! - Pure HTML extraction with `scraper` into [`Entry`] values, plus the
//!   language order the entries should be labelled with.
//!
//! ## What does **not** live here
//! - Fetching, progress and cancellation: `lookup` drives the loop.
//! - Text rendering: [`Entry::format`] and `LookupResult`'s `Display`.
//!
//! ## Conventions
//! - A section missing a required field is skipped (and logged), never a panic.
//!   Site markup drifts; one odd row should not sink the rest of the page.
//! - A page with no marker **and** no usable section counts as not found.
//! - Parsers take an already-parsed `Html` so tests can feed captured fixtures.

use scraper::Html;
use url::Url;

use crate::config::options::{Dictionary, LookupOptions};
use crate::entry::Entry;
use crate::error::Result;
use crate::pair::LanguagePair;

pub mod arabdict;
pub mod mdbg;
pub mod morfix;
pub mod wordreference;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Entries { pair: LanguagePair, entries: Vec<Entry> },
    NotFound,
    /// Strict lookup, but the page only had the reverse language order.
    WrongOrder,
}

impl Parsed {
    pub fn from_entries(pair: LanguagePair, entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            Parsed::NotFound
        } else {
            Parsed::Entries { pair, entries }
        }
    }
}

pub trait Site: Sync {
    fn dictionary(&self) -> Dictionary;

    fn name(&self) -> &'static str {
        self.dictionary().name()
    }

    fn request_url(&self, term: &str, options: &LookupOptions) -> Result<Url>;

    fn parse(&self, doc: &Html, options: &LookupOptions) -> Parsed;
}

pub fn site_for(dictionary: Dictionary) -> &'static dyn Site {
    match dictionary {
        Dictionary::WordReference => &wordreference::WordReference,
        Dictionary::Mdbg => &mdbg::Mdbg,
        Dictionary::ArabDict => &arabdict::ArabDict,
        Dictionary::Morfix => &morfix::Morfix,
    }
}

/// Percent-encode a term for use as a path segment or query value.
pub(crate) fn encode_term(term: &str) -> String {
    urlencoding::encode(term).into_owned()
}
