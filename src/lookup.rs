// src/lookup.rs
//! The batch loop: one GET per term, in order, parsed by the chosen site.
//!
//! Every term yields exactly one [`LookupResult`]. A fetch failure becomes an
//! [`Outcome::Failed`] for that term and the batch moves on; only invalid
//! options abort the whole run. Cancellation is checked after each term, so a
//! batch cancelled after term `k` returns exactly the first `k` results.

use std::fmt;

use scraper::Html;

use crate::config::options::LookupOptions;
use crate::core::net::Fetch;
use crate::entry::Entry;
use crate::error::Result;
use crate::pair::LanguagePair;
use crate::progress::{Progress, Signal};
use crate::sites::{Parsed, Site, site_for};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found { pair: LanguagePair, entries: Vec<Entry> },
    NotFound,
    WrongOrder,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupResult {
    pub term: String,
    pub site: &'static str,
    /// Final URL after redirects, or the request URL when the fetch failed.
    pub url: String,
    pub outcome: Outcome,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }

    /// Short status for overview tables.
    pub fn summary(&self) -> String {
        match &self.outcome {
            Outcome::Found { entries, .. } if entries.len() == 1 => s!("1 entry"),
            Outcome::Found { entries, .. } => format!("{} entries", entries.len()),
            Outcome::NotFound => s!("not found"),
            Outcome::WrongOrder => s!("wrong order"),
            Outcome::Failed(_) => s!("failed"),
        }
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (term, site, url) = (&self.term, self.site, &self.url);
        match &self.outcome {
            Outcome::Found { pair, entries } => {
                for e in entries {
                    f.write_str(&e.format(*pair))?;
                }
                write!(f, "\nSource:\n{url}")
            }
            Outcome::NotFound => write!(f, "No results found for {term} on {site}!\nSource: {url}"),
            Outcome::WrongOrder => write!(
                f,
                "No results found in the right language-pair order for {term} on {site}!\nSource: {url}"
            ),
            Outcome::Failed(reason) => {
                write!(f, "Lookup failed for {term} on {site}: {reason}\nSource: {url}")
            }
        }
    }
}

/// Split pasted input into terms: one per line, trimmed, blanks dropped.
pub fn parse_terms(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Look up a single term. Never fails; problems end up in the outcome.
pub fn lookup_one<F: Fetch + ?Sized>(term: &str, options: &LookupOptions, fetcher: &F) -> LookupResult {
    let site = site_for(options.dictionary);
    let mut result = LookupResult {
        term: s!(term),
        site: site.name(),
        url: s!(),
        outcome: Outcome::NotFound,
    };

    let url = match site.request_url(term, options) {
        Ok(u) => u,
        Err(e) => {
            loge!("Lookup: {term:?} on {}: {e}", site.name());
            result.outcome = Outcome::Failed(e.to_string());
            return result;
        }
    };
    result.url = url.to_string();

    let page = match fetcher.get(&url) {
        Ok(p) => p,
        Err(e) => {
            loge!("Lookup: {term:?} on {}: {e}", site.name());
            result.outcome = Outcome::Failed(e.to_string());
            return result;
        }
    };
    result.url = page.url.to_string();

    result.outcome = read_page(site, &page.body, options);
    logd!("Lookup: {term:?} on {} → {}", site.name(), result.summary());
    result
}

fn read_page(site: &dyn Site, body: &str, options: &LookupOptions) -> Outcome {
    let doc = Html::parse_document(body);
    match site.parse(&doc, options) {
        Parsed::Entries { pair, entries } => Outcome::Found { pair, entries },
        Parsed::NotFound => Outcome::NotFound,
        Parsed::WrongOrder => Outcome::WrongOrder,
    }
}

/// Run the whole batch. Results come back in input order; a cancel after term
/// `k` leaves exactly `k` of them.
pub fn lookup_all<F: Fetch + ?Sized>(
    terms: &[String],
    options: &LookupOptions,
    fetcher: &F,
    progress: &mut dyn Progress,
) -> Result<Vec<LookupResult>> {
    options.validate()?;

    let total = terms.len();
    logf!(
        "Lookup: begin {total} term(s) on {} ({})",
        options.dictionary,
        options.pair()
    );
    progress.begin(total);

    let mut results = Vec::with_capacity(total);
    for (i, term) in terms.iter().enumerate() {
        progress.log(&format!("Looking up {term}"));
        results.push(lookup_one(term, options, fetcher));

        if progress.item_done(i + 1, total) == Signal::Cancel {
            logf!("Lookup: cancelled after {} of {total}", i + 1);
            break;
        }
    }

    progress.finish();
    logf!("Lookup: done, {} result(s)", results.len());
    Ok(results)
}
