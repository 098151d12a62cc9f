// tests/lookup_driver.rs
//
// Drives `lookup_all` against canned pages through a stub fetcher.

use std::cell::RefCell;

use url::Url;
use vocab_search::config::options::{Dictionary, Language, LookupOptions};
use vocab_search::core::net::{Fetch, Fetched};
use vocab_search::error::{LookupError, Result};
use vocab_search::lookup::{Outcome, lookup_all};
use vocab_search::progress::{NullProgress, Progress, ProgressEvent, Signal};

const FOUND: &str = r#"
    <table><tr class="row">
      <td><div class="hanzi">好</div></td>
      <td><div class="pinyin">hǎo</div><div class="defs">good</div></td>
    </tr></table>"#;

const EMPTY: &str = "<html><body><p>no rows</p></body></html>";

/// Serves FOUND for every term except "zzz"; fails for "down". Records URLs.
#[derive(Default)]
struct Stub {
    seen: RefCell<Vec<String>>,
}

impl Fetch for Stub {
    fn get(&self, url: &Url) -> Result<Fetched> {
        self.seen.borrow_mut().push(url.to_string());
        let query = url.query().unwrap_or_default();
        if query.ends_with("down") {
            return Err(LookupError::Status { status: 502, url: url.to_string() });
        }
        let body = if query.ends_with("zzz") { EMPTY } else { FOUND };
        Ok(Fetched { url: url.clone(), body: body.to_string() })
    }
}

/// Cancels once `stop_after` terms are done; keeps every event.
struct CancelAt {
    stop_after: usize,
    events: Vec<ProgressEvent>,
    began: Option<usize>,
    finished: bool,
}

impl CancelAt {
    fn new(stop_after: usize) -> Self {
        Self { stop_after, events: Vec::new(), began: None, finished: false }
    }
}

impl Progress for CancelAt {
    fn begin(&mut self, total: usize) {
        self.began = Some(total);
    }

    fn item_done(&mut self, index: usize, total: usize) -> Signal {
        self.events.push(ProgressEvent::new(index, total));
        if index >= self.stop_after { Signal::Cancel } else { Signal::Continue }
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

fn chinese() -> LookupOptions {
    LookupOptions::new(Language::Chinese, Dictionary::Mdbg)
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[test]
fn one_result_per_term_in_order() {
    let input = terms(&["hao", "zzz", "down", "ni"]);
    let stub = Stub::default();
    let out = lookup_all(&input, &chinese(), &stub, &mut NullProgress).unwrap();

    assert_eq!(out.len(), input.len());
    let got: Vec<&str> = out.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(got, ["hao", "zzz", "down", "ni"]);

    assert!(out[0].is_found());
    assert_eq!(out[1].outcome, Outcome::NotFound);
    assert!(matches!(out[2].outcome, Outcome::Failed(_)));
    assert!(out[3].is_found());

    // one request per term, nothing more
    assert_eq!(stub.seen.borrow().len(), 4);
}

#[test]
fn cancel_after_k_keeps_exactly_k() {
    let input = terms(&["a", "b", "c", "d", "e"]);
    let stub = Stub::default();
    let mut progress = CancelAt::new(2);
    let out = lookup_all(&input, &chinese(), &stub, &mut progress).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(stub.seen.borrow().len(), 2);
    assert_eq!(progress.began, Some(5));
    assert!(progress.finished);
    assert_eq!(
        progress.events.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["1 out of 5", "2 out of 5"]
    );
}

#[test]
fn empty_page_reads_as_not_found() {
    let out = lookup_all(&terms(&["zzz"]), &chinese(), &Stub::default(), &mut NullProgress).unwrap();
    assert_eq!(
        out[0].to_string(),
        "No results found for zzz on MDBG!\nSource: https://www.mdbg.net/chinese/dictionary?wdqb=zzz"
    );
}

#[test]
fn found_text_lists_entries_then_source() {
    let out = lookup_all(&terms(&["hao"]), &chinese(), &Stub::default(), &mut NullProgress).unwrap();
    assert_eq!(
        out[0].to_string(),
        "Chinese:\n  好\n  Pinyin: hǎo\nEnglish:\n  good\n\n\nSource:\nhttps://www.mdbg.net/chinese/dictionary?wdqb=hao"
    );
}

#[test]
fn empty_batch_is_empty_not_an_error() {
    let stub = Stub::default();
    let mut progress = CancelAt::new(usize::MAX);
    let out = lookup_all(&[], &chinese(), &stub, &mut progress).unwrap();
    assert!(out.is_empty());
    assert!(stub.seen.borrow().is_empty());
    assert_eq!(progress.began, Some(0));
    assert!(progress.finished);
}
