// benches/wordreference.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use vocab_search::config::options::{Dictionary, Language, LookupOptions};
use vocab_search::pair::LanguagePair;
use vocab_search::sites::{Site, wordreference};

const ROWS: &str = r#"
  <tr class="even">
    <td class="FrWrd"><strong>run</strong> <em class="tooltip POS2">vi<span>intransitive verb</span></em></td>
    <td>(move fast) <span class="dsense"><i>(à pied)</i></span></td>
    <td class="ToWrd">courir <em class="tooltip POS2">vi<span>verbe intransitif</span></em></td>
  </tr>
  <tr class="even"><td>&nbsp;</td><td class="To2">(familier)</td><td class="ToWrd">cavaler</td></tr>
  <tr class="even"><td>&nbsp;</td><td colspan="2" class="FrEx">She runs every morning.</td></tr>
  <tr class="even"><td>&nbsp;</td><td colspan="2" class="ToEx">Elle court tous les matins.</td></tr>
"#;

/// A results page about as long as a busy real one.
fn sample_page() -> String {
    let [src, tgt] = wordreference::header_for(LanguagePair::new(Language::English, Language::French))
        .unwrap_or(["Anglais", "Français"]);
    let mut html = format!(
        r#"<html><body><table class="WRD"><tr class="langHeader"><td class="FrWrd">{src}</td><td></td><td class="ToWrd">{tgt}</td></tr>"#
    );
    for _ in 0..60 {
        html.push_str(ROWS);
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_wordreference(c: &mut Criterion) {
    let page = sample_page();
    let doc = Html::parse_document(&page);
    let opts = LookupOptions::new(Language::French, Dictionary::WordReference);

    c.bench_function("wordreference_read_entries", |b| {
        b.iter(|| {
            let entries = wordreference::read_entries(black_box(&doc));
            black_box(entries.len())
        })
    });

    c.bench_function("wordreference_parse_full", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&page));
            black_box(wordreference::WordReference.parse(&doc, &opts))
        })
    });
}

criterion_group!(benches, bench_wordreference);
criterion_main!(benches);
