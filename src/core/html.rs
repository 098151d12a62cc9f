// src/core/html.rs
//
// Thin helpers over `scraper`. Selectors used by the sites are fixed strings,
// so they are compiled once and kept in `LazyLock`s next to their users.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector literal. Only ever called with constant strings, so a
/// parse failure is a bug in this crate, not bad input.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// All visible text under `el`, whitespace collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first descendant matching `sel`.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(text)
}

/// Visible text under `el`, leaving out anything inside elements matching `skip`
/// (tooltips and other hover-only furniture).
pub fn text_excluding(el: ElementRef<'_>, skip: &Selector) -> String {
    let skipped: Vec<_> = el.select(skip).map(|e| e.id()).collect();
    let mut out = String::new();
    for node in el.descendants() {
        let Some(t) = node.value().as_text() else { continue };
        if node.ancestors().any(|a| skipped.contains(&a.id())) {
            continue;
        }
        out.push_str(t);
    }
    normalize_ws(&out)
}

/// Raw (uncollapsed) text, for the few places where the exact characters matter.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// True when the element's class list is exactly `classes`, in any order.
pub fn has_exact_classes(el: ElementRef<'_>, classes: &[&str]) -> bool {
    let own: Vec<&str> = el.value().classes().collect();
    own.len() == classes.len() && classes.iter().all(|c| own.contains(c))
}

/// True when the element has no class attribute at all.
pub fn is_unclassed(el: ElementRef<'_>) -> bool {
    el.value().attr("class").is_none()
}

/// Direct element children, skipping text and comment nodes.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}
