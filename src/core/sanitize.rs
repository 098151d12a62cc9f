// src/core/sanitize.rs

/// Collapse any run of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Clarifying notes sometimes arrive padded, or as a lone space.
/// Empty after trimming means "no note".
pub fn note(s: &str) -> Option<String> {
    let t = normalize_ws(s);
    if t.is_empty() { None } else { Some(t) }
}

/// Wrap a note in parentheses unless the site already did.
pub fn parenthesize(note: &str) -> String {
    let t = note.trim();
    if t.starts_with('(') && t.ends_with(')') {
        s!(t)
    } else {
        join!("(", t, ")")
    }
}

/// Remove the first occurrence of `part` from `whole` and tidy the rest.
pub fn remove_once(whole: &str, part: &str) -> String {
    if part.is_empty() {
        return normalize_ws(whole);
    }
    match whole.find(part) {
        Some(i) => normalize_ws(&join!(&whole[..i], " ", &whole[i + part.len()..])),
        None => normalize_ws(whole),
    }
}
