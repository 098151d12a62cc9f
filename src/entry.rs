// src/entry.rs
//
// One translation unit scraped from a results page, and its text rendering.

use std::fmt::Write as _;

use crate::core::sanitize::parenthesize;
use crate::pair::LanguagePair;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub note: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), note: None }
    }

    pub fn with_note(text: impl Into<String>, note: Option<String>) -> Self {
        Self { text: text.into(), note }
    }
}

/// Labelled extra about the source word (pinyin, traditional form, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub source: Word,
    pub details: Vec<Detail>,
    pub targets: Vec<Word>,
    pub source_examples: Vec<String>,
    pub target_examples: Vec<String>,
}

impl Entry {
    pub fn new(source: Word) -> Self {
        Self { source, ..Self::default() }
    }

    pub fn detail(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.details.push(Detail { label, value: value.into() });
        self
    }

    pub fn target(mut self, word: Word) -> Self {
        self.targets.push(word);
        self
    }

    /// Render under the headers of `pair`. Pure; same input, same text.
    pub fn format(&self, pair: LanguagePair) -> String {
        let src_indent = indent_for(pair.source.is_rtl());
        let tgt_indent = indent_for(pair.target.is_rtl());
        let mut out = String::new();

        let _ = writeln!(out, "{}:", pair.source);
        push_word(&mut out, src_indent, &self.source);
        for d in &self.details {
            let _ = writeln!(out, "{src_indent}{}: {}", d.label, d.value);
        }

        let _ = writeln!(out, "{}:", pair.target);
        for w in &self.targets {
            push_word(&mut out, tgt_indent, w);
        }

        push_examples(&mut out, pair.source.name(), &self.source_examples);
        push_examples(&mut out, pair.target.name(), &self.target_examples);

        out.push('\n');
        out
    }
}

// Indenting right-to-left text pushes it the wrong way, so RTL gets none.
fn indent_for(rtl: bool) -> &'static str {
    if rtl { "" } else { "  " }
}

fn push_word(out: &mut String, indent: &str, w: &Word) {
    out.push_str(indent);
    out.push_str(&w.text);
    if let Some(n) = &w.note {
        out.push(' ');
        out.push_str(&parenthesize(n));
    }
    out.push('\n');
}

fn push_examples(out: &mut String, language: &str, sentences: &[String]) {
    if sentences.is_empty() {
        return;
    }
    let plural = if sentences.len() > 1 { "s" } else { "" };
    let _ = writeln!(out, "Example sentence{plural} in {language}:");
    for x in sentences {
        let _ = writeln!(out, "  {x}");
    }
}
