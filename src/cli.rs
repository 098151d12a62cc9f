// src/cli.rs
//
// Command-line frontend. Terms come from a file or stdin; results go to
// stdout, a file, or an interactive pager.

use std::{
    fs,
    io::{self, BufRead, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{
        options::{Dictionary, Direction, Language, LookupOptions},
        settings::Settings,
    },
    lookup::{self, LookupResult},
    pager::Pager,
    progress::{Progress, ProgressEvent, Signal},
};

#[derive(Debug, Parser)]
#[command(version, about = "Look up a list of vocabulary terms on online dictionaries")]
pub struct Args {
    /// File with one term per line (reads stdin when omitted)
    pub terms: Option<PathBuf>,

    /// Foreign language (defaults to the settings file, then French)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Dictionary site (defaults to the first one serving the language)
    #[arg(short, long, value_enum)]
    pub dictionary: Option<Dictionary>,

    /// Look up foreign → English instead of English → foreign
    #[arg(short, long)]
    pub reverse: bool,

    /// Accept pages that come back in the reverse language order
    #[arg(long)]
    pub allow_reversed: bool,

    /// Settings file (defaults to <config dir>/vocab_search/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write every result block to this file instead of stdout
    #[arg(short, long, conflicts_with = "page")]
    pub out: Option<PathBuf>,

    /// Browse results one at a time (needs a terms file, stdin is the keyboard)
    #[arg(short, long, requires = "terms")]
    pub page: bool,
}

impl Args {
    /// Settings first, flags on top.
    pub fn lookup_options(&self, settings: &Settings) -> Result<LookupOptions> {
        let mut opts = settings.lookup_options();
        if let Some(lang) = self.language {
            opts.set_language(lang);
        }
        if let Some(dict) = self.dictionary {
            opts.dictionary = dict;
        }
        if self.reverse {
            opts.direction = Direction::ForeignToEnglish;
        }
        if self.allow_reversed {
            opts.strict = false;
        }
        opts.validate()?;
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load_or_default(args.config.as_deref())?;
    crate::log::init(&settings.log_filter);

    let options = args.lookup_options(&settings)?;
    let terms = lookup::parse_terms(&read_input(&args)?);
    if terms.is_empty() {
        bail!("no terms to look up");
    }
    logf!("CLI: {} term(s), {:?}", terms.len(), options);

    let fetcher = settings.fetcher()?;
    let mut progress = BarProgress::new();
    let results = lookup::lookup_all(&terms, &options, &fetcher, &mut progress)?;

    if let Some(path) = &args.out {
        fs::write(path, render_all(&results))
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote {} result(s) to {}", results.len(), path.display());
    } else if args.page {
        page(&results)?;
    } else {
        print!("{}", render_all(&results));
    }
    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    match &args.terms {
        Some(path) => fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).wrap_err("reading terms from stdin")?;
            Ok(buf)
        }
    }
}

fn render_all(results: &[LookupResult]) -> String {
    let mut out = String::new();
    for r in results {
        out.push_str(&r.to_string());
        out.push_str("\n\n");
    }
    out
}

fn page(results: &[LookupResult]) -> Result<()> {
    let mut pager = Pager::new(results.len());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while let Some(r) = results.get(pager.index()) {
        writeln!(stdout, "\n=== {} ({}) ===\n{r}\n", r.term, pager.label())?;
        write!(stdout, "[n]ext  [p]revious  [q]uit > ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "" | "n" | "next" => { pager.next(); }
            "p" | "prev" | "previous" => { pager.prev(); }
            "q" | "quit" => break,
            other => writeln!(stdout, "Unknown command: {other}")?,
        }
    }
    Ok(())
}

/// indicatif bar showing "3 out of 10" and a percentage.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {msg} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Self { bar }
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.set_message(ProgressEvent::new(0, total).to_string());
    }

    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }

    fn item_done(&mut self, index: usize, total: usize) -> Signal {
        self.bar.set_position(index as u64);
        self.bar.set_message(ProgressEvent::new(index, total).to_string());
        Signal::Continue
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("cli").chain(extra.iter().copied()))
    }

    #[test]
    fn flags_override_settings() {
        let a = args(&["-l", "german", "--reverse", "--allow-reversed", "words.txt"]);
        let opts = a.lookup_options(&Settings::default()).unwrap();
        assert_eq!(opts.language, Language::German);
        assert_eq!(opts.dictionary, Dictionary::WordReference);
        assert_eq!(opts.direction, Direction::ForeignToEnglish);
        assert!(!opts.strict);
    }

    #[test]
    fn dictionary_must_serve_language() {
        let a = args(&["-l", "chinese", "-d", "morfix"]);
        assert!(a.lookup_options(&Settings::default()).is_err());

        let a = args(&["-l", "chinese"]);
        assert_eq!(a.lookup_options(&Settings::default()).unwrap().dictionary, Dictionary::Mdbg);
    }

    #[test]
    fn paging_needs_a_file() {
        assert!(Args::try_parse_from(["cli", "--page"]).is_err());
        assert!(Args::try_parse_from(["cli", "--page", "-o", "x.txt", "t.txt"]).is_err());
    }
}
