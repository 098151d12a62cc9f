// src/config/settings.rs
//
// Optional user settings, read from TOML. Every field has a default, so a
// partial file is fine and a missing file means "all defaults".
//
//   timeout_secs = 15
//   language     = "german"
//   dictionary   = "wordreference"
//   direction    = "foreign_to_english"
//   strict       = false
//   log_filter   = "vocab_search=debug"

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::{DEFAULT_LOG_FILTER, REQUEST_TIMEOUT_SECS, SETTINGS_DIR, SETTINGS_FILE, USER_AGENT};
use super::options::{Dictionary, Direction, Language, LookupOptions};
use crate::core::net::HttpFetcher;
use crate::error::{LookupError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub language: Language,
    /// Falls back to the language's first dictionary when unset or unsupported.
    pub dictionary: Option<Dictionary>,
    pub direction: Direction,
    pub strict: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let opts = LookupOptions::default();
        Self {
            timeout_secs: REQUEST_TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
            language: opts.language,
            dictionary: None,
            direction: opts.direction,
            strict: opts.strict,
            log_filter: s!(DEFAULT_LOG_FILTER),
        }
    }
}

impl Settings {
    /// `<config_dir>/vocab_search/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Missing file → defaults. Unreadable or malformed file → error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logd!("Settings: {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(LookupError::SettingsIo { path: path.to_path_buf(), source });
            }
        };

        let settings: Settings = toml::from_str(&text)
            .map_err(|source| LookupError::SettingsParse { path: path.to_path_buf(), source })?;
        logf!("Settings: loaded {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    pub fn lookup_options(&self) -> LookupOptions {
        let mut opts = LookupOptions {
            direction: self.direction,
            strict: self.strict,
            ..LookupOptions::default()
        };
        opts.set_language(self.language);
        if let Some(d) = self.dictionary.filter(|d| d.serves(self.language)) {
            opts.dictionary = d;
        }
        opts
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn fetcher(&self) -> Result<HttpFetcher> {
        HttpFetcher::new(self.timeout(), &self.user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s: Settings = toml::from_str("language = \"arabic\"\nstrict = false\n").unwrap();
        assert_eq!(s.language, Language::Arabic);
        assert!(!s.strict);
        assert_eq!(s.timeout_secs, REQUEST_TIMEOUT_SECS);

        let opts = s.lookup_options();
        assert_eq!(opts.dictionary, Dictionary::ArabDict);
    }

    #[test]
    fn unsupported_dictionary_is_ignored() {
        let s = Settings {
            language: Language::Chinese,
            dictionary: Some(Dictionary::Morfix),
            ..Settings::default()
        };
        assert_eq!(s.lookup_options().dictionary, Dictionary::Mdbg);
    }

    #[test]
    fn direction_uses_snake_case() {
        let s: Settings = toml::from_str("direction = \"foreign_to_english\"").unwrap();
        assert_eq!(s.direction, Direction::ForeignToEnglish);
    }
}
