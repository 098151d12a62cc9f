// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::config::options::{Dictionary, Language};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{dictionary} does not offer {language}")]
    Unsupported { dictionary: Dictionary, language: Language },

    #[error("could not read settings {}: {source}", path.display())]
    SettingsIo { path: PathBuf, source: std::io::Error },

    #[error("malformed settings {}: {source}", path.display())]
    SettingsParse { path: PathBuf, source: toml::de::Error },
}

pub type Result<T, E = LookupError> = std::result::Result<T, E>;
