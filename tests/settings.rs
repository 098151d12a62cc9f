// tests/settings.rs
use std::fs;

use vocab_search::config::options::{Dictionary, Direction, Language};
use vocab_search::config::settings::Settings;
use vocab_search::error::LookupError;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn file_values_feed_lookup_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "timeout_secs = 3\nlanguage = \"arabic\"\ndictionary = \"wordreference\"\ndirection = \"foreign_to_english\"\n",
    )
    .unwrap();

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.timeout().as_secs(), 3);

    let opts = s.lookup_options();
    assert_eq!(opts.language, Language::Arabic);
    assert_eq!(opts.dictionary, Dictionary::WordReference);
    assert_eq!(opts.direction, Direction::ForeignToEnglish);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [1, 2").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, LookupError::SettingsParse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unknown_language_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = \"klingon\"").unwrap();
    assert!(Settings::load(&path).is_err());
}
