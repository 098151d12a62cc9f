// src/config/consts.rs

// Net config
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("vocab_search/", env!("CARGO_PKG_VERSION"));

// Dictionary sites
pub const WORDREFERENCE_BASE: &str = "https://www.wordreference.com/";
pub const MDBG_BASE: &str = "https://www.mdbg.net/chinese/dictionary";
pub const ARABDICT_BASE: &str = "https://www.arabdict.com/en/english-arabic/";
pub const MORFIX_BASE: &str = "https://www.morfix.co.il/";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Settings file: <config_dir>/vocab_search/config.toml
pub const SETTINGS_DIR: &str = "vocab_search";
pub const SETTINGS_FILE: &str = "config.toml";
