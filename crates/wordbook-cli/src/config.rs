use std::env;
use std::path::PathBuf;

/// Environment-driven settings for the demo front-end.
pub struct Config {
    /// Directory scanned at startup for `<from>_<to>.json` dictionary
    /// files, e.g. `polish_english.json`.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = env::var("WORDBOOK_DATA_DIR").ok().map(PathBuf::from);

        Config { data_dir }
    }
}
