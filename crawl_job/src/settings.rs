use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_DAYS: u64 = 7;

fn default_days() -> u64 {
    DEFAULT_DAYS
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub crawl: CrawlSettings,
}

#[derive(Debug, Deserialize)]
pub struct CrawlSettings {
    /// Dates to crawl, starting today, for sources that can select a date.
    #[serde(default = "default_days")]
    pub days: u64,
    pub dictionary_path: PathBuf,
    /// JSON lines go to stdout when unset.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Registry keys to crawl; every registered source when unset.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}
