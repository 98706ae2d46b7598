//! Build configuration.
use std::path::PathBuf;

use crate::corpus::validate::DEFAULT_MIN_RECORDS;
use crate::corpus::Source;

pub const DEFAULT_ENGLISH: &str = "raw/ethics_en.html";
pub const DEFAULT_LATIN: &str = "raw/ethics_la_part1.html";
pub const DEFAULT_DST: &str = "data/ethics.json";

const ENGLISH_NAME: &str = "Spinoza, Ethics, tr. R. H. M. Elwes (1883), Project Gutenberg";
const ENGLISH_URL: &str = "https://www.gutenberg.org/cache/epub/3800/pg3800-images.html";
const LATIN_NAME: &str = "Spinoza, Ethica, Pars Prima, The Latin Library";
const LATIN_URL: &str = "https://www.thelatinlibrary.com/spinoza.ethica1.html";

/// Everything a corpus build needs to know.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub english: PathBuf,
    pub latin: PathBuf,
    pub dst: PathBuf,
    /// Override table replacing the built-in one.
    pub overrides: Option<PathBuf>,
    pub min_records: usize,
    pub english_source: Source,
    pub latin_source: Source,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            english: PathBuf::from(DEFAULT_ENGLISH),
            latin: PathBuf::from(DEFAULT_LATIN),
            dst: PathBuf::from(DEFAULT_DST),
            overrides: None,
            min_records: DEFAULT_MIN_RECORDS,
            english_source: Source::new(ENGLISH_NAME, Some(ENGLISH_URL)),
            latin_source: Source::new(LATIN_NAME, Some(LATIN_URL)),
        }
    }
}

impl BuildConfig {
    /// Shell commands fetching the raw documents to their configured location.
    pub fn fetch_commands(&self) -> String {
        [
            (&self.english, &self.english_source),
            (&self.latin, &self.latin_source),
        ]
        .iter()
        .filter_map(|(path, source)| {
            source
                .url
                .as_ref()
                .map(|url| format!("  curl -L --create-dirs -o {} {}", path.display(), url))
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}
