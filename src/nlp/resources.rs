//! Idempotent setup of the local language data.
//!
//! Two resource bundles back tokenization: the English stopword list and the
//! abbreviation list for the sentence splitter. `ensure_language_data` writes
//! both into the data directory when absent so they can be inspected or
//! edited, and is a no-op on every later run. It is invoked once during
//! process startup, never on the per-request path.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::stopwords::StopwordFilter;
use super::tokenizer::{DEFAULT_ABBREVIATIONS, SentenceTokenizer};

pub const STOPWORDS_FILE: &str = "stopwords-en.txt";
pub const ABBREVIATIONS_FILE: &str = "abbreviations-en.txt";

/// Materialize the language data bundles under `dir`.
///
/// Returns whether anything was written; existing files are left untouched.
pub fn ensure_language_data(dir: &Path) -> io::Result<bool> {
    fs::create_dir_all(dir)?;
    let mut wrote = false;

    let stopwords_path = dir.join(STOPWORDS_FILE);
    if !stopwords_path.exists() {
        let mut list: Vec<String> = stop_words::get(stop_words::LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        list.sort();
        list.dedup();
        fs::write(&stopwords_path, list.join("\n"))?;
        wrote = true;
    }

    let abbreviations_path = dir.join(ABBREVIATIONS_FILE);
    if !abbreviations_path.exists() {
        fs::write(&abbreviations_path, DEFAULT_ABBREVIATIONS.join("\n"))?;
        wrote = true;
    }

    if wrote {
        info!("Wrote language data to {}", dir.display());
    } else {
        debug!("Language data already present in {}", dir.display());
    }

    Ok(wrote)
}

/// Load the sentence tokenizer from `dir`, falling back to the embedded list.
pub fn load_tokenizer(dir: &Path) -> SentenceTokenizer {
    match fs::read_to_string(dir.join(ABBREVIATIONS_FILE)) {
        Ok(contents) => SentenceTokenizer::with_abbreviations(read_lines(&contents)),
        Err(_) => SentenceTokenizer::new(),
    }
}

/// Load the stopword filter from `dir`, falling back to the embedded list.
pub fn load_stopwords(dir: &Path) -> StopwordFilter {
    match fs::read_to_string(dir.join(STOPWORDS_FILE)) {
        Ok(contents) => StopwordFilter::from_words(read_lines(&contents)),
        Err(_) => StopwordFilter::new(),
    }
}

fn read_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
