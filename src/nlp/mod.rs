//! Tokenization components shared by the summarizers and the statistics.
//!
//! The sentence tokenizer and stopword filter are process-wide: `init` loads
//! them once from the local language data, and callers that never ran `init`
//! (tests, library use) fall back to the embedded defaults.

pub mod resources;
pub mod stopwords;
pub mod tokenizer;

use std::path::Path;

use once_cell::sync::OnceCell;

use self::stopwords::StopwordFilter;
use self::tokenizer::SentenceTokenizer;

static TOKENIZER: OnceCell<SentenceTokenizer> = OnceCell::new();
static STOPWORDS: OnceCell<StopwordFilter> = OnceCell::new();

/// Install tokenization resources from the data directory.
///
/// Repeated calls are no-ops.
pub fn init(dir: &Path) {
    let _ = TOKENIZER.set(resources::load_tokenizer(dir));
    let _ = STOPWORDS.set(resources::load_stopwords(dir));
}

/// The process-wide sentence tokenizer.
pub fn tokenizer() -> &'static SentenceTokenizer {
    TOKENIZER.get_or_init(SentenceTokenizer::new)
}

/// The process-wide stopword filter.
pub fn stopwords() -> &'static StopwordFilter {
    STOPWORDS.get_or_init(StopwordFilter::new)
}
